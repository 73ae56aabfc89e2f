//! Service-specific tests
//!
//! Each service has its own test file; shared sample data lives in `common`.


pub mod common {
    use shared::{Pricing, ServiceCategory, VendorOffer};

    /// Catalog JSON in the on-disk format, one offer per category
    pub const SAMPLE_CATALOG_JSON: &str = r#"[
        {
            "id": "v1",
            "name": "Lalbagh Lawns",
            "category": "venue",
            "pricing": {"model": "flat", "amount": 300000},
            "city": "Bangalore",
            "capacity": {"min": 100, "max": 400},
            "attributes": {"venue_type": "garden", "amenities": ["parking", "stage"]}
        },
        {
            "id": "c1",
            "name": "Udupi Kitchens",
            "category": "caterer",
            "pricing": {"model": "per_guest", "amount": 800},
            "city": "Bangalore",
            "attributes": {"cuisines": ["south indian", "north indian"]}
        }
    ]"#;

    pub fn sample_offers() -> Vec<VendorOffer> {
        vec![
            VendorOffer::new("v1", "Lalbagh Lawns", ServiceCategory::Venue, Pricing::Flat(300_000.0), "Bangalore"),
            VendorOffer::new("c1", "Udupi Kitchens", ServiceCategory::Caterer, Pricing::PerGuest(800.0), "Bangalore"),
        ]
    }
}
