//! Test fixtures and data for planner tests
//!
//! A small Bangalore wedding catalog with one offer per category that is
//! clearly the best fit, plus a few that the sourcing filters should drop.

use shared::{
    attribute_keys, BudgetAllocation, ClientRequirements, PlanRequest, Pricing, ServiceCategory, VendorCombination,
    VendorOffer,
};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const CLIENT: &'static str = "Meera";
    pub const CITY: &'static str = "Bangalore";
    pub const GUESTS: u32 = 250;
    pub const BUDGET: f64 = 1_500_000.0;

    /// Cheapest in-city, on-preference pick in every category
    pub const BEST_COMBINATION: &'static str = "v1+c1+p1+m1";

    pub fn requirements() -> ClientRequirements {
        ClientRequirements::new(Self::CLIENT, Self::GUESTS, Self::BUDGET, Self::CITY)
            .with_vision("Garden wedding with family and friends")
            .with_venue_types(&["Garden"])
            .with_cuisines(&["South Indian"])
    }

    pub fn request() -> PlanRequest {
        PlanRequest::new(Self::requirements())
    }

    pub fn catalog() -> Vec<VendorOffer> {
        vec![
            VendorOffer::new("v1", "Lalbagh Lawns", ServiceCategory::Venue, Pricing::Flat(300_000.0), "Bangalore")
                .with_capacity(100, 400)
                .with_attribute(attribute_keys::VENUE_TYPE, "garden"),
            VendorOffer::new("v2", "Palace Grounds", ServiceCategory::Venue, Pricing::Flat(550_000.0), "Bangalore")
                .with_capacity(200, 1000)
                .with_attribute(attribute_keys::VENUE_TYPE, "palace"),
            VendorOffer::new("v3", "Heritage Courtyard", ServiceCategory::Venue, Pricing::Flat(250_000.0), "Mysore")
                .with_capacity(50, 300)
                .with_attribute(attribute_keys::VENUE_TYPE, "garden"),
            // Too small for 250 guests
            VendorOffer::new("v4", "Corner Hall", ServiceCategory::Venue, Pricing::Flat(100_000.0), "Bangalore")
                .with_capacity(20, 80)
                .with_attribute(attribute_keys::VENUE_TYPE, "banquet hall"),
            VendorOffer::new("c1", "Udupi Kitchens", ServiceCategory::Caterer, Pricing::PerGuest(800.0), "Bangalore")
                .with_attribute(attribute_keys::CUISINES, vec!["south indian", "north indian"]),
            VendorOffer::new("c2", "Royal Feast", ServiceCategory::Caterer, Pricing::PerGuest(1_800.0), "Bangalore")
                .with_attribute(attribute_keys::CUISINES, vec!["mughlai"]),
            // Far past any catering allocation at 250 guests
            VendorOffer::new("c3", "Saffron Gold", ServiceCategory::Caterer, Pricing::PerGuest(4_000.0), "Bangalore")
                .with_attribute(attribute_keys::CUISINES, vec!["continental"]),
            VendorOffer::new("p1", "Lens Story", ServiceCategory::Photographer, Pricing::Flat(120_000.0), "Bangalore")
                .with_attribute(attribute_keys::STYLE_TAGS, vec!["candid"]),
            VendorOffer::new("p2", "Candid Frames", ServiceCategory::Photographer, Pricing::Flat(200_000.0), "Mysore"),
            VendorOffer::new("m1", "Glam Room", ServiceCategory::MakeupArtist, Pricing::Flat(60_000.0), "Bangalore"),
            VendorOffer::new("m2", "Bridal Studio", ServiceCategory::MakeupArtist, Pricing::Flat(110_000.0), "Bangalore"),
        ]
    }

    /// Catalog with every makeup artist removed
    pub fn catalog_without_makeup() -> Vec<VendorOffer> {
        Self::catalog()
            .into_iter()
            .filter(|offer| offer.category != ServiceCategory::MakeupArtist)
            .collect()
    }

    /// Prices that only fit the balanced split: the venue is just past the
    /// experience-focused tolerance and the photographer past the venue-focused one
    pub fn tight_catalog() -> Vec<VendorOffer> {
        vec![
            VendorOffer::new("v1", "Riverside Hall", ServiceCategory::Venue, Pricing::Flat(415_000.0), "Pune"),
            VendorOffer::new("c1", "Deccan Caterers", ServiceCategory::Caterer, Pricing::PerGuest(1_500.0), "Pune"),
            VendorOffer::new("p1", "Shutter House", ServiceCategory::Photographer, Pricing::Flat(147_000.0), "Pune"),
            VendorOffer::new("m1", "Blush Studio", ServiceCategory::MakeupArtist, Pricing::Flat(98_000.0), "Pune"),
        ]
    }

    pub fn tight_request() -> PlanRequest {
        PlanRequest::new(ClientRequirements::new("Anaya", 200, 1_000_000.0, "Pune"))
    }

    /// Two-category allocation used by the search scenarios
    pub fn venue_caterer_allocation() -> BudgetAllocation {
        BudgetAllocation::from_amounts(
            "custom",
            &[(ServiceCategory::Venue, 350_000.0), (ServiceCategory::Caterer, 220_000.0)],
        )
    }

    pub fn venue_caterer_requirements() -> ClientRequirements {
        ClientRequirements::new(Self::CLIENT, Self::GUESTS, 570_000.0, Self::CITY)
            .with_required_categories(&[ServiceCategory::Venue, ServiceCategory::Caterer])
    }

    /// Five venue + caterer pairs with strictly decreasing fitness
    pub fn ranked_pool() -> Vec<VendorCombination> {
        let pair = |id: &str, venue_cost: f64, per_guest: f64| {
            VendorCombination::new(
                id,
                vec![
                    VendorOffer::new(format!("{id}-v"), "Venue", ServiceCategory::Venue, Pricing::Flat(venue_cost), "Bangalore"),
                    VendorOffer::new(format!("{id}-c"), "Caterer", ServiceCategory::Caterer, Pricing::PerGuest(per_guest), "Bangalore"),
                ],
                Self::GUESTS,
            )
        };

        vec![
            pair("p3", 300_000.0, 800.0),
            pair("p5", 500_000.0, 1_000.0),
            pair("p1", 100_000.0, 400.0),
            pair("p4", 350_000.0, 880.0),
            pair("p2", 200_000.0, 600.0),
        ]
    }
}
