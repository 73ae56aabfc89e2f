//! Vendor catalog records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ServiceCategory;

/// Well-known keys in a vendor's free-form attribute map
pub mod attribute_keys {
    pub const VENUE_TYPE: &str = "venue_type";
    pub const CUISINES: &str = "cuisines";
    pub const STYLE_TAGS: &str = "style_tags";
}

/// How an offer is priced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", content = "amount", rename_all = "snake_case")]
pub enum Pricing {
    /// One price for the whole event
    Flat(f64),
    /// Price multiplied by the guest count
    PerGuest(f64),
}

impl Pricing {
    /// Effective cost of the offer for the given number of guests
    pub fn cost_for(&self, guest_count: u32) -> f64 {
        match self {
            Pricing::Flat(amount) => *amount,
            Pricing::PerGuest(amount) => amount * f64::from(guest_count),
        }
    }

    pub fn is_per_guest(&self) -> bool {
        matches!(self, Pricing::PerGuest(_))
    }
}

/// Guest capacity a venue can host (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityBounds {
    pub min: u32,
    pub max: u32,
}

impl CapacityBounds {
    pub fn admits(&self, guest_count: u32) -> bool {
        (self.min..=self.max).contains(&guest_count)
    }
}

/// A single attribute value: either one label or a list of labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
}

impl AttributeValue {
    pub fn values(&self) -> Vec<&str> {
        match self {
            AttributeValue::Text(value) => vec![value.as_str()],
            AttributeValue::List(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        AttributeValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// One bookable offering from the vendor catalog
///
/// Offers are loaded once per planning run and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorOffer {
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    pub pricing: Pricing,
    pub city: String,

    /// Only meaningful for venues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacityBounds>,

    /// Cuisines, amenities, style tags and similar descriptive labels
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl VendorOffer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ServiceCategory,
        pricing: Pricing,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            pricing,
            city: city.into(),
            capacity: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_capacity(mut self, min: u32, max: u32) -> Self {
        self.capacity = Some(CapacityBounds { min, max });
        self
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Labels stored under `key`, empty when the attribute is absent
    pub fn attribute_values(&self, key: &str) -> Vec<&str> {
        self.attributes
            .get(key)
            .map(AttributeValue::values)
            .unwrap_or_default()
    }

    pub fn cost_for(&self, guest_count: u32) -> f64 {
        self.pricing.cost_for(guest_count)
    }

    /// Offers without capacity bounds accept any guest count
    pub fn fits_guest_count(&self, guest_count: u32) -> bool {
        self.capacity.map_or(true, |bounds| bounds.admits(guest_count))
    }
}
