//! Core types used throughout the planning system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::SharedError;

pub mod client;
pub mod plan;
pub mod vendor;

pub use client::ClientRequirements;
pub use plan::*;
pub use vendor::{attribute_keys, AttributeValue, CapacityBounds, Pricing, VendorOffer};

/// Unique identifier for a single planning run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(Uuid);

impl PlanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, SharedError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidPlanId { input: s.to_string() })
    }

    /// First block of the UUID, enough to tell runs apart in logs
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plan_{}", self.short())
    }
}

/// Bookable service categories a plan is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Venue,
    Caterer,
    Photographer,
    MakeupArtist,
}

impl ServiceCategory {
    /// Every category, in key order
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Venue,
        ServiceCategory::Caterer,
        ServiceCategory::Photographer,
        ServiceCategory::MakeupArtist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Venue => "venue",
            ServiceCategory::Caterer => "caterer",
            ServiceCategory::Photographer => "photographer",
            ServiceCategory::MakeupArtist => "makeup_artist",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).replace(['-', ' '], "_").as_str() {
            "venue" => Ok(ServiceCategory::Venue),
            "caterer" | "catering" => Ok(ServiceCategory::Caterer),
            "photographer" | "photography" => Ok(ServiceCategory::Photographer),
            "makeup_artist" | "makeup" => Ok(ServiceCategory::MakeupArtist),
            _ => Err(SharedError::InvalidCategory { input: s.to_string() }),
        }
    }
}

/// Informal event size/grandeur classification driving the budget split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTier {
    Intimate,
    Standard,
    Luxury,
}

impl fmt::Display for EventTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTier::Intimate => write!(f, "intimate"),
            EventTier::Standard => write!(f, "standard"),
            EventTier::Luxury => write!(f, "luxury"),
        }
    }
}

/// Canonical form used for every case-insensitive label comparison
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}
