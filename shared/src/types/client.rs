//! Client requirements captured at intake

use serde::{Deserialize, Serialize};

use super::ServiceCategory;

fn default_required_categories() -> Vec<ServiceCategory> {
    ServiceCategory::ALL.to_vec()
}

/// Everything the client told us about the event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRequirements {
    pub client_name: String,
    pub guest_count: u32,
    pub total_budget: f64,
    pub location: String,

    /// Free-text description of the event the client has in mind
    #[serde(default)]
    pub vision: String,

    #[serde(default)]
    pub preferred_venue_types: Vec<String>,

    #[serde(default)]
    pub cuisine_preferences: Vec<String>,

    /// Categories the client wants to spend more on
    #[serde(default)]
    pub priorities: Vec<ServiceCategory>,

    #[serde(default = "default_required_categories")]
    pub required_categories: Vec<ServiceCategory>,
}

impl ClientRequirements {
    pub fn new(
        client_name: impl Into<String>,
        guest_count: u32,
        total_budget: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            guest_count,
            total_budget,
            location: location.into(),
            vision: String::new(),
            preferred_venue_types: Vec::new(),
            cuisine_preferences: Vec::new(),
            priorities: Vec::new(),
            required_categories: default_required_categories(),
        }
    }

    pub fn with_vision(mut self, vision: impl Into<String>) -> Self {
        self.vision = vision.into();
        self
    }

    pub fn with_venue_types(mut self, venue_types: &[&str]) -> Self {
        self.preferred_venue_types = venue_types.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_cuisines(mut self, cuisines: &[&str]) -> Self {
        self.cuisine_preferences = cuisines.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_priorities(mut self, priorities: &[ServiceCategory]) -> Self {
        self.priorities = priorities.to_vec();
        self
    }

    pub fn with_required_categories(mut self, categories: &[ServiceCategory]) -> Self {
        self.required_categories = categories.to_vec();
        self
    }

    pub fn requires(&self, category: ServiceCategory) -> bool {
        self.required_categories.contains(&category)
    }

    /// Required categories, deduplicated and in key order
    pub fn required_sorted(&self) -> Vec<ServiceCategory> {
        let mut categories = self.required_categories.clone();
        categories.sort();
        categories.dedup();
        categories
    }
}
