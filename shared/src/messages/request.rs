//! Planning request submitted at the system boundary

use serde::{Deserialize, Serialize};

use crate::errors::SharedResult;
use crate::types::ClientRequirements;

/// Request to plan one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub requirements: ClientRequirements,

    /// Force a specific allocation variant instead of the recommended one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl PlanRequest {
    pub fn new(requirements: ClientRequirements) -> Self {
        Self { requirements, strategy: None }
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    pub fn from_json(json: &str) -> SharedResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
