//! Planning results returned at the system boundary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AllocationPlan, BeamSearchOutcome, EventTier, PlanId, ServiceCategory};

/// What the sourcing stage did with the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourcingSummary {
    pub considered_offers: usize,
    pub filtered_offers: usize,
    pub combinations_sourced: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_categories: Vec<ServiceCategory>,
}

/// Full record of a completed planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub plan_id: PlanId,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub event_tier: EventTier,
    pub allocation_plan: AllocationPlan,
    pub chosen_strategy: String,
    pub sourcing: SourcingSummary,
    pub search: BeamSearchOutcome,
}

/// Either a report or a user-facing explanation of why planning was refused
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanOutcome {
    Completed(PlanReport),
    Rejected { plan_id: PlanId, reason: String },
}

impl PlanOutcome {
    pub fn plan_id(&self) -> PlanId {
        match self {
            PlanOutcome::Completed(report) => report.plan_id,
            PlanOutcome::Rejected { plan_id, .. } => *plan_id,
        }
    }

    pub fn report(&self) -> Option<&PlanReport> {
        match self {
            PlanOutcome::Completed(report) => Some(report),
            PlanOutcome::Rejected { .. } => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, PlanOutcome::Rejected { .. })
    }
}
