//! Boundary messages for the planning system
//!
//! - `request`: what a caller submits to plan an event
//! - `report`: what the planner hands back

pub mod report;
pub mod request;

pub use report::{PlanOutcome, PlanReport, SourcingSummary};
pub use request::PlanRequest;
