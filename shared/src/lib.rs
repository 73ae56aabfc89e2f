//! Shared types for the vendor planning system
//!
//! Contains the data model every component agrees on (vendor offers, client
//! requirements, allocations, combinations and search results), boundary
//! messages, the shared error type and tracing setup.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{PlanOutcome, PlanReport, PlanRequest, SourcingSummary};
