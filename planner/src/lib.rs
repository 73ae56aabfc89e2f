//! Vendor combination planner
//!
//! Splits a client's budget across service categories, sources candidate
//! vendor combinations from a catalog and shortlists the best ones with a
//! beam search driven by a weighted fitness score.

pub mod config;
pub mod core;
pub mod error;
pub mod optimization;
pub mod planner;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::{PlannerConfig, RefreshMode};
pub use core::{BeamSearchOptimizer, BudgetAllocationPlanner, CombinationBuilder, FitnessScorer};
pub use error::{PlannerError, PlannerResult};
pub use planner::Planner;
pub use traits::{CatalogSource, ReportSink};
