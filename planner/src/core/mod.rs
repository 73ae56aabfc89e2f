//! Core planning logic
//!
//! Everything here is pure and synchronous: no I/O, no clocks, no randomness.
//! Identical inputs always produce identical outputs.

pub mod allocation;
pub mod beam;
pub mod fitness;
pub mod sourcing;

pub use allocation::{BudgetAllocationPlanner, BALANCED, EXPERIENCE_FOCUSED, VENUE_FOCUSED};
pub use beam::BeamSearchOptimizer;
pub use fitness::FitnessScorer;
pub use sourcing::{CombinationBuilder, SourcingResult};
