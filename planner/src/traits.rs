//! Trait definitions with mockall annotations for testing
//!
//! The planner's only I/O seams: where vendor offers come from and where the
//! finished outcome goes. Both are injected so the planning pipeline can be
//! exercised without touching the file system.

use shared::{PlanOutcome, VendorOffer};

use crate::error::PlannerResult;

/// Source of the vendor catalog
#[mockall::automock]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every offer the planner may choose from
    ///
    /// # Returns
    /// All offers in catalog order, or an error if the catalog cannot be
    /// read or decoded
    async fn load_offers(&self) -> PlannerResult<Vec<VendorOffer>>;
}

/// Destination for planning outcomes
#[mockall::automock]
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    /// Persist or print a finished outcome
    async fn write_report(&self, outcome: &PlanOutcome) -> PlannerResult<()>;
}
