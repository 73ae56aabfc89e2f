//! Re-offer the same pool every round

use shared::VendorCombination;

use super::super::traits::PoolRefresher;
use super::super::types::BeamState;

/// Hands back the initial pool unchanged
///
/// With fixed weights every round after the first re-scores the same
/// combinations and the beam does not change.
pub struct StaticPool {
    pool: Vec<VendorCombination>,
}

impl StaticPool {
    pub fn new(pool: Vec<VendorCombination>) -> Self {
        Self { pool }
    }
}

impl PoolRefresher for StaticPool {
    fn refresh(&mut self, _state: &BeamState) -> Vec<VendorCombination> {
        self.pool.clone()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
