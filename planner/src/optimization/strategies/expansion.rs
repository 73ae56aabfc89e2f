//! Feed the sourced pool to the search in batches

use shared::VendorCombination;
use std::collections::VecDeque;

use super::super::traits::PoolRefresher;
use super::super::types::BeamState;

/// Holds back the rest of a sourced pool and releases one batch per round
///
/// Cheaper combinations come first out of sourcing, so early rounds look at
/// the most affordable options and later rounds widen the search only while
/// the beam has not converged.
pub struct CatalogExpansion {
    remaining: VecDeque<VendorCombination>,
    batch_size: usize,
}

impl CatalogExpansion {
    /// Take the first batch out of `pool`; the rest is released by `refresh`
    pub fn split(pool: Vec<VendorCombination>, batch_size: usize) -> (Vec<VendorCombination>, Self) {
        let batch_size = batch_size.max(1);
        let mut remaining: VecDeque<VendorCombination> = pool.into();
        let initial: Vec<VendorCombination> = remaining.drain(..batch_size.min(remaining.len())).collect();

        (initial, Self { remaining, batch_size })
    }

    /// Combinations not yet released
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl PoolRefresher for CatalogExpansion {
    fn refresh(&mut self, state: &BeamState) -> Vec<VendorCombination> {
        let take = self.batch_size.min(self.remaining.len());
        let batch: Vec<VendorCombination> = self.remaining.drain(..take).collect();
        tracing::debug!(
            iteration = state.iteration,
            released = batch.len(),
            remaining = self.remaining.len(),
            "Expanding candidate pool"
        );
        batch
    }

    fn name(&self) -> &'static str {
        "expand"
    }
}
