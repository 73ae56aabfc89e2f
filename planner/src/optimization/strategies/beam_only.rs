//! Carry only the beam forward

use shared::VendorCombination;

use super::super::traits::PoolRefresher;
use super::super::types::BeamState;

/// Never adds candidates; later rounds re-score the beam alone
pub struct BeamOnly;

impl PoolRefresher for BeamOnly {
    fn refresh(&mut self, _state: &BeamState) -> Vec<VendorCombination> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "beam_only"
    }
}
