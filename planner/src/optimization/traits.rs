//! Pool refresh trait definition

use shared::VendorCombination;

use super::types::BeamState;

/// Supplies the candidates for the next beam search round
///
/// The current beam is always carried forward by the search itself, so a
/// refresher only returns what should be considered alongside it.
#[mockall::automock]
pub trait PoolRefresher: Send {
    /// Candidates to score next to the current beam
    ///
    /// Returning an empty list re-scores the beam alone.
    fn refresh(&mut self, state: &BeamState) -> Vec<VendorCombination>;

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}
