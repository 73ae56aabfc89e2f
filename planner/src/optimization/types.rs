//! Beam search working state

use shared::ScoredCombination;

/// Working set of the beam search, replaced after every round
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeamState {
    /// Rounds completed so far
    pub iteration: u32,

    /// Current top candidates, best first
    pub beam: Vec<ScoredCombination>,

    /// Whether another round will run
    pub should_continue: bool,
}

impl BeamState {
    pub fn initial() -> Self {
        Self {
            iteration: 0,
            beam: Vec::new(),
            should_continue: true,
        }
    }

    pub fn best_score(&self) -> Option<f64> {
        self.beam.first().map(ScoredCombination::overall)
    }

    pub fn contains(&self, combination_id: &str) -> bool {
        self.beam.iter().any(|scored| scored.id() == combination_id)
    }
}
