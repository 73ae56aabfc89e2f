//! Beam search over vendor combinations
//!
//! Each round scores every combination under consideration (the current
//! beam plus whatever the refresher supplies), sorts by overall score with
//! ties broken by combination id, and keeps the best `beam_width`. The loop
//! stops once the best score reaches the convergence threshold or the
//! iteration cap is hit.

use shared::{
    BeamSearchOutcome, BudgetAllocation, ClientRequirements, RejectedCombination, ScoredCombination,
    TerminationReason, VendorCombination,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::fitness::FitnessScorer;
use crate::config::SearchConfig;
use crate::optimization::{BeamState, PoolRefresher, StaticPool};

/// Best-first pruning of a candidate pool down to a ranked shortlist
#[derive(Debug, Clone, Default)]
pub struct BeamSearchOptimizer {
    scorer: FitnessScorer,
    config: SearchConfig,
}

impl BeamSearchOptimizer {
    pub fn new(scorer: FitnessScorer, config: SearchConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn scorer(&self) -> &FitnessScorer {
        &self.scorer
    }

    /// Run against a pool that is re-offered unchanged every round
    pub fn run_static(
        &self,
        pool: &[VendorCombination],
        requirements: &ClientRequirements,
        allocation: &BudgetAllocation,
    ) -> BeamSearchOutcome {
        let mut refresher = StaticPool::new(pool.to_vec());
        self.run(pool, requirements, allocation, &mut refresher)
    }

    /// Run the search, asking `refresher` for new candidates between rounds
    pub fn run(
        &self,
        initial_pool: &[VendorCombination],
        requirements: &ClientRequirements,
        allocation: &BudgetAllocation,
        refresher: &mut dyn PoolRefresher,
    ) -> BeamSearchOutcome {
        if initial_pool.is_empty() {
            return BeamSearchOutcome::empty(TerminationReason::EmptyPool, "no combinations provided");
        }

        let beam_width = self.config.beam_width.max(1);
        let max_iterations = self.config.max_iterations.max(1);

        let mut state = BeamState::initial();
        let mut candidates: Vec<VendorCombination> = initial_pool.to_vec();
        let mut evaluated: BTreeSet<String> = BTreeSet::new();
        let mut rejected: BTreeMap<String, String> = BTreeMap::new();
        let mut score_evaluations = 0usize;

        let termination = loop {
            let mut round: Vec<ScoredCombination> = Vec::new();
            {
                let mut seen: BTreeSet<&str> = BTreeSet::new();
                let considered = state
                    .beam
                    .iter()
                    .map(|scored| &scored.combination)
                    .chain(candidates.iter());

                for combination in considered {
                    if !seen.insert(combination.combination_id.as_str()) {
                        continue;
                    }
                    score_evaluations += 1;
                    match self.scorer.score_combination(combination, requirements, allocation) {
                        Ok(scored) => {
                            evaluated.insert(combination.combination_id.clone());
                            round.push(scored);
                        }
                        Err(err) => {
                            rejected
                                .entry(combination.combination_id.clone())
                                .or_insert_with(|| err.to_string());
                        }
                    }
                }
            }

            round.sort_by(rank);
            round.truncate(beam_width);

            let iteration = state.iteration + 1;
            state = BeamState {
                iteration,
                beam: round,
                should_continue: false,
            };
            let best = state.best_score();
            let converged = best.is_some_and(|score| score >= self.config.convergence_threshold);
            let exhausted = iteration >= max_iterations;
            state.should_continue = !converged && !exhausted;

            tracing::debug!(
                iteration,
                beam = state.beam.len(),
                best = best.unwrap_or(0.0),
                evaluated = evaluated.len(),
                refresher = refresher.name(),
                "Beam search round complete"
            );

            if converged {
                break TerminationReason::Converged;
            }
            if exhausted {
                break if state.beam.is_empty() {
                    TerminationReason::NoValidCombinations
                } else {
                    TerminationReason::IterationLimit
                };
            }

            candidates = refresher.refresh(&state);
        };

        let rejected: Vec<RejectedCombination> = rejected
            .into_iter()
            .map(|(combination_id, reason)| RejectedCombination { combination_id, reason })
            .collect();

        let message = match termination {
            TerminationReason::NoValidCombinations => Some(format!(
                "none of the {} combinations offered could be scored",
                rejected.len()
            )),
            _ => None,
        };

        BeamSearchOutcome {
            score_range: score_range(&state.beam),
            top_combinations: state.beam,
            total_evaluated: evaluated.len(),
            score_evaluations,
            iterations_used: state.iteration,
            termination,
            message,
            rejected,
        }
    }
}

/// Descending by overall score, then ascending by combination id
pub fn rank(a: &ScoredCombination, b: &ScoredCombination) -> Ordering {
    b.overall()
        .total_cmp(&a.overall())
        .then_with(|| a.id().cmp(b.id()))
}

fn score_range(beam: &[ScoredCombination]) -> Option<(f64, f64)> {
    let first = beam.first()?.overall();
    Some(beam.iter().map(ScoredCombination::overall).fold((first, first), |(min, max), score| {
        (min.min(score), max.max(score))
    }))
}
