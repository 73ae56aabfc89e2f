//! Fitness scoring for vendor combinations
//!
//! A combination is scored against an allocation and the client's
//! requirements as a weighted sum of three sub-scores:
//!
//! - **budget**: how each category's cost compares with its allocation
//! - **preference**: venue type, cuisine and location matches
//! - **compatibility**: how many vendors share a city
//!
//! Anything that cannot be measured (zero allocation, per-guest pricing with
//! zero guests, a preference the client never stated) counts as 1.0.

use shared::{
    attribute_keys, normalize_label, BudgetAllocation, ClientRequirements, FitnessScore,
    ScoreComponents, ScoredCombination, ServiceCategory, VendorCombination, VendorOffer,
};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::ScoringConfig;
use crate::error::{PlannerError, PlannerResult};

/// Scores vendor combinations; holds only configuration
#[derive(Debug, Clone, Default)]
pub struct FitnessScorer {
    config: ScoringConfig,
}

impl FitnessScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a combination, failing if it is missing a required category
    pub fn score(
        &self,
        combination: &VendorCombination,
        requirements: &ClientRequirements,
        allocation: &BudgetAllocation,
    ) -> PlannerResult<FitnessScore> {
        Self::check_complete(combination, requirements)?;

        let (budget, category_budget) = self.budget_fitness(combination, requirements, allocation);
        let preference = self.preference_fitness(combination, requirements);
        let compatibility = Self::compatibility_fitness(combination);

        let weights = &self.config.weights;
        let overall = (weights.budget * budget
            + weights.preference * preference
            + weights.compatibility * compatibility)
            .clamp(0.0, 1.0);

        Ok(FitnessScore {
            overall,
            components: ScoreComponents {
                budget,
                preference,
                compatibility,
            },
            category_budget,
        })
    }

    /// Score and return an annotated copy of the combination
    pub fn score_combination(
        &self,
        combination: &VendorCombination,
        requirements: &ClientRequirements,
        allocation: &BudgetAllocation,
    ) -> PlannerResult<ScoredCombination> {
        let fitness = self.score(combination, requirements, allocation)?;
        Ok(ScoredCombination {
            combination: combination.clone(),
            fitness,
        })
    }

    /// Mean per-category budget score, plus the per-category breakdown
    pub fn budget_fitness(
        &self,
        combination: &VendorCombination,
        requirements: &ClientRequirements,
        allocation: &BudgetAllocation,
    ) -> (f64, BTreeMap<ServiceCategory, f64>) {
        let category_budget: BTreeMap<_, _> = combination
            .offers
            .iter()
            .map(|(category, offer)| {
                let score = self.offer_budget_score(offer, requirements.guest_count, allocation.amount_for(*category));
                (*category, score)
            })
            .collect();

        if category_budget.is_empty() {
            return (1.0, category_budget);
        }
        let mean = category_budget.values().sum::<f64>() / category_budget.len() as f64;
        (mean, category_budget)
    }

    fn offer_budget_score(&self, offer: &VendorOffer, guest_count: u32, allocated: Option<f64>) -> f64 {
        if offer.pricing.is_per_guest() && guest_count == 0 {
            return 1.0;
        }
        self.category_budget_score(offer.cost_for(guest_count), allocated)
    }

    /// Budget score for one category
    ///
    /// Under budget the score runs from 1.0 (free) down to the at-budget score;
    /// over budget it decays linearly from the at-budget score to 0.0.
    pub fn category_budget_score(&self, cost: f64, allocated: Option<f64>) -> f64 {
        let allocated = match allocated {
            Some(amount) if amount > 0.0 => amount,
            _ => return 1.0,
        };

        let curve = &self.config.budget;
        if cost <= allocated {
            (1.0 - (cost / allocated) * curve.under_budget_penalty).clamp(0.0, 1.0)
        } else {
            let overage_ratio = (cost - allocated) / allocated;
            (curve.at_budget_score() * (1.0 - overage_ratio * curve.overage_decay)).max(0.0)
        }
    }

    /// Additive preference points, clamped to 1.0
    pub fn preference_fitness(&self, combination: &VendorCombination, requirements: &ClientRequirements) -> f64 {
        let weights = &self.config.preference;
        let venue = combination.offer(ServiceCategory::Venue);
        let caterer = combination.offer(ServiceCategory::Caterer);

        let mut score = 0.0;

        let preferred_types = normalized_set(&requirements.preferred_venue_types);
        let venue_type_met = match venue {
            Some(venue) if !preferred_types.is_empty() => venue
                .attribute_values(attribute_keys::VENUE_TYPE)
                .iter()
                .any(|venue_type| preferred_types.contains(&normalize_label(venue_type))),
            _ => true,
        };
        if venue_type_met {
            score += weights.venue_type;
        }

        let preferred_cuisines = normalized_set(&requirements.cuisine_preferences);
        let cuisine_met = match caterer {
            Some(caterer) if !preferred_cuisines.is_empty() => caterer
                .attribute_values(attribute_keys::CUISINES)
                .iter()
                .any(|cuisine| preferred_cuisines.contains(&normalize_label(cuisine))),
            _ => true,
        };
        if cuisine_met {
            score += weights.cuisine;
        }

        let location = normalize_label(&requirements.location);
        let location_met = match venue {
            Some(venue) if !location.is_empty() => normalize_label(&venue.city) == location,
            _ => true,
        };
        if location_met {
            score += weights.location;
        }

        score.min(1.0)
    }

    /// Share of vendors located in the most common city
    pub fn compatibility_fitness(combination: &VendorCombination) -> f64 {
        if combination.is_empty() {
            return 1.0;
        }

        let mut city_counts: BTreeMap<String, usize> = BTreeMap::new();
        for offer in combination.offers.values() {
            *city_counts.entry(normalize_label(&offer.city)).or_default() += 1;
        }
        let largest_group = city_counts.values().copied().max().unwrap_or(0);

        largest_group as f64 / combination.len() as f64
    }

    fn check_complete(combination: &VendorCombination, requirements: &ClientRequirements) -> PlannerResult<()> {
        for (slot, offer) in &combination.offers {
            if offer.category != *slot {
                return Err(PlannerError::CategoryMismatch {
                    combination_id: combination.combination_id.clone(),
                    offer_id: offer.id.clone(),
                    expected: *slot,
                    actual: offer.category,
                });
            }
        }

        if let Some(category) = combination
            .offers
            .keys()
            .find(|category| !requirements.required_categories.contains(*category))
        {
            return Err(PlannerError::UnexpectedCategory {
                combination_id: combination.combination_id.clone(),
                category: *category,
            });
        }

        if let Some(missing) = requirements
            .required_sorted()
            .into_iter()
            .find(|category| combination.offer(*category).is_none())
        {
            return Err(PlannerError::IncompleteCombination {
                combination_id: combination.combination_id.clone(),
                missing,
            });
        }

        Ok(())
    }
}

fn normalized_set(labels: &[String]) -> BTreeSet<String> {
    labels
        .iter()
        .map(|label| normalize_label(label))
        .filter(|label| !label.is_empty())
        .collect()
}
