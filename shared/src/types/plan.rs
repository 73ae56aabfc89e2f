//! Allocations, vendor combinations and search results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{EventTier, ServiceCategory, VendorOffer};

/// Per-category split of the total budget
///
/// Category amounts plus contingency add up to `total_budget` within one
/// rounding unit. Variants are separate values; an allocation is never
/// modified after it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub strategy: String,
    pub total_budget: f64,
    pub amounts: BTreeMap<ServiceCategory, f64>,

    /// Share kept back for miscellaneous spending
    #[serde(default)]
    pub contingency: f64,
}

impl BudgetAllocation {
    pub fn new(
        strategy: impl Into<String>,
        total_budget: f64,
        amounts: BTreeMap<ServiceCategory, f64>,
        contingency: f64,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            total_budget,
            amounts,
            contingency,
        }
    }

    /// Allocation whose total is exactly the sum of the given amounts
    pub fn from_amounts(strategy: impl Into<String>, amounts: &[(ServiceCategory, f64)]) -> Self {
        let amounts: BTreeMap<_, _> = amounts.iter().copied().collect();
        let total = amounts.values().sum();
        Self::new(strategy, total, amounts, 0.0)
    }

    pub fn amount_for(&self, category: ServiceCategory) -> Option<f64> {
        self.amounts.get(&category).copied()
    }

    /// Category amounts plus contingency
    pub fn allocated_sum(&self) -> f64 {
        self.amounts.values().sum::<f64>() + self.contingency
    }

    pub fn is_balanced(&self, tolerance: f64) -> bool {
        (self.allocated_sum() - self.total_budget).abs() <= tolerance
    }

    /// Fraction of the total budget given to `category`
    pub fn share_of(&self, category: ServiceCategory) -> f64 {
        if self.total_budget <= 0.0 {
            return 0.0;
        }
        self.amount_for(category).unwrap_or(0.0) / self.total_budget
    }
}

/// One named allocation variant with its recommendation score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationStrategy {
    pub allocation: BudgetAllocation,
    pub fitness_score: f64,
    pub rationale: String,
}

impl AllocationStrategy {
    pub fn name(&self) -> &str {
        &self.allocation.strategy
    }
}

/// Result of budget planning: the tier and the variants to choose from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub event_tier: EventTier,
    pub allocation_strategies: Vec<AllocationStrategy>,
    pub recommended_strategy: String,
}

impl AllocationPlan {
    pub fn strategy(&self, name: &str) -> Option<&AllocationStrategy> {
        self.allocation_strategies.iter().find(|s| s.name() == name)
    }

    pub fn recommended(&self) -> Option<&AllocationStrategy> {
        self.strategy(&self.recommended_strategy)
    }
}

/// Exactly one offer per included category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCombination {
    pub combination_id: String,
    pub offers: BTreeMap<ServiceCategory, VendorOffer>,

    /// Sum of effective offer costs at `guest_count`
    pub total_cost: f64,
    pub guest_count: u32,
}

impl VendorCombination {
    /// Key each offer by its own category
    pub fn new(
        combination_id: impl Into<String>,
        offers: impl IntoIterator<Item = VendorOffer>,
        guest_count: u32,
    ) -> Self {
        let offers = offers.into_iter().map(|offer| (offer.category, offer)).collect();
        Self::from_slots(combination_id, offers, guest_count)
    }

    /// Build from explicit category slots, which may disagree with the offers' own categories
    pub fn from_slots(
        combination_id: impl Into<String>,
        offers: BTreeMap<ServiceCategory, VendorOffer>,
        guest_count: u32,
    ) -> Self {
        let total_cost = offers.values().map(|offer| offer.cost_for(guest_count)).sum();
        Self {
            combination_id: combination_id.into(),
            offers,
            total_cost,
            guest_count,
        }
    }

    /// Id derived from the offer ids in category order, e.g. `v1+c3+p2+m1`
    pub fn from_offers(offers: Vec<VendorOffer>, guest_count: u32) -> Self {
        let mut offers = offers;
        offers.sort_by_key(|offer| offer.category);
        let id = offers
            .iter()
            .map(|offer| offer.id.as_str())
            .collect::<Vec<_>>()
            .join("+");
        Self::new(id, offers, guest_count)
    }

    pub fn offer(&self, category: ServiceCategory) -> Option<&VendorOffer> {
        self.offers.get(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = ServiceCategory> + '_ {
        self.offers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

/// Sub-scores contributing to the overall fitness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub budget: f64,
    pub preference: f64,
    pub compatibility: f64,
}

/// Fitness of one combination against one allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessScore {
    /// Weighted sum of the components, in [0, 1]
    pub overall: f64,
    pub components: ScoreComponents,
    pub category_budget: BTreeMap<ServiceCategory, f64>,
}

/// A combination annotated with its score; the original is left untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCombination {
    pub combination: VendorCombination,
    pub fitness: FitnessScore,
}

impl ScoredCombination {
    pub fn id(&self) -> &str {
        &self.combination.combination_id
    }

    pub fn overall(&self) -> f64 {
        self.fitness.overall
    }
}

/// Why the beam search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Best score reached the convergence threshold
    Converged,
    /// Ran the configured number of rounds
    IterationLimit,
    /// Nothing to search
    EmptyPool,
    /// Every candidate failed scoring
    NoValidCombinations,
}

/// A combination that could not be scored, with the reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedCombination {
    pub combination_id: String,
    pub reason: String,
}

/// Ranked shortlist plus metadata describing how it was found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSearchOutcome {
    pub top_combinations: Vec<ScoredCombination>,

    /// Distinct combinations that were scored successfully
    pub total_evaluated: usize,

    /// Scoring calls across every round, re-scores included
    pub score_evaluations: usize,

    /// (min, max) overall score among `top_combinations`
    pub score_range: Option<(f64, f64)>,
    pub iterations_used: u32,
    pub termination: TerminationReason,

    /// Human-readable explanation for non-standard outcomes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedCombination>,
}

impl BeamSearchOutcome {
    /// Outcome for a search that had nothing to work with
    pub fn empty(termination: TerminationReason, message: impl Into<String>) -> Self {
        Self {
            top_combinations: Vec::new(),
            total_evaluated: 0,
            score_evaluations: 0,
            score_range: None,
            iterations_used: 0,
            termination,
            message: Some(message.into()),
            rejected: Vec::new(),
        }
    }

    pub fn best(&self) -> Option<&ScoredCombination> {
        self.top_combinations.first()
    }
}
