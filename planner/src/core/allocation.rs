//! Budget allocation planning
//!
//! Turns a total budget and the client's requirements into three named
//! allocation variants. The variant scores only drive the recommendation;
//! every variant is a valid plan.

use shared::{
    normalize_label, AllocationPlan, AllocationStrategy, BudgetAllocation, ClientRequirements,
    EventTier, ServiceCategory, VendorCombination,
};
use std::collections::BTreeMap;

use super::fitness::FitnessScorer;
use crate::config::AllocationConfig;
use crate::error::{PlannerError, PlannerResult};

pub const BALANCED: &str = "balanced";
pub const VENUE_FOCUSED: &str = "venue_focused";
pub const EXPERIENCE_FOCUSED: &str = "experience_focused";

/// Guards against `floor` dropping a whole unit on values like 437499.99999999994
const ROUNDING_EPSILON: f64 = 1e-6;

/// Budget fractions per required category plus the misc bucket
#[derive(Debug, Clone, PartialEq)]
struct Shares {
    categories: BTreeMap<ServiceCategory, f64>,
    misc: f64,
}

impl Shares {
    fn total(&self) -> f64 {
        self.categories.values().sum::<f64>() + self.misc
    }

    fn normalized(mut self) -> Self {
        let total = self.total();
        if total > 0.0 {
            for share in self.categories.values_mut() {
                *share /= total;
            }
            self.misc /= total;
        }
        self
    }

    fn boosted(mut self, categories: &[ServiceCategory], factor: f64) -> Self {
        for category in categories {
            if let Some(share) = self.categories.get_mut(category) {
                *share *= factor;
            }
        }
        self.normalized()
    }

    /// Half the L1 distance between two share vectors, in [0, 1]
    fn distance(&self, other: &Shares) -> f64 {
        let category_gap: f64 = self
            .categories
            .iter()
            .map(|(category, share)| (share - other.categories.get(category).copied().unwrap_or(0.0)).abs())
            .sum();
        (category_gap + (self.misc - other.misc).abs()) / 2.0
    }
}

/// Derives allocation variants from a total budget
#[derive(Debug, Clone, Default)]
pub struct BudgetAllocationPlanner {
    config: AllocationConfig,
}

impl BudgetAllocationPlanner {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// Build the three allocation variants and recommend one
    pub fn allocate(&self, total_budget: f64, requirements: &ClientRequirements) -> PlannerResult<AllocationPlan> {
        if !total_budget.is_finite() || total_budget <= 0.0 {
            return Err(PlannerError::InvalidBudget { total_budget });
        }
        if requirements.required_categories.is_empty() {
            return Err(PlannerError::InvalidRequirements {
                reason: "at least one service category must be required".to_string(),
            });
        }

        let tier = self.classify(total_budget, requirements);
        let base = self.base_shares(tier, requirements);
        let target = base.clone().boosted(&requirements.priorities, self.config.priority_multiplier);

        let variants = [
            (BALANCED, base.clone(), format!("Standard {tier} split")),
            (
                VENUE_FOCUSED,
                base.clone().boosted(&[ServiceCategory::Venue], self.config.venue_focus_multiplier),
                "Larger venue share for a standout location".to_string(),
            ),
            (
                EXPERIENCE_FOCUSED,
                base.boosted(
                    &[ServiceCategory::Photographer, ServiceCategory::MakeupArtist],
                    self.config.experience_focus_multiplier,
                ),
                "Larger photography and makeup shares for the guest experience".to_string(),
            ),
        ];

        let allocation_strategies: Vec<AllocationStrategy> = variants
            .into_iter()
            .map(|(name, shares, rationale)| AllocationStrategy {
                fitness_score: (1.0 - shares.distance(&target)).clamp(0.0, 1.0),
                allocation: self.materialize(name, total_budget, &shares),
                rationale,
            })
            .collect();

        let recommended_strategy = best_strategy_name(&allocation_strategies);

        tracing::debug!(
            tier = %tier,
            recommended = %recommended_strategy,
            "Allocated budget of {total_budget}"
        );

        Ok(AllocationPlan {
            event_tier: tier,
            allocation_strategies,
            recommended_strategy,
        })
    }

    /// Re-score the variants with the real budget sub-metric over a candidate pool
    ///
    /// Each variant scores the mean budget fitness of its `top_n` best
    /// combinations. With an empty pool the plan is returned unchanged.
    pub fn recommend_for_pool(
        &self,
        plan: &AllocationPlan,
        pool: &[VendorCombination],
        requirements: &ClientRequirements,
        scorer: &FitnessScorer,
        top_n: usize,
    ) -> AllocationPlan {
        if pool.is_empty() || top_n == 0 {
            return plan.clone();
        }

        rescored(plan, |strategy| {
            top_budget_mean(scorer, &strategy.allocation, pool, requirements, top_n).unwrap_or(0.0)
        })
    }

    /// Re-score each variant over the combinations sourced for that variant alone
    ///
    /// A variant whose own pool is empty cannot be searched and scores 0.0.
    /// When no variant has any combination the plan is returned unchanged.
    pub fn recommend_for_sourced(
        &self,
        plan: &AllocationPlan,
        pools: &BTreeMap<String, Vec<VendorCombination>>,
        requirements: &ClientRequirements,
        scorer: &FitnessScorer,
        top_n: usize,
    ) -> AllocationPlan {
        if top_n == 0 || pools.values().all(Vec::is_empty) {
            return plan.clone();
        }

        rescored(plan, |strategy| {
            pools
                .get(strategy.name())
                .and_then(|pool| top_budget_mean(scorer, &strategy.allocation, pool, requirements, top_n))
                .unwrap_or(0.0)
        })
    }

    /// Classify the event into a tier; luxury signals win over intimate ones
    pub fn classify(&self, total_budget: f64, requirements: &ClientRequirements) -> EventTier {
        let thresholds = &self.config.tiers;
        let vision = padded_words(&requirements.vision);
        let mentions = |keywords: &[String]| {
            keywords.iter().any(|keyword| {
                let keyword = padded_words(keyword);
                !keyword.trim().is_empty() && vision.contains(&keyword)
            })
        };

        if requirements.guest_count > thresholds.luxury_min_guests
            || total_budget >= thresholds.luxury_min_budget
            || mentions(&thresholds.luxury_keywords)
        {
            EventTier::Luxury
        } else if requirements.guest_count <= thresholds.intimate_max_guests
            && (total_budget <= thresholds.intimate_max_budget || mentions(&thresholds.intimate_keywords))
        {
            EventTier::Intimate
        } else {
            EventTier::Standard
        }
    }

    fn base_shares(&self, tier: EventTier, requirements: &ClientRequirements) -> Shares {
        let template = self.config.templates.for_tier(tier);
        Shares {
            categories: requirements
                .required_sorted()
                .into_iter()
                .map(|category| (category, template.share(category)))
                .collect(),
            misc: template.misc,
        }
        .normalized()
    }

    /// Round category amounts down to the currency unit; the remainder becomes contingency
    fn materialize(&self, name: &str, total_budget: f64, shares: &Shares) -> BudgetAllocation {
        let unit = self.config.rounding_unit;
        let amounts: BTreeMap<ServiceCategory, f64> = shares
            .categories
            .iter()
            .map(|(category, share)| {
                let amount = ((share * total_budget / unit) + ROUNDING_EPSILON).floor() * unit;
                (*category, amount)
            })
            .collect();
        let contingency = total_budget - amounts.values().sum::<f64>();

        BudgetAllocation::new(name, total_budget, amounts, contingency)
    }
}

/// Copy of `plan` with every variant re-scored and the recommendation recomputed
fn rescored(plan: &AllocationPlan, score: impl Fn(&AllocationStrategy) -> f64) -> AllocationPlan {
    let allocation_strategies: Vec<AllocationStrategy> = plan
        .allocation_strategies
        .iter()
        .map(|strategy| AllocationStrategy {
            fitness_score: score(strategy),
            ..strategy.clone()
        })
        .collect();

    AllocationPlan {
        event_tier: plan.event_tier,
        recommended_strategy: best_strategy_name(&allocation_strategies),
        allocation_strategies,
    }
}

/// Mean budget fitness of the `top_n` best combinations; `None` for an empty pool
fn top_budget_mean(
    scorer: &FitnessScorer,
    allocation: &BudgetAllocation,
    pool: &[VendorCombination],
    requirements: &ClientRequirements,
    top_n: usize,
) -> Option<f64> {
    let mut budget_scores: Vec<f64> = pool
        .iter()
        .map(|combination| scorer.budget_fitness(combination, requirements, allocation).0)
        .collect();
    budget_scores.sort_by(|a, b| b.total_cmp(a));
    budget_scores.truncate(top_n);
    if budget_scores.is_empty() {
        return None;
    }
    Some(budget_scores.iter().sum::<f64>() / budget_scores.len() as f64)
}

/// Highest fitness wins; earlier variants win ties
fn best_strategy_name(strategies: &[AllocationStrategy]) -> String {
    strategies
        .iter()
        .fold(None::<&AllocationStrategy>, |best, candidate| match best {
            Some(current) if current.fitness_score >= candidate.fitness_score => Some(current),
            _ => Some(candidate),
        })
        .map(|strategy| strategy.name().to_string())
        .unwrap_or_else(|| BALANCED.to_string())
}

/// Lowercase words separated and surrounded by single spaces, for whole-word matching
fn padded_words(text: &str) -> String {
    let words: Vec<String> = normalize_label(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();
    format!(" {} ", words.join(" "))
}
