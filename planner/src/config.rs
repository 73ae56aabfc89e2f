//! Planner configuration
//!
//! Every weight, threshold and template the planner uses lives here so it can
//! be tuned from a JSON file without touching the scoring logic. Every section
//! falls back to its defaults when omitted.

use serde::{Deserialize, Serialize};
use shared::{EventTier, ServiceCategory};
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};

/// Tolerance used when checking that weights and shares add up to 1.0
const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub scoring: ScoringConfig,
    pub allocation: AllocationConfig,
    pub search: SearchConfig,
    pub sourcing: SourcingConfig,
}

/// Weights of the three fitness components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    pub budget: f64,
    pub preference: f64,
    pub compatibility: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            budget: 0.4,
            preference: 0.35,
            compatibility: 0.25,
        }
    }
}

/// Points awarded by the preference sub-score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceWeights {
    pub venue_type: f64,
    pub cuisine: f64,
    pub location: f64,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            venue_type: 0.4,
            cuisine: 0.3,
            location: 0.3,
        }
    }
}

/// Shape of the per-category budget score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetCurve {
    /// Score lost when spending the full allocation; the at-budget score is `1 - penalty`
    pub under_budget_penalty: f64,

    /// How fast the score falls per unit of overage ratio
    pub overage_decay: f64,
}

impl Default for BudgetCurve {
    fn default() -> Self {
        Self {
            under_budget_penalty: 0.3,
            overage_decay: 1.0,
        }
    }
}

impl BudgetCurve {
    pub fn at_budget_score(&self) -> f64 {
        1.0 - self.under_budget_penalty
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: FitnessWeights,
    pub preference: PreferenceWeights,
    pub budget: BudgetCurve,
}

/// Thresholds used to classify an event into a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub intimate_max_guests: u32,
    pub intimate_max_budget: f64,
    pub luxury_min_guests: u32,
    pub luxury_min_budget: f64,
    pub luxury_keywords: Vec<String>,
    pub intimate_keywords: Vec<String>,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            intimate_max_guests: 100,
            intimate_max_budget: 500_000.0,
            luxury_min_guests: 500,
            luxury_min_budget: 5_000_000.0,
            luxury_keywords: ["grand", "luxury", "lavish", "royal", "opulent", "extravagant"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            intimate_keywords: ["intimate", "simple", "small", "cozy", "minimal", "close family"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Fraction of the budget given to each bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareTemplate {
    pub venue: f64,
    pub catering: f64,
    pub photography: f64,
    pub makeup: f64,
    pub misc: f64,
}

impl ShareTemplate {
    pub const fn new(venue: f64, catering: f64, photography: f64, makeup: f64, misc: f64) -> Self {
        Self {
            venue,
            catering,
            photography,
            makeup,
            misc,
        }
    }

    pub fn share(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Venue => self.venue,
            ServiceCategory::Caterer => self.catering,
            ServiceCategory::Photographer => self.photography,
            ServiceCategory::MakeupArtist => self.makeup,
        }
    }

    pub fn total(&self) -> f64 {
        self.venue + self.catering + self.photography + self.makeup + self.misc
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierTemplates {
    pub intimate: ShareTemplate,
    pub standard: ShareTemplate,
    pub luxury: ShareTemplate,
}

impl Default for TierTemplates {
    fn default() -> Self {
        Self {
            intimate: ShareTemplate::new(0.30, 0.45, 0.12, 0.06, 0.07),
            standard: ShareTemplate::new(0.35, 0.40, 0.12, 0.08, 0.05),
            luxury: ShareTemplate::new(0.40, 0.35, 0.12, 0.08, 0.05),
        }
    }
}

impl TierTemplates {
    pub fn for_tier(&self, tier: EventTier) -> &ShareTemplate {
        match tier {
            EventTier::Intimate => &self.intimate,
            EventTier::Standard => &self.standard,
            EventTier::Luxury => &self.luxury,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    pub tiers: TierThresholds,
    pub templates: TierTemplates,

    /// Venue share multiplier for the venue-focused variant
    pub venue_focus_multiplier: f64,

    /// Photography and makeup share multiplier for the experience-focused variant
    pub experience_focus_multiplier: f64,

    /// Boost applied to client priority categories when scoring variants
    pub priority_multiplier: f64,

    /// Allocations are rounded to multiples of this amount
    pub rounding_unit: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            tiers: TierThresholds::default(),
            templates: TierTemplates::default(),
            venue_focus_multiplier: 1.25,
            experience_focus_multiplier: 1.3,
            priority_multiplier: 1.3,
            rounding_unit: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub beam_width: usize,
    pub max_iterations: u32,
    pub convergence_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: 3,
            max_iterations: 5,
            convergence_threshold: 0.9,
        }
    }
}

/// Where the next round's candidates come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMode {
    /// Re-score the same pool every round
    #[default]
    Static,
    /// Only the current beam is carried into the next round
    BeamOnly,
    /// Feed further batches of sourced combinations each round
    Expand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcingConfig {
    /// Offers costing more than `allocation * (1 + tolerance)` are dropped
    pub overspend_tolerance: f64,
    pub max_offers_per_category: usize,
    pub max_combinations: usize,

    /// Combinations handed to the search per round in expand mode
    pub batch_size: usize,
    pub refresh_mode: RefreshMode,
    pub restrict_to_location: bool,
}

impl Default for SourcingConfig {
    fn default() -> Self {
        Self {
            overspend_tolerance: 0.25,
            max_offers_per_category: 6,
            max_combinations: 1000,
            batch_size: 50,
            refresh_mode: RefreshMode::Static,
            restrict_to_location: false,
        }
    }
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub async fn load(path: &Path) -> PlannerResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    /// Reject configurations the algorithms cannot work with
    pub fn validate(&self) -> PlannerResult<()> {
        let weights = &self.scoring.weights;
        check_weights(
            "scoring.weights",
            &[weights.budget, weights.preference, weights.compatibility],
        )?;

        let preference = &self.scoring.preference;
        check_weights(
            "scoring.preference",
            &[preference.venue_type, preference.cuisine, preference.location],
        )?;

        let penalty = self.scoring.budget.under_budget_penalty;
        if !(0.0..=1.0).contains(&penalty) {
            return Err(PlannerError::config(
                "scoring.budget.under_budget_penalty",
                format!("must be within [0, 1], got {penalty}"),
            ));
        }
        if self.scoring.budget.overage_decay <= 0.0 {
            return Err(PlannerError::config(
                "scoring.budget.overage_decay",
                "must be positive",
            ));
        }

        let templates = &self.allocation.templates;
        for (name, template) in [
            ("intimate", &templates.intimate),
            ("standard", &templates.standard),
            ("luxury", &templates.luxury),
        ] {
            let field = format!("allocation.templates.{name}");
            check_weights(
                &field,
                &[
                    template.venue,
                    template.catering,
                    template.photography,
                    template.makeup,
                    template.misc,
                ],
            )?;
        }

        for (field, value) in [
            ("allocation.venue_focus_multiplier", self.allocation.venue_focus_multiplier),
            ("allocation.experience_focus_multiplier", self.allocation.experience_focus_multiplier),
            ("allocation.priority_multiplier", self.allocation.priority_multiplier),
            ("allocation.rounding_unit", self.allocation.rounding_unit),
        ] {
            if value <= 0.0 {
                return Err(PlannerError::config(field, format!("must be positive, got {value}")));
            }
        }

        if self.search.beam_width == 0 {
            return Err(PlannerError::config("search.beam_width", "must be at least 1"));
        }
        if self.search.max_iterations == 0 {
            return Err(PlannerError::config("search.max_iterations", "must be at least 1"));
        }
        let threshold = self.search.convergence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PlannerError::config(
                "search.convergence_threshold",
                format!("must be within [0, 1], got {threshold}"),
            ));
        }

        if self.sourcing.overspend_tolerance < 0.0 {
            return Err(PlannerError::config("sourcing.overspend_tolerance", "must not be negative"));
        }
        if self.sourcing.max_offers_per_category == 0 || self.sourcing.max_combinations == 0 {
            return Err(PlannerError::config(
                "sourcing",
                "per-category and combination caps must be at least 1",
            ));
        }
        if self.sourcing.batch_size == 0 {
            return Err(PlannerError::config("sourcing.batch_size", "must be at least 1"));
        }

        Ok(())
    }
}

/// Weights must be non-negative and add up to 1.0
fn check_weights(field: &str, weights: &[f64]) -> PlannerResult<()> {
    if let Some(negative) = weights.iter().find(|w| **w < 0.0 || !w.is_finite()) {
        return Err(PlannerError::config(field, format!("weight {negative} is not a non-negative number")));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(PlannerError::config(field, format!("weights must sum to 1.0, got {sum}")));
    }
    Ok(())
}
