//! Planning pipeline
//!
//! Ties the core stages together for one request: validate, load the catalog,
//! allocate the budget, source candidate combinations for every variant, pick
//! a variant and run the beam search on its pool.

use std::collections::BTreeMap;

use shared::{
    logging, plan_debug, plan_error, plan_info, plan_warn, AllocationPlan, AllocationStrategy, ClientRequirements, PlanId,
    PlanOutcome, PlanReport, PlanRequest, VendorCombination,
};

use crate::config::PlannerConfig;
use crate::core::{BeamSearchOptimizer, BudgetAllocationPlanner, CombinationBuilder, FitnessScorer, SourcingResult};
use crate::error::{PlannerError, PlannerResult};
use crate::optimization::refresher_for;
use crate::traits::CatalogSource;

/// Vendor planner with an injected catalog source
pub struct Planner<C>
where
    C: CatalogSource + Send + Sync + 'static,
{
    catalog: C,
    config: PlannerConfig,

    allocator: BudgetAllocationPlanner,
    builder: CombinationBuilder,
    search: BeamSearchOptimizer,
}

impl<C> Planner<C>
where
    C: CatalogSource + Send + Sync + 'static,
{
    /// Create a planner; the configuration is expected to be validated already
    pub fn new(catalog: C, config: PlannerConfig) -> Self {
        Self {
            allocator: BudgetAllocationPlanner::new(config.allocation.clone()),
            builder: CombinationBuilder::new(config.sourcing),
            search: BeamSearchOptimizer::new(FitnessScorer::new(config.scoring.clone()), config.search),
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan one event
    ///
    /// Problems with the request itself come back as `PlanOutcome::Rejected`;
    /// only catalog and I/O failures are returned as errors.
    pub async fn plan(&self, request: PlanRequest) -> PlannerResult<PlanOutcome> {
        let plan_id = PlanId::new();
        plan_info!(plan_id, "Planning event for {}", request.requirements.client_name);

        match self.run(plan_id, &request).await {
            Ok(report) => {
                logging::log_success(
                    &plan_id,
                    &format!(
                        "Plan complete: {} combinations shortlisted ({:?})",
                        report.search.top_combinations.len(),
                        report.search.termination
                    ),
                );
                Ok(PlanOutcome::Completed(report))
            }
            Err(err) if err.is_validation() => {
                plan_warn!(plan_id, "Request rejected: {}", err);
                Ok(PlanOutcome::Rejected {
                    plan_id,
                    reason: err.to_string(),
                })
            }
            Err(err) => {
                plan_error!(plan_id, "Planning failed: {}", err);
                Err(err)
            }
        }
    }

    async fn run(&self, plan_id: PlanId, request: &PlanRequest) -> PlannerResult<PlanReport> {
        let requirements = &request.requirements;
        validate_requirements(requirements)?;

        let offers = self.catalog.load_offers().await?;
        plan_debug!(plan_id, "Loaded {} catalog offers", offers.len());

        let allocation_plan = self.allocator.allocate(requirements.total_budget, requirements)?;
        logging::log_progress(
            &plan_id,
            "Allocation",
            &format!(
                "{} tier, heuristic pick {}",
                allocation_plan.event_tier, allocation_plan.recommended_strategy
            ),
        );

        let mut sourced: BTreeMap<String, SourcingResult> = allocation_plan
            .allocation_strategies
            .iter()
            .map(|strategy| {
                let result = self.builder.build(&offers, requirements, &strategy.allocation);
                (strategy.name().to_string(), result)
            })
            .collect();

        // Each variant is judged only on what it can actually search
        let pools: BTreeMap<String, Vec<VendorCombination>> = sourced
            .iter()
            .map(|(name, result)| (name.clone(), result.combinations.clone()))
            .collect();
        let allocation_plan = self.allocator.recommend_for_sourced(
            &allocation_plan,
            &pools,
            requirements,
            self.search.scorer(),
            self.config.search.beam_width,
        );

        let chosen = select_strategy(&allocation_plan, request.strategy.as_deref())?.clone();
        let sourcing = sourced.remove(chosen.name()).unwrap_or_default();
        if !sourcing.missing_categories.is_empty() {
            plan_warn!(
                plan_id,
                "No usable offers for {:?} under {}",
                sourcing.missing_categories,
                chosen.name()
            );
        }
        logging::log_progress(
            &plan_id,
            "Sourcing",
            &format!("{} combinations for {}", sourcing.combinations.len(), chosen.name()),
        );

        let summary = sourcing.summary();
        let (initial, mut refresher) = refresher_for(
            self.config.sourcing.refresh_mode,
            sourcing.combinations,
            self.config.sourcing.batch_size,
        );
        let search = self.search.run(&initial, requirements, &chosen.allocation, refresher.as_mut());
        plan_debug!(
            plan_id,
            "Beam search finished after {} iterations with {} distinct combinations scored",
            search.iterations_used,
            search.total_evaluated
        );

        Ok(PlanReport {
            plan_id,
            created_at: chrono::Utc::now(),
            client_name: requirements.client_name.clone(),
            event_tier: allocation_plan.event_tier,
            chosen_strategy: chosen.name().to_string(),
            allocation_plan,
            sourcing: summary,
            search,
        })
    }
}

/// Checks that do not need the catalog
pub fn validate_requirements(requirements: &ClientRequirements) -> PlannerResult<()> {
    if !requirements.total_budget.is_finite() || requirements.total_budget <= 0.0 {
        return Err(PlannerError::InvalidBudget {
            total_budget: requirements.total_budget,
        });
    }
    if requirements.required_categories.is_empty() {
        return Err(PlannerError::InvalidRequirements {
            reason: "at least one service category must be required".to_string(),
        });
    }
    Ok(())
}

fn select_strategy<'a>(plan: &'a AllocationPlan, requested: Option<&str>) -> PlannerResult<&'a AllocationStrategy> {
    let name = requested.unwrap_or(&plan.recommended_strategy);
    plan.strategy(name).ok_or_else(|| PlannerError::UnknownStrategy {
        name: name.to_string(),
    })
}
