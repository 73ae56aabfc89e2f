//! Integration tests for the planning pipeline
//!
//! Drive `Planner::plan` end to end with a mocked catalog, and once through
//! the real JSON catalog and report writer on a temporary directory.

use planner::config::RefreshMode;
use planner::services::{JsonCatalog, JsonReportWriter};
use planner::{Planner, PlannerConfig, PlannerError, ReportSink};
use shared::{PlanOutcome, ServiceCategory, TerminationReason};
use tempfile::TempDir;

mod common;
use common::{PlannerBuilder, TestFixtures, TestHelpers};

#[tokio::test]
async fn test_plan_completes_with_best_combination_first() {
    let planner = PlannerBuilder::new().expect_catalog_loads(1).build();

    let outcome = tokio_test::assert_ok!(planner.plan(TestFixtures::request()).await);
    let report = TestHelpers::completed(&outcome);

    assert_eq!(report.client_name, TestFixtures::CLIENT);
    assert_eq!(report.plan_id, outcome.plan_id());
    assert_eq!(report.allocation_plan.allocation_strategies.len(), 3);
    assert_eq!(report.chosen_strategy, report.allocation_plan.recommended_strategy);
    assert_eq!(report.sourcing.considered_offers, 11);
    assert_eq!(report.sourcing.filtered_offers, 2);
    assert_eq!(report.sourcing.combinations_sourced, 24);

    let search = &report.search;
    assert!(matches!(
        search.termination,
        TerminationReason::Converged | TerminationReason::IterationLimit
    ));
    assert_eq!(search.best().unwrap().id(), TestFixtures::BEST_COMBINATION);
    assert_eq!(search.top_combinations.len(), 3usize.min(search.total_evaluated));
    TestHelpers::assert_ranked(&search.top_combinations);
}

#[tokio::test]
async fn test_requested_strategy_is_used() {
    let planner = PlannerBuilder::new().build();
    let request = TestFixtures::request().with_strategy("venue_focused");

    let outcome = tokio_test::assert_ok!(planner.plan(request).await);
    let report = TestHelpers::completed(&outcome);

    assert_eq!(report.chosen_strategy, "venue_focused");
}

#[tokio::test]
async fn test_recommendation_avoids_variants_with_empty_pools() {
    let planner = PlannerBuilder::new().with_offers(TestFixtures::tight_catalog()).build();

    let outcome = tokio_test::assert_ok!(planner.plan(TestFixtures::tight_request()).await);
    let report = TestHelpers::completed(&outcome);

    assert_eq!(report.chosen_strategy, "balanced");
    assert!(report.sourcing.missing_categories.is_empty());
    assert_ne!(report.search.termination, TerminationReason::EmptyPool);
    assert_eq!(TestHelpers::ids(&report.search.top_combinations), vec!["v1+c1+p1+m1"]);
    for name in ["venue_focused", "experience_focused"] {
        assert_eq!(report.allocation_plan.strategy(name).unwrap().fitness_score, 0.0);
    }
}

#[tokio::test]
async fn test_requested_strategy_is_kept_even_without_combinations() {
    let planner = PlannerBuilder::new().with_offers(TestFixtures::tight_catalog()).build();
    let request = TestFixtures::tight_request().with_strategy("experience_focused");

    let outcome = tokio_test::assert_ok!(planner.plan(request).await);
    let report = TestHelpers::completed(&outcome);

    assert_eq!(report.chosen_strategy, "experience_focused");
    assert_eq!(report.sourcing.missing_categories, vec![ServiceCategory::Venue]);
    assert_eq!(report.search.termination, TerminationReason::EmptyPool);
}

#[tokio::test]
async fn test_unknown_strategy_is_rejected() {
    let planner = PlannerBuilder::new().build();
    let request = TestFixtures::request().with_strategy("lavish");

    let outcome = tokio_test::assert_ok!(planner.plan(request).await);

    assert!(outcome.is_rejected());
    assert!(TestHelpers::rejection_reason(&outcome).contains("lavish"));
}

#[tokio::test]
async fn test_non_positive_budget_is_rejected_without_loading_catalog() {
    let planner = PlannerBuilder::new().expect_catalog_loads(0).build();
    let mut request = TestFixtures::request();
    request.requirements.total_budget = 0.0;

    let outcome = tokio_test::assert_ok!(planner.plan(request).await);

    assert!(TestHelpers::rejection_reason(&outcome).contains("budget"));
}

#[tokio::test]
async fn test_no_required_categories_is_rejected() {
    let planner = PlannerBuilder::new().expect_catalog_loads(0).build();
    let mut request = TestFixtures::request();
    request.requirements.required_categories.clear();

    let outcome = tokio_test::assert_ok!(planner.plan(request).await);

    assert!(TestHelpers::rejection_reason(&outcome).contains("at least one service category"));
}

#[tokio::test]
async fn test_catalog_failure_is_an_error() {
    let planner = PlannerBuilder::new().with_catalog_error("disk on fire").build();

    let result = planner.plan(TestFixtures::request()).await;

    match result {
        Err(PlannerError::CatalogError { message }) => assert_eq!(message, "disk on fire"),
        other => panic!("expected catalog error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_category_yields_empty_search() {
    let planner = PlannerBuilder::new()
        .with_offers(TestFixtures::catalog_without_makeup())
        .build();

    let outcome = tokio_test::assert_ok!(planner.plan(TestFixtures::request()).await);
    let report = TestHelpers::completed(&outcome);

    assert_eq!(report.sourcing.missing_categories, vec![ServiceCategory::MakeupArtist]);
    assert_eq!(report.search.termination, TerminationReason::EmptyPool);
    assert_eq!(report.search.total_evaluated, 0);
    assert!(report.search.top_combinations.is_empty());
}

#[tokio::test]
async fn test_optional_category_can_be_left_out() {
    let planner = PlannerBuilder::new()
        .with_offers(TestFixtures::catalog_without_makeup())
        .build();
    let mut request = TestFixtures::request();
    request.requirements = request.requirements.with_required_categories(&[
        ServiceCategory::Venue,
        ServiceCategory::Caterer,
        ServiceCategory::Photographer,
    ]);

    let outcome = tokio_test::assert_ok!(planner.plan(request).await);
    let report = TestHelpers::completed(&outcome);

    assert_eq!(report.search.best().unwrap().id(), "v1+c1+p1");
    for strategy in &report.allocation_plan.allocation_strategies {
        assert_eq!(strategy.allocation.amount_for(ServiceCategory::MakeupArtist), None);
    }
}

#[tokio::test]
async fn test_expansion_mode_feeds_batches() {
    let planner = PlannerBuilder::new()
        .with_refresh_mode(RefreshMode::Expand, 4)
        .with_beam_width(2)
        .build();
    let mut config_check = PlannerConfig::default();
    config_check.search.beam_width = 2;
    assert_eq!(planner.config().search, config_check.search);

    let outcome = tokio_test::assert_ok!(planner.plan(TestFixtures::request()).await);
    let search = &TestHelpers::completed(&outcome).search;

    // First round sees 4 of the 24, each later round adds up to 4 more
    assert!(search.total_evaluated >= 4);
    assert!(search.total_evaluated <= 4 * search.iterations_used as usize);
    assert_eq!(search.top_combinations.len(), 2);
    TestHelpers::assert_ranked(&search.top_combinations);
}

#[tokio::test]
async fn test_repeated_plans_rank_identically() {
    let planner = PlannerBuilder::new().build();

    let first = tokio_test::assert_ok!(planner.plan(TestFixtures::request()).await);
    let second = tokio_test::assert_ok!(planner.plan(TestFixtures::request()).await);

    let first = TestHelpers::completed(&first);
    let second = TestHelpers::completed(&second);
    assert_ne!(first.plan_id, second.plan_id);
    assert_eq!(first.search, second.search);
    assert_eq!(first.allocation_plan, second.allocation_plan);
}

#[tokio::test]
async fn test_json_catalog_to_json_report() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let report_path = dir.path().join("out").join("report.json");
    let catalog_json = serde_json::to_string_pretty(&TestFixtures::catalog()).unwrap();
    tokio::fs::write(&catalog_path, catalog_json).await.unwrap();

    let planner = Planner::new(JsonCatalog::new(&catalog_path), PlannerConfig::default());
    let outcome = tokio_test::assert_ok!(planner.plan(TestFixtures::request()).await);
    tokio_test::assert_ok!(JsonReportWriter::to_file(&report_path).write_report(&outcome).await);

    let written = tokio::fs::read_to_string(&report_path).await.unwrap();
    let parsed: PlanOutcome = serde_json::from_str(&written).unwrap();
    let report = TestHelpers::completed(&parsed);

    assert_eq!(parsed.plan_id(), outcome.plan_id());
    assert_eq!(report.search.best().unwrap().id(), TestFixtures::BEST_COMBINATION);
    assert!(written.contains("\"status\": \"completed\""));
}
