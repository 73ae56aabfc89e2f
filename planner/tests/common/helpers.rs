//! Test helpers and builder patterns for planner tests
//!
//! Helper functions and a builder that wire a `Planner` to a mocked catalog
//! with sensible defaults.

use planner::config::{PlannerConfig, RefreshMode};
use planner::traits::MockCatalogSource;
use planner::{Planner, PlannerError};
use shared::{PlanOutcome, PlanReport, ScoredCombination, VendorOffer};

use super::fixtures::TestFixtures;

/// Builder for test planners backed by a `MockCatalogSource`
pub struct PlannerBuilder {
    offers: Vec<VendorOffer>,
    config: PlannerConfig,
    catalog_error: Option<String>,
    expected_loads: Option<usize>,
}

impl PlannerBuilder {
    /// Fixture catalog with the default configuration
    pub fn new() -> Self {
        Self {
            offers: TestFixtures::catalog(),
            config: PlannerConfig::default(),
            catalog_error: None,
            expected_loads: None,
        }
    }

    pub fn with_offers(mut self, offers: Vec<VendorOffer>) -> Self {
        self.offers = offers;
        self
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.config.search.beam_width = beam_width;
        self
    }

    pub fn with_refresh_mode(mut self, mode: RefreshMode, batch_size: usize) -> Self {
        self.config.sourcing.refresh_mode = mode;
        self.config.sourcing.batch_size = batch_size;
        self
    }

    /// Make the catalog fail to load
    pub fn with_catalog_error(mut self, message: &str) -> Self {
        self.catalog_error = Some(message.to_string());
        self
    }

    /// Require the catalog to be loaded exactly `times` times
    pub fn expect_catalog_loads(mut self, times: usize) -> Self {
        self.expected_loads = Some(times);
        self
    }

    pub fn build(self) -> Planner<MockCatalogSource> {
        let mut catalog = MockCatalogSource::new();
        let expectation = catalog.expect_load_offers();
        match self.expected_loads {
            Some(times) => expectation.times(times),
            None => expectation.times(0..),
        };

        match self.catalog_error {
            Some(message) => {
                expectation.returning(move || Err(PlannerError::catalog(message.clone())));
            }
            None => {
                let offers = self.offers;
                expectation.returning(move || Ok(offers.clone()));
            }
        }

        Planner::new(catalog, self.config)
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Common assertions and shortcuts
pub struct TestHelpers;

impl TestHelpers {
    /// Unwrap a completed outcome, failing the test on a rejection
    pub fn completed(outcome: &PlanOutcome) -> &PlanReport {
        match outcome {
            PlanOutcome::Completed(report) => report,
            PlanOutcome::Rejected { reason, .. } => panic!("expected a completed plan, got rejection: {reason}"),
        }
    }

    /// Reason of a rejected outcome, failing the test on completion
    pub fn rejection_reason(outcome: &PlanOutcome) -> &str {
        match outcome {
            PlanOutcome::Rejected { reason, .. } => reason,
            PlanOutcome::Completed(_) => panic!("expected a rejected plan"),
        }
    }

    pub fn ids(combinations: &[ScoredCombination]) -> Vec<&str> {
        combinations.iter().map(ScoredCombination::id).collect()
    }

    /// Scores are non-increasing and ties are ordered by id
    pub fn assert_ranked(combinations: &[ScoredCombination]) {
        for pair in combinations.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            assert!(
                first.overall() > second.overall()
                    || (first.overall() == second.overall() && first.id() < second.id()),
                "{} ({}) ranked above {} ({})",
                first.id(),
                first.overall(),
                second.id(),
                second.overall()
            );
        }
    }
}
