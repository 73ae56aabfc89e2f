//! Planner-specific error types

use shared::{ServiceCategory, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Total budget must be positive, got {total_budget}")]
    InvalidBudget { total_budget: f64 },

    #[error("Invalid client requirements: {reason}")]
    InvalidRequirements { reason: String },

    #[error("Incomplete combination {combination_id}: no vendor for required category {missing}")]
    IncompleteCombination {
        combination_id: String,
        missing: ServiceCategory,
    },

    #[error("Combination {combination_id}: offer {offer_id} is a {actual}, not a {expected}")]
    CategoryMismatch {
        combination_id: String,
        offer_id: String,
        expected: ServiceCategory,
        actual: ServiceCategory,
    },

    #[error("Combination {combination_id}: category {category} was not requested")]
    UnexpectedCategory {
        combination_id: String,
        category: ServiceCategory,
    },

    #[error("Configuration error: {field}: {reason}")]
    ConfigurationError { field: String, reason: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Unknown allocation strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PlannerError::ConfigurationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        PlannerError::CatalogError { message: message.into() }
    }

    /// Errors caused by the caller's input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidBudget { .. }
                | PlannerError::InvalidRequirements { .. }
                | PlannerError::IncompleteCombination { .. }
                | PlannerError::CategoryMismatch { .. }
                | PlannerError::UnexpectedCategory { .. }
                | PlannerError::UnknownStrategy { .. }
        )
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
