//! Vendor catalog sources
//!
//! `JsonCatalog` reads a JSON array of offers from disk; `InMemoryCatalog`
//! serves a fixed list and is handy for embedding and tests.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::VendorOffer;

use crate::error::{PlannerError, PlannerResult};
use crate::traits::CatalogSource;

/// Catalog stored as a JSON array of `VendorOffer` records
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn load_offers(&self) -> PlannerResult<Vec<VendorOffer>> {
        let contents = fs::read_to_string(&self.path).await.map_err(|e| {
            PlannerError::catalog(format!("cannot read {}: {e}", self.path.display()))
        })?;

        let offers: Vec<VendorOffer> = serde_json::from_str(&contents).map_err(|e| {
            PlannerError::catalog(format!("cannot decode {}: {e}", self.path.display()))
        })?;

        tracing::debug!(offers = offers.len(), path = %self.path.display(), "Loaded vendor catalog");
        Ok(offers)
    }
}

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    offers: Vec<VendorOffer>,
}

impl InMemoryCatalog {
    pub fn new(offers: Vec<VendorOffer>) -> Self {
        Self { offers }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load_offers(&self) -> PlannerResult<Vec<VendorOffer>> {
        Ok(self.offers.clone())
    }
}
