//! Concrete pool refresh strategies
//!
//! Each strategy implements `PoolRefresher`; `refresher_for` picks one from
//! the configured refresh mode.

pub mod beam_only;
pub mod expansion;
pub mod static_pool;

pub use beam_only::BeamOnly;
pub use expansion::CatalogExpansion;
pub use static_pool::StaticPool;

use shared::VendorCombination;

use super::traits::PoolRefresher;
use crate::config::RefreshMode;

/// Split a sourced pool into the first round's candidates and a refresher
pub fn refresher_for(
    mode: RefreshMode,
    pool: Vec<VendorCombination>,
    batch_size: usize,
) -> (Vec<VendorCombination>, Box<dyn PoolRefresher>) {
    match mode {
        RefreshMode::Static => (pool.clone(), Box::new(StaticPool::new(pool))),
        RefreshMode::BeamOnly => (pool, Box::new(BeamOnly)),
        RefreshMode::Expand => {
            let (initial, expansion) = CatalogExpansion::split(pool, batch_size);
            (initial, Box::new(expansion))
        }
    }
}
