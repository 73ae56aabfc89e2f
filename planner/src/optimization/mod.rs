//! Pool refresh between beam search rounds
//!
//! The beam search asks a `PoolRefresher` for fresh candidates after every
//! round that neither converged nor hit the iteration cap. This module keeps
//! the trait, the search state it sees and the concrete strategies apart.

pub mod strategies;
pub mod traits;
pub mod types;

pub use strategies::{refresher_for, BeamOnly, CatalogExpansion, StaticPool};
pub use traits::{MockPoolRefresher, PoolRefresher};
pub use types::*;
