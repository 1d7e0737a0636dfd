//! TVL models
//!
//! This module contains the core data types:
//! - `types` - Type aliases for common identifiers (Chain, AssetSymbol, Address)
//! - `property` - Property token records as returned by the indexer (PropertyRecord)
//! - `balances` - Aggregated result keyed by asset address (Balances)

mod balances;
mod property;
mod types;

pub use balances::Balances;
pub use property::PropertyRecord;
pub use types::{Address, AssetSymbol, Chain};
