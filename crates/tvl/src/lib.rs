//! Blocksquare TVL Crate
//!
//! This crate computes the Total Value Locked of Blocksquare tokenized
//! real-estate properties.
//!
//! # Overview
//!
//! - Property tokens are listed by the Envio HyperIndex GraphQL endpoint
//! - Each token carries a `propertyValuation` in DAI minor units
//! - TVL is the exact sum of those valuations, keyed by the DAI address
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |    Adapter       |  (chain -> reference asset)
//! +------------------+
//!          |                      +------------------+
//!          |--------------------> |   AddressBook    |  (chain, symbol) -> address
//!          v                      +------------------+
//! +------------------+
//! |  PropertySource  |  (one GraphQL POST)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   Aggregator     |  (BigUint sum, strict parsing)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Balances      |  { address: "amount" }
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PropertyRecord`] - A property token as returned by the indexer
//! - [`Balances`] - Result mapping from asset address to amount
//! - [`AddressBook`] - Read-only chain/symbol to address table
//! - [`PropertySource`] - Anything that can list active properties
//! - [`BlocksquareAdapter`] - Per-chain TVL entry point

pub mod adapter;
pub mod aggregator;
pub mod assets;
pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{Address, AssetSymbol, Balances, Chain, PropertyRecord};

// Re-export entry points
pub use adapter::{BlocksquareAdapter, METHODOLOGY, REFERENCE_SYMBOL, SUPPORTED_CHAINS};
pub use aggregator::{compute_tvl, parse_valuation, record_valuation, sum_valuations};
pub use assets::AddressBook;
pub use errors::{ErrorKind, TvlError};
pub use provider::{EnvioPropertySource, PropertySource};
