//! Property source abstractions and implementations.
//!
//! This module contains:
//! - The `PropertySource` trait the aggregator consumes
//! - The Envio HyperIndex GraphQL implementation
//!
//! The aggregator only depends on the trait, so tests and other harnesses
//! can substitute a fixture source without touching the network.

mod traits;

pub mod envio;

// Re-exports
pub use envio::EnvioPropertySource;
pub use traits::PropertySource;
