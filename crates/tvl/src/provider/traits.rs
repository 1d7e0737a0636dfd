//! Property source trait definitions.
//!
//! This module defines the `PropertySource` trait implemented by anything
//! that can list the active Blocksquare property tokens.

use async_trait::async_trait;

use crate::errors::TvlError;
use crate::models::PropertyRecord;

/// Trait for property data sources.
///
/// A source performs exactly one fetch per call and either returns the full
/// record list or fails; it never returns a partial list.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use blocksquare_tvl::provider::PropertySource;
///
/// struct FixtureSource(Vec<PropertyRecord>);
///
/// #[async_trait]
/// impl PropertySource for FixtureSource {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn fetch_active_properties(&self) -> Result<Vec<PropertyRecord>, TvlError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Unique identifier for this source.
    ///
    /// Should be a constant string like "ENVIO". Used in errors and logs.
    fn id(&self) -> &'static str;

    /// Fetch every property token with a valuation above zero.
    ///
    /// # Returns
    ///
    /// Records in the order the source returned them, or a `TvlError` of
    /// kind `Transport` or `ResponseFormat`.
    async fn fetch_active_properties(&self) -> Result<Vec<PropertyRecord>, TvlError>;
}
