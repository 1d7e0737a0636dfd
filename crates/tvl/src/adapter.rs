//! Blocksquare TVL adapter.
//!
//! Ties a [`PropertySource`] to the [`AddressBook`]: property valuations are
//! denominated in DAI, so the total is keyed by the DAI address of the
//! requested chain.

use std::sync::Arc;

use tracing::info;

use crate::aggregator::compute_tvl;
use crate::assets::AddressBook;
use crate::errors::TvlError;
use crate::models::Balances;
use crate::provider::{EnvioPropertySource, PropertySource};

/// Human readable description of how TVL is derived.
pub const METHODOLOGY: &str = "TVL is calculated by summing the DAI-denominated valuations of all active Blocksquare property tokens fetched from the Envio GraphQL API.";

/// Currency the property valuations are denominated in.
pub const REFERENCE_SYMBOL: &str = "DAI";

/// Chains this adapter reports TVL for.
pub const SUPPORTED_CHAINS: &[&str] = &["ethereum"];

/// Blocksquare TVL adapter.
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// `tvl` calls.
pub struct BlocksquareAdapter {
    source: Arc<dyn PropertySource>,
    address_book: Arc<AddressBook>,
}

impl Default for BlocksquareAdapter {
    fn default() -> Self {
        Self::new(
            Arc::new(EnvioPropertySource::new()),
            Arc::new(AddressBook::new()),
        )
    }
}

impl BlocksquareAdapter {
    pub fn new(source: Arc<dyn PropertySource>, address_book: Arc<AddressBook>) -> Self {
        Self {
            source,
            address_book,
        }
    }

    pub fn methodology(&self) -> &'static str {
        METHODOLOGY
    }

    pub fn chains(&self) -> &'static [&'static str] {
        SUPPORTED_CHAINS
    }

    /// Compute TVL on `chain`.
    ///
    /// Configuration is checked before any request is made: an unsupported
    /// chain or a missing DAI address fails without touching the network.
    pub async fn tvl(&self, chain: &str) -> Result<Balances, TvlError> {
        if !SUPPORTED_CHAINS.contains(&chain) {
            return Err(TvlError::UnsupportedChain(chain.to_string()));
        }

        let reference = self.address_book.resolve(chain, REFERENCE_SYMBOL)?;

        info!(
            "Computing {} TVL from {} ({} on {})",
            chain,
            self.source.id(),
            REFERENCE_SYMBOL,
            reference
        );

        compute_tvl(self.source.as_ref(), reference).await
    }
}
