//! Chain/symbol to canonical token address mappings.
//!
//! This module provides the static address data used by the adapter to key
//! its balances by the reference currency's on-chain address.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::errors::TvlError;
use crate::models::{Address, AssetSymbol, Chain};

/// Canonical token address database.
///
/// Maps chain identifiers to asset symbols to checksummed contract
/// addresses. Read-only once built; share it behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AddressBook {
    chains: HashMap<Chain, HashMap<AssetSymbol, Address>>,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    /// Create a new AddressBook with the bundled core assets.
    pub fn new() -> Self {
        let mut book = Self::empty();
        book.load_defaults();
        book
    }

    /// Create an AddressBook with no entries.
    pub fn empty() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }

    /// Load the bundled reference asset addresses.
    fn load_defaults(&mut self) {
        self.add(
            "ethereum",
            &[("DAI", "0x6B175474E89094C44Da98b954EedeAC495271d0F")],
        );
    }

    /// Add static entries for a chain.
    fn add(&mut self, chain: &'static str, entries: &[(&'static str, &'static str)]) {
        let symbols = self.chains.entry(Cow::Borrowed(chain)).or_default();
        for (symbol, address) in entries {
            symbols.insert(Cow::Borrowed(*symbol), Cow::Borrowed(*address));
        }
    }

    /// Insert or replace a single entry.
    pub fn insert(
        &mut self,
        chain: impl Into<Chain>,
        symbol: impl Into<AssetSymbol>,
        address: impl Into<Address>,
    ) {
        self.chains
            .entry(chain.into())
            .or_default()
            .insert(symbol.into(), address.into());
    }

    /// Build an AddressBook from a `coreAssets.json` style document:
    /// `{ "<chain>": { "<SYMBOL>": "<address>", ... }, ... }`.
    ///
    /// Top-level entries that are not objects and symbol entries that are
    /// not strings are skipped.
    pub fn from_json_str(json: &str) -> Result<Self, TvlError> {
        let root: Value =
            serde_json::from_str(json).map_err(|e| TvlError::AddressBookFormat(e.to_string()))?;

        let chains = root.as_object().ok_or_else(|| {
            TvlError::AddressBookFormat("expected a JSON object keyed by chain".to_string())
        })?;

        let mut book = Self::empty();
        for (chain, symbols) in chains {
            let Some(symbols) = symbols.as_object() else {
                debug!("Skipping non-object address book entry '{}'", chain);
                continue;
            };
            for (symbol, address) in symbols {
                match address.as_str() {
                    Some(address) => book.insert(chain.clone(), symbol.clone(), address.to_string()),
                    None => debug!("Skipping non-string address for {}:{}", chain, symbol),
                }
            }
        }
        Ok(book)
    }

    /// Look up the address of an asset on a chain.
    pub fn get(&self, chain: &str, symbol: &str) -> Option<&Address> {
        self.chains.get(chain).and_then(|m| m.get(symbol))
    }

    /// Look up the address of an asset, failing with [`TvlError::UnknownAsset`].
    pub fn resolve(&self, chain: &str, symbol: &str) -> Result<&Address, TvlError> {
        self.get(chain, symbol).ok_or_else(|| TvlError::UnknownAsset {
            chain: chain.to_string(),
            symbol: symbol.to_string(),
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethereum_dai() {
        let book = AddressBook::new();
        assert_eq!(
            book.get("ethereum", "DAI").map(|a| a.as_ref()),
            Some("0x6B175474E89094C44Da98b954EedeAC495271d0F")
        );
    }

    #[test]
    fn test_unknown_lookups() {
        let book = AddressBook::new();
        assert!(book.get("ethereum", "NOPE").is_none());
        assert!(book.get("solana", "DAI").is_none());
        assert!(book.get("polygon", "DAI").is_none());

        let err = book.resolve("ethereum", "NOPE").unwrap_err();
        assert!(matches!(err, TvlError::UnknownAsset { .. }));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "null": "0x0000000000000000000000000000000000000000",
            "ethereum": {
                "DAI": "0x6B175474E89094C44Da98b954EedeAC495271d0F",
                "BROKEN": 42
            },
            "arbitrum": { "DAI": "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1" }
        }"#;

        let book = AddressBook::from_json_str(json).unwrap();
        assert!(book.get("ethereum", "DAI").is_some());
        assert!(book.get("ethereum", "BROKEN").is_none());
        assert!(book.get("arbitrum", "DAI").is_some());
        assert!(book.get("null", "DAI").is_none());
    }

    #[test]
    fn test_from_json_str_rejects_non_object() {
        let err = AddressBook::from_json_str("[]").unwrap_err();
        assert!(matches!(err, TvlError::AddressBookFormat(_)));

        let err = AddressBook::from_json_str("not json").unwrap_err();
        assert!(matches!(err, TvlError::AddressBookFormat(_)));
    }

    #[test]
    fn test_from_json_str_replaces_bundled_table() {
        let book = AddressBook::from_json_str(r#"{"polygon": {"DAI": "0x8f3C"}}"#).unwrap();
        assert!(book.get("ethereum", "DAI").is_none());
        assert_eq!(book.get("polygon", "DAI").map(|a| a.as_ref()), Some("0x8f3C"));
    }

    #[test]
    fn test_insert_overrides() {
        let mut book = AddressBook::new();
        book.insert("ethereum", "DAI", "0xdead".to_string());
        assert_eq!(book.get("ethereum", "DAI").map(|a| a.as_ref()), Some("0xdead"));
    }
}
