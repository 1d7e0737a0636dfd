use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tokenized property as reported by the indexer.
///
/// Only `valuation` takes part in the TVL computation; the remaining fields
/// are carried through for logging and for callers that want to inspect the
/// dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Indexer entity id (`<chainId>-<contractAddress>`)
    pub id: String,

    /// Property token contract address
    pub contract_address: String,

    /// ISO 3166-1 alpha-2 country of the property
    #[serde(default)]
    pub country_code: Option<String>,

    /// Human readable property name
    #[serde(default)]
    pub name: Option<String>,

    /// Token symbol (e.g., "BSPT-OCN-15")
    #[serde(default)]
    pub symbol: Option<String>,

    /// Valuation in DAI minor units (wei), expected as a decimal integer string.
    ///
    /// Kept as the raw JSON value; the aggregator decides whether it is valid,
    /// so a number or other non-string fails there rather than at decode time.
    #[serde(rename = "propertyValuation", default)]
    pub valuation: Option<Value>,
}

impl PropertyRecord {
    /// Create a record with only the fields the aggregator needs.
    pub fn new(id: impl Into<String>, valuation: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            contract_address: id.rsplit('-').next().unwrap_or_default().to_string(),
            id,
            country_code: None,
            name: None,
            symbol: None,
            valuation: Some(Value::String(valuation.into())),
        }
    }

    /// The valuation when the indexer sent it as a JSON string.
    pub fn valuation_str(&self) -> Option<&str> {
        self.valuation.as_ref().and_then(Value::as_str)
    }
}
