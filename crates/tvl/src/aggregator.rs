//! Exact summation of property valuations.
//!
//! Valuations arrive as decimal strings in minor units and routinely exceed
//! `u64`/`u128`, so they are summed as [`BigUint`]. Parsing is strict: one
//! malformed record fails the whole computation.

use num_bigint::BigUint;
use num_traits::Zero;
use serde_json::Value;
use tracing::debug;

use crate::errors::TvlError;
use crate::models::{Address, Balances, PropertyRecord};
use crate::provider::PropertySource;

/// Parse a valuation as a non-negative base-10 integer.
///
/// Accepts one or more ASCII digits and nothing else: no sign, whitespace,
/// digit separators, decimal point or exponent.
pub fn parse_valuation(property_id: &str, value: Option<&str>) -> Result<BigUint, TvlError> {
    let reject = |reason: &'static str| TvlError::ValueParse {
        property_id: property_id.to_string(),
        value: value.map(str::to_string),
        reason,
    };

    let raw = value.ok_or_else(|| reject("missing valuation"))?;
    if raw.is_empty() {
        return Err(reject("empty valuation"));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(reject("not a base-10 digit string"));
    }

    BigUint::parse_bytes(raw.as_bytes(), 10).ok_or_else(|| reject("not a base-10 digit string"))
}

/// Parse the valuation of a record.
///
/// The indexer must send valuations as JSON strings; a number, boolean or
/// any other JSON type is rejected like a malformed string.
pub fn record_valuation(record: &PropertyRecord) -> Result<BigUint, TvlError> {
    match &record.valuation {
        None | Some(Value::Null) => parse_valuation(&record.id, None),
        Some(Value::String(raw)) => parse_valuation(&record.id, Some(raw.as_str())),
        Some(other) => Err(TvlError::ValueParse {
            property_id: record.id.clone(),
            value: Some(other.to_string()),
            reason: "not a JSON string",
        }),
    }
}

/// Sum the valuations of all records.
///
/// An empty slice sums to zero.
pub fn sum_valuations(records: &[PropertyRecord]) -> Result<BigUint, TvlError> {
    records.iter().try_fold(BigUint::zero(), |acc, record| {
        let valuation = record_valuation(record)?;
        if valuation.is_zero() {
            debug!("Property {} reported a zero valuation", record.id);
        }
        Ok(acc + valuation)
    })
}

/// Fetch the active properties once and key their total by `reference`.
///
/// The source is called exactly once; if it fails, nothing is summed.
pub async fn compute_tvl(
    source: &dyn PropertySource,
    reference: &Address,
) -> Result<Balances, TvlError> {
    let records = source.fetch_active_properties().await?;
    let total = sum_valuations(&records)?;

    debug!(
        "Summed {} properties from {}: {} -> {}",
        records.len(),
        source.id(),
        reference,
        total
    );

    Ok(Balances::single(reference, &total))
}
