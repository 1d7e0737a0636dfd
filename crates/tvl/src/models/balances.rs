use std::collections::BTreeMap;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::types::Address;

/// TVL result: asset address -> amount in minor units, as a decimal string.
///
/// Serializes as a flat JSON object, e.g.
/// `{"0x6B175474E89094C44Da98b954EedeAC495271d0F": "764000000000000000000000"}`.
/// Built once by the aggregator and not mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balances(BTreeMap<String, String>);

impl Balances {
    /// Balances holding a single asset.
    pub fn single(address: &Address, amount: &BigUint) -> Self {
        let mut map = BTreeMap::new();
        map.insert(address.to_string(), amount.to_str_radix(10));
        Self(map)
    }

    /// Amount recorded for an address, if any.
    pub fn get(&self, address: &str) -> Option<&str> {
        self.0.get(address).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    #[test]
    fn test_single_zero_is_present() {
        let balances = Balances::single(&Address::Borrowed(DAI), &BigUint::zero());
        assert_eq!(balances.len(), 1);
        assert_eq!(balances.get(DAI), Some("0"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let amount = BigUint::parse_bytes(b"764000000000000000000000", 10).unwrap();
        let balances = Balances::single(&Address::Borrowed(DAI), &amount);
        let json = serde_json::to_string(&balances).unwrap();
        assert_eq!(
            json,
            r#"{"0x6B175474E89094C44Da98b954EedeAC495271d0F":"764000000000000000000000"}"#
        );
    }
}
