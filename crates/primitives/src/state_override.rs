//! State override primitives for gas estimation

use ethers::types::{Address, Bytes, H256, U256, U64};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Simulated account state applied only while the bundler estimates gas
///
/// Unset fields are left out of the request so the bundler keeps the on-chain value.
/// `state` replaces the whole storage of the account, `state_diff` only patches the
/// listed slots; setting both is rejected by most servers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<HashMap<H256, H256>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_diff: Option<HashMap<H256, H256>>,
}

impl OverrideAccount {
    /// Sets the nonce override
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Sets the code override
    pub fn code(mut self, code: Bytes) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the balance override
    pub fn balance(mut self, balance: U256) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Replaces the full storage of the account
    pub fn state(mut self, state: HashMap<H256, H256>) -> Self {
        self.state = Some(state);
        self
    }

    /// Patches individual storage slots of the account
    pub fn state_diff(mut self, state_diff: HashMap<H256, H256>) -> Self {
        self.state_diff = Some(state_diff);
        self
    }
}

/// Per-address state overrides (third positional parameter of `eth_estimateUserOperationGas`)
pub type StateOverride = HashMap<Address, OverrideAccount>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn override_account_encoding() {
        let slot = H256::from_low_u64_be(1);
        let value = H256::from_low_u64_be(0xff);
        let account = OverrideAccount::default()
            .nonce(26)
            .balance(U256::from(10).pow(18.into()))
            .state_diff(HashMap::from([(slot, value)]));

        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            json!({
                "nonce": "0x1a",
                "balance": "0xde0b6b3a7640000",
                "stateDiff": {
                    "0x0000000000000000000000000000000000000000000000000000000000000001":
                        "0x00000000000000000000000000000000000000000000000000000000000000ff"
                }
            })
        );
    }

    #[test]
    fn empty_override_account() {
        assert_eq!(serde_json::to_value(OverrideAccount::default()).unwrap(), json!({}));
    }

    #[test]
    fn state_override_keyed_by_address() {
        let addr: Address = "0x9c5754De1443984659E1b3a8d1931D83475ba29C".parse().unwrap();
        let overrides: StateOverride =
            HashMap::from([(addr, OverrideAccount::default().code("0x6001".parse().unwrap()))]);

        let json = serde_json::to_value(&overrides).unwrap();
        assert_eq!(json["0x9c5754de1443984659e1b3a8d1931d83475ba29c"]["code"], "0x6001");

        let decoded: StateOverride = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, overrides);
    }
}
