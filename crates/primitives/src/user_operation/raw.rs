//! User operation as returned by `debug_bundler_dumpMempool`

use super::UserOperation;
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// User operation in the mempool dump wire shape
///
/// Bundlers are lax here: any field may be missing or `null`. The conversion into
/// [UserOperation] is total; a missing sender becomes the zero address, missing numerics
/// become zero and missing byte strings become empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserOperation {
    #[serde(default)]
    pub sender: Option<Address>,
    #[serde(default)]
    pub nonce: Option<U256>,
    #[serde(default)]
    pub init_code: Option<Bytes>,
    #[serde(default)]
    pub call_data: Option<Bytes>,
    #[serde(default)]
    pub call_gas_limit: Option<U256>,
    #[serde(default)]
    pub verification_gas_limit: Option<U256>,
    #[serde(default)]
    pub pre_verification_gas: Option<U256>,
    #[serde(default)]
    pub max_fee_per_gas: Option<U256>,
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<U256>,
    #[serde(default)]
    pub paymaster_and_data: Option<Bytes>,
    #[serde(default)]
    pub signature: Option<Bytes>,
}

impl From<RawUserOperation> for UserOperation {
    fn from(raw: RawUserOperation) -> Self {
        Self {
            sender: raw.sender.unwrap_or_default(),
            nonce: raw.nonce.unwrap_or_default(),
            init_code: raw.init_code.unwrap_or_default(),
            call_data: raw.call_data.unwrap_or_default(),
            call_gas_limit: raw.call_gas_limit.unwrap_or_default(),
            verification_gas_limit: raw.verification_gas_limit.unwrap_or_default(),
            pre_verification_gas: raw.pre_verification_gas.unwrap_or_default(),
            max_fee_per_gas: raw.max_fee_per_gas.unwrap_or_default(),
            max_priority_fee_per_gas: raw.max_priority_fee_per_gas.unwrap_or_default(),
            paymaster_and_data: raw.paymaster_and_data.unwrap_or_default(),
            signature: raw.signature.unwrap_or_default(),
        }
    }
}

impl From<UserOperation> for RawUserOperation {
    fn from(uo: UserOperation) -> Self {
        Self {
            sender: Some(uo.sender),
            nonce: Some(uo.nonce),
            init_code: Some(uo.init_code),
            call_data: Some(uo.call_data),
            call_gas_limit: Some(uo.call_gas_limit),
            verification_gas_limit: Some(uo.verification_gas_limit),
            pre_verification_gas: Some(uo.pre_verification_gas),
            max_fee_per_gas: Some(uo.max_fee_per_gas),
            max_priority_fee_per_gas: Some(uo.max_priority_fee_per_gas),
            paymaster_and_data: Some(uo.paymaster_and_data),
            signature: Some(uo.signature),
        }
    }
}
