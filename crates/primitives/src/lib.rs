//! Account abstraction (ERC-4337) bundler client primitive types
//!
//! This crate contains the data-transfer types exchanged with an ERC-4337 bundler over
//! JSON-RPC, together with the serde helpers they need.

pub mod bundler;
pub mod consts;
pub mod state_override;
mod user_operation;
mod utils;

pub use bundler::Mode as BundlingMode;
pub use state_override::{OverrideAccount, StateOverride};
pub use user_operation::{
    RawUserOperation, UserOperation, UserOperationByHash, UserOperationGasEstimation,
    UserOperationHash, UserOperationReceipt,
};
pub use utils::get_address;
