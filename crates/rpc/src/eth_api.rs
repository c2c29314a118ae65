use crate::error::ClientResult;
use async_trait::async_trait;
use bundler_client_primitives::{
    StateOverride, UserOperation, UserOperationByHash, UserOperationGasEstimation,
    UserOperationHash, UserOperationReceipt,
};
use ethers::types::{Address, U256};

/// The ERC-4337 `eth` namespace RPC methods, as seen from the client
#[async_trait]
pub trait EthApi: Send + Sync {
    /// Retrieve the current [EIP-155](https://eips.ethereum.org/EIPS/eip-155) chain ID.
    ///
    /// # Returns
    /// * `ClientResult<U256>` - The chain ID decoded from its hex representation.
    async fn chain_id(&self) -> ClientResult<U256>;

    /// Get the supported entry points for [UserOperations](UserOperation).
    ///
    /// # Returns
    /// * `ClientResult<Vec<Address>>` - The entry point addresses, in the bundler's order.
    async fn supported_entry_points(&self) -> ClientResult<Vec<Address>>;

    /// Send a [UserOperation](UserOperation).
    ///
    /// # Arguments
    /// * `user_operation: &UserOperation` - The [UserOperation](UserOperation) to be sent.
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `ClientResult<UserOperationHash>` - The hash the bundler assigned to the operation.
    async fn send_user_operation(
        &self,
        user_operation: &UserOperation,
        entry_point: Address,
    ) -> ClientResult<UserOperationHash>;

    /// Estimate the gas required for a user operation.
    ///
    /// # Arguments
    /// * `user_operation: &UserOperation` - The user operation for which to estimate the gas.
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `ClientResult<UserOperationGasEstimation>` - The gas estimates.
    async fn estimate_user_operation_gas(
        &self,
        user_operation: &UserOperation,
        entry_point: Address,
    ) -> ClientResult<UserOperationGasEstimation>;

    /// Estimate the gas required for a user operation against simulated account state.
    ///
    /// Not part of ERC-4337; only some bundlers accept the third parameter.
    ///
    /// # Arguments
    /// * `user_operation: &UserOperation` - The user operation for which to estimate the gas.
    /// * `entry_point: Address` - The address of the entry point.
    /// * `state_overrides: &StateOverride` - Account state to simulate, keyed by address.
    ///
    /// # Returns
    /// * `ClientResult<UserOperationGasEstimation>` - The gas estimates.
    async fn estimate_user_operation_gas_with_overrides(
        &self,
        user_operation: &UserOperation,
        entry_point: Address,
        state_overrides: &StateOverride,
    ) -> ClientResult<UserOperationGasEstimation>;

    /// Retrieve the receipt of a [UserOperation](UserOperation).
    ///
    /// # Arguments
    /// * `user_operation_hash: UserOperationHash` - The hash of a [UserOperation](UserOperation).
    ///
    /// # Returns
    /// * `ClientResult<Option<UserOperationReceipt>>` - The receipt, or None if the operation
    ///   is unknown or not yet included.
    async fn get_user_operation_receipt(
        &self,
        user_operation_hash: UserOperationHash,
    ) -> ClientResult<Option<UserOperationReceipt>>;

    /// Retrieve a [UserOperation](UserOperation) by its hash.
    ///
    /// # Arguments
    /// * `user_operation_hash: UserOperationHash` - The hash of the user operation.
    ///
    /// # Returns
    /// * `ClientResult<Option<UserOperationByHash>>` - The operation with its inclusion data,
    ///   or None if it does not exist.
    async fn get_user_operation_by_hash(
        &self,
        user_operation_hash: UserOperationHash,
    ) -> ClientResult<Option<UserOperationByHash>>;
}
