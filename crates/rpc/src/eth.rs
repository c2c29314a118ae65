use crate::{
    client::{params, BundlerClient},
    error::ClientResult,
    eth_api::EthApi,
    methods::eth,
};
use async_trait::async_trait;
use bundler_client_primitives::{
    StateOverride, UserOperation, UserOperationByHash, UserOperationGasEstimation,
    UserOperationHash, UserOperationReceipt,
};
use ethers::{
    types::{Address, U256},
    utils::to_checksum,
};
use jsonrpsee::core::client::ClientT;

#[async_trait]
impl<C> EthApi for BundlerClient<C>
where
    C: ClientT + Send + Sync,
{
    async fn chain_id(&self) -> ClientResult<U256> {
        self.request(eth::CHAIN_ID, params![]).await
    }

    async fn supported_entry_points(&self) -> ClientResult<Vec<Address>> {
        self.request(eth::SUPPORTED_ENTRY_POINTS, params![]).await
    }

    async fn send_user_operation(
        &self,
        user_operation: &UserOperation,
        entry_point: Address,
    ) -> ClientResult<UserOperationHash> {
        let entry_point = to_checksum(&entry_point, None);
        self.request(eth::SEND_USER_OPERATION, params![user_operation, entry_point]).await
    }

    async fn estimate_user_operation_gas(
        &self,
        user_operation: &UserOperation,
        entry_point: Address,
    ) -> ClientResult<UserOperationGasEstimation> {
        let entry_point = to_checksum(&entry_point, None);
        self.request(eth::ESTIMATE_USER_OPERATION_GAS, params![user_operation, entry_point]).await
    }

    async fn estimate_user_operation_gas_with_overrides(
        &self,
        user_operation: &UserOperation,
        entry_point: Address,
        state_overrides: &StateOverride,
    ) -> ClientResult<UserOperationGasEstimation> {
        let entry_point = to_checksum(&entry_point, None);
        self.request(
            eth::ESTIMATE_USER_OPERATION_GAS,
            params![user_operation, entry_point, state_overrides],
        )
        .await
    }

    async fn get_user_operation_receipt(
        &self,
        user_operation_hash: UserOperationHash,
    ) -> ClientResult<Option<UserOperationReceipt>> {
        self.request(eth::GET_USER_OPERATION_RECEIPT, params![user_operation_hash]).await
    }

    async fn get_user_operation_by_hash(
        &self,
        user_operation_hash: UserOperationHash,
    ) -> ClientResult<Option<UserOperationByHash>> {
        self.request(eth::GET_USER_OPERATION_BY_HASH, params![user_operation_hash]).await
    }
}
