use crate::error::ClientResult;
use async_trait::async_trait;
use bundler_client_primitives::{BundlingMode, UserOperation};
use ethers::types::{Address, H256};

/// The ERC-4337 `debug_bundler` namespace RPC methods, as seen from the client
#[async_trait]
pub trait DebugApi: Send + Sync {
    /// Clears the bundler mempool and reputation
    async fn clear_state(&self) -> ClientResult<()>;

    /// Get all [UserOperations](UserOperation) of the mempool
    ///
    /// # Arguments
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `ClientResult<Vec<UserOperation>>` - The mempool content, in the bundler's order
    async fn dump_mempool(&self, entry_point: Address) -> ClientResult<Vec<UserOperation>>;

    /// Immediately send the current bundle of user operations.
    ///
    /// # Returns
    /// * `ClientResult<Option<H256>>` - The hash of the bundle transaction, or None if the
    ///   bundler had nothing to send.
    async fn send_bundle_now(&self) -> ClientResult<Option<H256>>;

    /// Set the bundling mode.
    ///
    /// # Arguments
    /// * `mode: BundlingMode` - The [BundlingMode](BundlingMode) to be set.
    async fn set_bundling_mode(&self, mode: BundlingMode) -> ClientResult<()>;
}
