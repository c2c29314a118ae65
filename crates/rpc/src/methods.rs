//! Bundler JSON-RPC method names

/// `eth` namespace (ERC-4337)
pub mod eth {
    pub const CHAIN_ID: &str = "eth_chainId";
    pub const SUPPORTED_ENTRY_POINTS: &str = "eth_supportedEntryPoints";
    pub const SEND_USER_OPERATION: &str = "eth_sendUserOperation";
    pub const ESTIMATE_USER_OPERATION_GAS: &str = "eth_estimateUserOperationGas";
    pub const GET_USER_OPERATION_RECEIPT: &str = "eth_getUserOperationReceipt";
    pub const GET_USER_OPERATION_BY_HASH: &str = "eth_getUserOperationByHash";
}

/// `debug_bundler` namespace (only exposed by bundlers running in debug mode)
pub mod debug {
    pub const CLEAR_STATE: &str = "debug_bundler_clearState";
    pub const DUMP_MEMPOOL: &str = "debug_bundler_dumpMempool";
    pub const SEND_BUNDLE_NOW: &str = "debug_bundler_sendBundleNow";
    pub const SET_BUNDLING_MODE: &str = "debug_bundler_setBundlingMode";
}
