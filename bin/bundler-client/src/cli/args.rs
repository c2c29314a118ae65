use crate::utils::{parse_address, parse_duration};
use bundler_client_primitives::consts::entry_point;
use bundler_client_rpc::ClientConfig;
use clap::Parser;
use ethers::types::Address;
use std::time::Duration;

/// Default bundler RPC endpoint
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:3000";

/// Connection args shared by all commands
#[derive(Clone, Debug, Parser, PartialEq)]
pub struct ClientArgs {
    /// Bundler JSON-RPC endpoint (http, https, ws or wss)
    #[clap(long, global = true, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Request timeout in seconds
    #[clap(long, global = true, default_value = "60", value_parser = parse_duration)]
    pub request_timeout: Duration,

    /// Entry point used by commands that need one
    #[clap(long, global = true, default_value = entry_point::ADDRESS, value_parser = parse_address)]
    pub entry_point: Address,
}

impl ClientArgs {
    /// Client settings derived from the args
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().request_timeout(self.request_timeout)
    }
}
