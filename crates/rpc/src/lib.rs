//! Account abstraction (ERC-4337) bundler JSON-RPC client
//!
//! [BundlerClient] wraps any `jsonrpsee` client transport and exposes one method per bundler
//! RPC endpoint through the [EthApi] and [DebugApi] traits. Use [connect] to pick the
//! transport from a URL, or [BundlerClient::new] to wrap a transport you already have.

mod client;
mod config;
mod debug;
mod debug_api;
mod error;
mod eth;
mod eth_api;
pub mod methods;

pub use client::{connect, connect_with_config, BundlerApi, BundlerClient};
pub use config::ClientConfig;
pub use debug_api::DebugApi;
pub use error::{ClientError, ClientResult};
pub use eth_api::EthApi;
pub use jsonrpsee::{http_client::HttpClient, ws_client::WsClient};
