#![allow(dead_code)]

use bundler_client_rpc::methods::{debug, eth};
use jsonrpsee::{
    core::Error as RpcError,
    server::{RpcModule, Server, ServerHandle},
    types::{ErrorObjectOwned, Params},
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

pub const ENTRY_POINT: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
pub const OTHER_ENTRY_POINT: &str = "0x9406Cc6185a346906296840746125a0E44976454";
pub const USER_OPERATION_HASH: &str =
    "0x95418c07086df02ff6bc9e8bdc150b380cb761beecc098630440bcec6e862702";
pub const BUNDLE_HASH: &str = "0x7c1b8c9df49a9e09ecef0f0fe6841d895850d29820f9a4b494097764085dcd7e";

const METHODS: [&str; 10] = [
    eth::CHAIN_ID,
    eth::SUPPORTED_ENTRY_POINTS,
    eth::SEND_USER_OPERATION,
    eth::ESTIMATE_USER_OPERATION_GAS,
    eth::GET_USER_OPERATION_RECEIPT,
    eth::GET_USER_OPERATION_BY_HASH,
    debug::CLEAR_STATE,
    debug::DUMP_MEMPOOL,
    debug::SEND_BUNDLE_NOW,
    debug::SET_BUNDLING_MODE,
];

/// A request as the mock bundler received it
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: String,
    pub params: Vec<Value>,
}

/// Bundler stand-in answering every method with a canned response and recording each request
#[derive(Default)]
pub struct MockBundler {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<HashMap<&'static str, Result<Value, ErrorObjectOwned>>>,
    delays: Mutex<HashMap<&'static str, Duration>>,
}

impl MockBundler {
    pub fn new() -> Arc<Self> {
        let bundler = Self::default();
        {
            let mut responses = bundler.responses.lock();
            responses.insert(eth::CHAIN_ID, Ok(json!("0x89")));
            responses
                .insert(eth::SUPPORTED_ENTRY_POINTS, Ok(json!([ENTRY_POINT, OTHER_ENTRY_POINT])));
            responses.insert(eth::SEND_USER_OPERATION, Ok(json!(USER_OPERATION_HASH)));
            responses.insert(
                eth::ESTIMATE_USER_OPERATION_GAS,
                Ok(json!({
                    "preVerificationGas": "0xb3f0",
                    "verificationGasLimit": "0x186a0",
                    "callGasLimit": "0x5208",
                })),
            );
            responses.insert(eth::GET_USER_OPERATION_RECEIPT, Ok(Value::Null));
            responses.insert(eth::GET_USER_OPERATION_BY_HASH, Ok(Value::Null));
            responses.insert(debug::CLEAR_STATE, Ok(json!("ok")));
            responses.insert(debug::DUMP_MEMPOOL, Ok(json!([])));
            responses.insert(debug::SEND_BUNDLE_NOW, Ok(json!("")));
            responses.insert(debug::SET_BUNDLING_MODE, Ok(json!("ok")));
        }
        Arc::new(bundler)
    }

    /// Replaces the response for `method`
    pub fn respond(&self, method: &'static str, response: Result<Value, ErrorObjectOwned>) {
        self.responses.lock().insert(method, response);
    }

    /// Holds back the response for `method` by `delay`
    pub fn delay(&self, method: &'static str, delay: Duration) {
        self.delays.lock().insert(method, delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().last().cloned()
    }

    async fn handle_delayed(
        &self,
        method: &'static str,
        params: Params<'_>,
    ) -> Result<Value, ErrorObjectOwned> {
        let delay = self.delays.lock().get(method).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.handle(method, params)
    }

    fn handle(&self, method: &'static str, params: Params) -> Result<Value, ErrorObjectOwned> {
        let params: Option<Vec<Value>> = params.parse()?;
        self.calls
            .lock()
            .push(Call { method: method.to_string(), params: params.unwrap_or_default() });

        self.responses.lock().get(method).cloned().unwrap_or(Ok(Value::Null))
    }
}

/// Starts the mock bundler on a random localhost port, serving HTTP and WebSocket
///
/// The server stops once the returned handle is dropped.
pub async fn start_mock_bundler(
    bundler: Arc<MockBundler>,
) -> Result<(SocketAddr, ServerHandle), RpcError> {
    let mut module = RpcModule::new(bundler);
    for method in METHODS {
        module.register_async_method(method, move |params, bundler| async move {
            bundler.handle_delayed(method, params).await
        })?;
    }

    let server = Server::builder().build("127.0.0.1:0").await?;
    let addr = server.local_addr()?;
    let handle = server.start(module);

    Ok((addr, handle))
}

pub fn http_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}

pub fn ws_url(addr: SocketAddr) -> String {
    format!("ws://{addr}")
}

/// Operation as a wallet would submit it
pub fn user_operation_json() -> Value {
    json!({
        "sender": "0x9c5754De1443984659E1b3a8d1931D83475ba29C",
        "nonce": "0x1",
        "initCode": "0x",
        "callData": "0xb61d27f6",
        "callGasLimit": "0x5208",
        "verificationGasLimit": "0x186a0",
        "preVerificationGas": "0xb3f0",
        "maxFeePerGas": "0x3b9aca00",
        "maxPriorityFeePerGas": "0x3b9aca00",
        "paymasterAndData": "0x",
        "signature": "0x01",
    })
}
