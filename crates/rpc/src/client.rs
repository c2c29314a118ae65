use crate::{
    config::ClientConfig,
    debug_api::DebugApi,
    error::{ClientError, ClientResult},
    eth_api::EthApi,
};
use jsonrpsee::{
    core::{client::ClientT, params::ArrayParams},
    http_client::{HttpClient, HttpClientBuilder},
    ws_client::{WsClient, WsClientBuilder},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, trace};
use url::Url;

/// Builds positional params, surfacing serialization failures as [ClientError::Encode]
macro_rules! params {
    ($($param:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut params = jsonrpsee::core::params::ArrayParams::new();
        $(
            params.insert($param).map_err($crate::error::ClientError::Encode)?;
        )*
        params
    }};
}

pub(crate) use params;

/// Both bundler namespaces behind one object-safe trait
pub trait BundlerApi: EthApi + DebugApi {}

impl<T: EthApi + DebugApi> BundlerApi for T {}

/// Bundler JSON-RPC client over a `jsonrpsee` transport
///
/// The client holds nothing but the transport, so it can be shared between tasks as long as
/// the transport allows concurrent calls (the HTTP and WebSocket clients do).
#[derive(Debug, Clone)]
pub struct BundlerClient<C> {
    transport: C,
}

impl<C> BundlerClient<C>
where
    C: ClientT + Send + Sync,
{
    /// Wraps an existing transport
    pub fn new(transport: C) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &C {
        &self.transport
    }

    pub fn into_inner(self) -> C {
        self.transport
    }

    /// Performs one round trip
    pub(crate) async fn request<R>(&self, method: &'static str, params: ArrayParams) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        trace!(method, "Sending request to bundler");

        self.transport.request(method, params).await.map_err(|err| {
            debug!(method, "Bundler request failed: {err}");
            ClientError::from(err)
        })
    }
}

impl BundlerClient<HttpClient> {
    /// Creates a client talking HTTP(S) to `url`
    ///
    /// No request is made until the first call.
    pub fn http(url: &str, config: &ClientConfig) -> ClientResult<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(config.request_timeout)
            .max_concurrent_requests(config.max_concurrent_requests)
            .max_request_size(config.max_request_size)
            .max_response_size(config.max_response_size)
            .build(url)
            .map_err(|err| ClientError::connection(url, err))?;

        debug!("HTTP client for bundler at {url} created");
        Ok(Self::new(client))
    }
}

impl BundlerClient<WsClient> {
    /// Opens a WebSocket connection to `url`
    pub async fn ws(url: &str, config: &ClientConfig) -> ClientResult<Self> {
        let client = WsClientBuilder::default()
            .request_timeout(config.request_timeout)
            .connection_timeout(config.connection_timeout)
            .max_concurrent_requests(config.max_concurrent_requests)
            .max_request_size(config.max_request_size)
            .max_response_size(config.max_response_size)
            .build(url)
            .await
            .map_err(|err| ClientError::connection(url, err))?;

        debug!("WebSocket connection to bundler at {url} established");
        Ok(Self::new(client))
    }
}

/// Connects to the bundler at `url` with the default [ClientConfig]
///
/// See [connect_with_config].
pub async fn connect(url: &str) -> ClientResult<Box<dyn BundlerApi>> {
    connect_with_config(url, &ClientConfig::default()).await
}

/// Connects to the bundler at `url`, choosing the transport from the URL scheme
///
/// `http`/`https` use the HTTP client, `ws`/`wss` open a WebSocket connection. Dropping the
/// returned future aborts the connection attempt. Other transports (e.g. IPC) can be used
/// by wrapping them with [BundlerClient::new].
pub async fn connect_with_config(
    url: &str,
    config: &ClientConfig,
) -> ClientResult<Box<dyn BundlerApi>> {
    let parsed = Url::parse(url).map_err(|err| ClientError::connection(url, err))?;

    let client: Box<dyn BundlerApi> = match parsed.scheme() {
        "http" | "https" => Box::new(BundlerClient::http(url, config)?),
        "ws" | "wss" => Box::new(BundlerClient::ws(url, config).await?),
        scheme => {
            return Err(ClientError::connection(url, format!("unsupported URL scheme `{scheme}`")))
        }
    };

    info!("Connected to bundler at {url}");
    Ok(client)
}
