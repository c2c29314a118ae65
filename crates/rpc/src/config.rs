use std::time::Duration;

const TEN_MB_SIZE_BYTES: u32 = 10 * 1024 * 1024;

/// Transport settings applied when the client opens its own connection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Time a single call may take before it fails with a transport error
    pub request_timeout: Duration,
    /// Time allowed for the WebSocket handshake
    pub connection_timeout: Duration,
    /// Maximum number of calls in flight on one connection
    pub max_concurrent_requests: usize,
    /// Maximum size of a serialized request in bytes
    pub max_request_size: u32,
    /// Maximum size of a response in bytes
    pub max_response_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            connection_timeout: Duration::from_secs(10),
            max_concurrent_requests: 256,
            max_request_size: TEN_MB_SIZE_BYTES,
            max_response_size: TEN_MB_SIZE_BYTES,
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn connection_timeout(mut self, connection_timeout: Duration) -> Self {
        self.connection_timeout = connection_timeout;
        self
    }

    pub fn max_concurrent_requests(mut self, max_concurrent_requests: usize) -> Self {
        self.max_concurrent_requests = max_concurrent_requests;
        self
    }

    pub fn max_request_size(mut self, max_request_size: u32) -> Self {
        self.max_request_size = max_request_size;
        self
    }

    pub fn max_response_size(mut self, max_response_size: u32) -> Self {
        self.max_response_size = max_response_size;
        self
    }
}
