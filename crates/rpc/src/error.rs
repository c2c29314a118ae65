use jsonrpsee::core::Error as JsonRpseeError;
use thiserror::Error;

/// Result type of every client operation
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the bundler client
///
/// The client never retries or reclassifies: transport failures, server errors and
/// malformed responses are handed to the caller as they are.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The connection to the bundler could not be established
    #[error("failed to connect to {url}: {reason}")]
    Connection { url: String, reason: String },

    /// Network, timeout or other low-level failure while a call was in flight
    #[error("transport error: {0}")]
    Transport(#[source] JsonRpseeError),

    /// Error object returned by the bundler
    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String, data: Option<serde_json::Value> },

    /// Response did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request parameters could not be serialized
    #[error("failed to encode request params: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ClientError {
    pub(crate) fn connection(url: &str, reason: impl ToString) -> Self {
        Self::Connection { url: url.to_string(), reason: reason.to_string() }
    }

    /// Error code returned by the bundler, if the error came from the bundler
    pub fn rpc_code(&self) -> Option<i32> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<JsonRpseeError> for ClientError {
    fn from(err: JsonRpseeError) -> Self {
        match err {
            JsonRpseeError::Call(obj) => Self::Rpc {
                code: obj.code(),
                message: obj.message().to_string(),
                data: obj.data().and_then(|data| serde_json::from_str(data.get()).ok()),
            },
            JsonRpseeError::ParseError(err) => Self::Decode(err),
            err => Self::Transport(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::types::ErrorObject;
    use serde_json::json;

    #[test]
    fn server_error_is_kept_verbatim() {
        let obj = ErrorObject::owned(-32602, "invalid sender", Some(json!({"sender": "0x01"})));
        let err = ClientError::from(JsonRpseeError::Call(obj));

        assert_eq!(err.rpc_code(), Some(-32602));
        match err {
            ClientError::Rpc { message, data, .. } => {
                assert_eq!(message, "invalid sender");
                assert_eq!(data, Some(json!({"sender": "0x01"})));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn timeout_is_transport_error() {
        let err = ClientError::from(JsonRpseeError::RequestTimeout);
        assert!(matches!(err, ClientError::Transport(JsonRpseeError::RequestTimeout)));
        assert_eq!(err.rpc_code(), None);
    }

    #[test]
    fn parse_error_is_decode_error() {
        let parse = serde_json::from_str::<u64>("\"nope\"").unwrap_err();
        assert!(matches!(ClientError::from(JsonRpseeError::ParseError(parse)), ClientError::Decode(_)));
    }
}
