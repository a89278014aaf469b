//! Top-level error type for client operations.

use http::StatusCode;
use thiserror::Error;

use crate::protocol::RpcError;
use crate::transport::TransportError;

/// Error type returned by [`Client`](super::Client) operations.
///
/// Classified RPC errors and transport failures propagate as-is; the
/// client never swallows a terminal failure. Only the retry loop
/// recovers locally, by re-attempting, and once retries are exhausted
/// the last failure surfaces here.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a JSON-RPC error object.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The request failed below the JSON-RPC envelope.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-success HTTP status with no parseable RPC envelope.
    #[error("HTTP status {status}")]
    Status {
        /// The response status code.
        status: StatusCode,
        /// The raw response body, if any.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("malformed response body ({status}): {reason}")]
    MalformedBody {
        /// The response status code.
        status: StatusCode,
        /// The JSON parse failure.
        reason: String,
        /// The raw response body.
        body: String,
    },

    /// The request envelope could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The result value did not deserialize into the requested type.
    #[error("unexpected result shape: {0}")]
    Decode(#[source] serde_json::Error),
}
