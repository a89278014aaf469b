//! JSON-RPC 2.0 request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version string sent with every request.
pub const VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request envelope.
///
/// Requests carry an `id` when the caller expects a correlated response.
/// Notifications omit the `id` entirely, signaling the server that no
/// response is wanted. Absent `id` and `params` fields are omitted from
/// the serialized JSON rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (always "2.0").
    pub jsonrpc: String,
    /// Name of the method to invoke.
    pub method: String,
    /// Request identifier; `None` for notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Parameter values (array or object), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Creates a request that expects a correlated response.
    #[must_use]
    pub fn call(method: impl Into<String>, id: u64, params: Option<Value>) -> Self {
        Self {
            jsonrpc: VERSION.to_owned(),
            method: method.into(),
            id: Some(id),
            params,
        }
    }

    /// Creates a notification request with no `id`.
    #[must_use]
    pub fn notification(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: VERSION.to_owned(),
            method: method.into(),
            id: None,
            params,
        }
    }
}

/// A JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result` and `error` is present in a well-formed
/// response. Both fields tolerate absence so malformed envelopes can
/// still be inspected; a JSON `null` is treated the same as an absent
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JsonRpcResponse {
    /// Result value on success.
    #[serde(default)]
    pub result: Option<Value>,
    /// Error object on failure.
    #[serde(default)]
    pub error: Option<ErrorObject>,
}

impl JsonRpcResponse {
    /// Extracts the error code from a raw response body, if the body is
    /// a JSON-RPC envelope carrying an error object.
    ///
    /// This is a cheap probe used by the retry engine; it does not
    /// classify the error or validate the rest of the envelope.
    #[must_use]
    pub fn peek_error_code(body: &[u8]) -> Option<i64> {
        let envelope: Self = serde_json::from_slice(body).ok()?;
        envelope.error.map(|error| error.code)
    }
}

/// The `error` member of a JSON-RPC 2.0 response.
///
/// Servers are required to send `code` and `message`, but real-world
/// endpoints omit both often enough that every field defaults: a missing
/// `code` becomes `0` and classifies as an application error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ErrorObject {
    /// Numeric error code.
    #[serde(default)]
    pub code: i64,
    /// Short description of the error.
    #[serde(default)]
    pub message: Option<String>,
    /// Additional structured data, if any.
    #[serde(default)]
    pub data: Option<Value>,
}
