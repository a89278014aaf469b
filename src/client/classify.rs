//! Classification of received HTTP responses.

use http::StatusCode;
use serde_json::Value;

use crate::protocol::{JsonRpcResponse, RpcError};
use crate::transport::HttpResponse;

/// The classified outcome of a completed request.
#[derive(Debug)]
pub enum Classified {
    /// A 200 response whose envelope carries a `result` member.
    Success(Value),
    /// The envelope carries an `error` object, regardless of status.
    RpcFailure(RpcError),
    /// Non-success status with no parseable RPC envelope.
    HttpFailure {
        /// The response status code.
        status: StatusCode,
        /// The raw response body, if any.
        body: String,
    },
    /// The body was non-empty but not valid JSON.
    MalformedBody {
        /// The response status code.
        status: StatusCode,
        /// The JSON parse failure.
        reason: String,
        /// The raw response body.
        body: String,
    },
}

/// Classifies a received HTTP response.
///
/// Rules, in order:
/// 1. Status 200 and the body is an envelope with a `result` member:
///    success.
/// 2. The body is an envelope with an `error` member (any status): RPC
///    failure, classified by code.
/// 3. A non-empty body that is not valid JSON: malformed body, carrying
///    the raw body and status.
/// 4. Anything else: HTTP failure carrying the status.
///
/// An empty body is never malformed; it falls through to rule 4. JSON
/// bodies that are not objects (arrays, strings) carry no envelope
/// members and fall through the same way.
///
/// Connection-level failures never reach the classifier; they surface
/// as transport errors directly.
#[must_use]
pub fn classify(response: HttpResponse) -> Classified {
    let status = response.status;

    if response.body.is_empty() {
        return Classified::HttpFailure {
            status,
            body: String::new(),
        };
    }

    let value: Value = match serde_json::from_slice(&response.body) {
        Ok(value) => value,
        Err(error) => {
            return Classified::MalformedBody {
                status,
                reason: error.to_string(),
                body: response.body_text(),
            };
        }
    };

    let envelope: JsonRpcResponse = serde_json::from_value(value).unwrap_or_default();

    match envelope {
        JsonRpcResponse {
            result: Some(result),
            ..
        } if status == StatusCode::OK => Classified::Success(result),
        JsonRpcResponse {
            error: Some(error), ..
        } => Classified::RpcFailure(RpcError::from_object(error)),
        JsonRpcResponse { .. } => Classified::HttpFailure {
            status,
            body: response.body_text(),
        },
    }
}
