//! Typed error taxonomy for server-reported JSON-RPC failures.

use serde_json::Value;
use thiserror::Error;

use super::ErrorObject;

/// Invalid JSON was received by the server.
pub const PARSE_ERROR: i64 = -32700;
/// The JSON sent is not a valid Request object.
pub const INVALID_REQUEST: i64 = -32600;
/// The method does not exist / is not available.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Invalid method parameter(s).
pub const INVALID_PARAMS: i64 = -32602;
/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i64 = -32603;
/// Lower bound (inclusive) of the implementation-defined server error range.
pub const SERVER_ERROR_MIN: i64 = -32099;
/// Upper bound (inclusive) of the implementation-defined server error range.
pub const SERVER_ERROR_MAX: i64 = -32000;

/// A classified JSON-RPC error.
///
/// Every variant carries the server-supplied message (or a documented
/// default when the server omits one) and the optional `data` member.
/// [`ServerError`](Self::ServerError) and [`AppError`](Self::AppError)
/// additionally carry the original code, since their kinds cover a range
/// of codes rather than a single one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpcError {
    /// The server could not parse the request JSON (-32700).
    #[error("parse error: {message}")]
    ParseError {
        /// Server-supplied or default message.
        message: String,
        /// Optional structured data.
        data: Option<Value>,
    },

    /// The request was not a valid Request object (-32600).
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Server-supplied or default message.
        message: String,
        /// Optional structured data.
        data: Option<Value>,
    },

    /// The requested method does not exist (-32601).
    #[error("method not found: {message}")]
    MethodNotFound {
        /// Server-supplied or default message.
        message: String,
        /// Optional structured data.
        data: Option<Value>,
    },

    /// The method parameters were invalid (-32602).
    #[error("invalid params: {message}")]
    InvalidParams {
        /// Server-supplied or default message.
        message: String,
        /// Optional structured data.
        data: Option<Value>,
    },

    /// Internal JSON-RPC error (-32603).
    ///
    /// The only kind eligible for automatic retry; all other kinds are
    /// treated as terminal.
    #[error("internal error: {message}")]
    InternalError {
        /// Server-supplied or default message.
        message: String,
        /// Optional structured data.
        data: Option<Value>,
    },

    /// Implementation-defined server error (code in [-32099, -32000]).
    #[error("server error {code}: {message}")]
    ServerError {
        /// The original error code.
        code: i64,
        /// Server-supplied or default message.
        message: String,
        /// Optional structured data.
        data: Option<Value>,
    },

    /// Application-level error (any code outside the reserved ranges).
    #[error("application error {code}: {message}")]
    AppError {
        /// The original error code.
        code: i64,
        /// Server-supplied or default message.
        message: String,
        /// Optional structured data.
        data: Option<Value>,
    },
}

impl RpcError {
    /// Default message for [`ParseError`](Self::ParseError).
    pub const PARSE_ERROR_MESSAGE: &'static str = "Invalid JSON was received by the server. An error occurred on the server while parsing the JSON text.";
    /// Default message for [`InvalidRequest`](Self::InvalidRequest).
    pub const INVALID_REQUEST_MESSAGE: &'static str = "The JSON sent is not a valid Request object.";
    /// Default message for [`MethodNotFound`](Self::MethodNotFound).
    pub const METHOD_NOT_FOUND_MESSAGE: &'static str =
        "The method does not exist / is not available.";
    /// Default message for [`InvalidParams`](Self::InvalidParams).
    pub const INVALID_PARAMS_MESSAGE: &'static str = "Invalid method parameter(s).";
    /// Default message for [`InternalError`](Self::InternalError).
    pub const INTERNAL_ERROR_MESSAGE: &'static str = "Internal JSON-RPC error.";
    /// Default message for [`ServerError`](Self::ServerError).
    pub const SERVER_ERROR_MESSAGE: &'static str = "Server error";
    /// Default message for [`AppError`](Self::AppError).
    pub const APP_ERROR_MESSAGE: &'static str = "Application error";

    /// Classifies a raw error object into its error kind.
    ///
    /// The mapping is a pure function of the code: the five reserved
    /// codes map to their dedicated kinds, codes in
    /// [[`SERVER_ERROR_MIN`], [`SERVER_ERROR_MAX`]] map to
    /// [`ServerError`](Self::ServerError), and everything else maps to
    /// [`AppError`](Self::AppError). A missing message is replaced with
    /// the documented default for the kind.
    #[must_use]
    pub fn from_object(object: ErrorObject) -> Self {
        let ErrorObject {
            code,
            message,
            data,
        } = object;

        let message_or = |default: &str| message.unwrap_or_else(|| default.to_owned());

        match code {
            PARSE_ERROR => Self::ParseError {
                message: message_or(Self::PARSE_ERROR_MESSAGE),
                data,
            },
            INVALID_REQUEST => Self::InvalidRequest {
                message: message_or(Self::INVALID_REQUEST_MESSAGE),
                data,
            },
            METHOD_NOT_FOUND => Self::MethodNotFound {
                message: message_or(Self::METHOD_NOT_FOUND_MESSAGE),
                data,
            },
            INVALID_PARAMS => Self::InvalidParams {
                message: message_or(Self::INVALID_PARAMS_MESSAGE),
                data,
            },
            INTERNAL_ERROR => Self::InternalError {
                message: message_or(Self::INTERNAL_ERROR_MESSAGE),
                data,
            },
            SERVER_ERROR_MIN..=SERVER_ERROR_MAX => Self::ServerError {
                code,
                message: message_or(Self::SERVER_ERROR_MESSAGE),
                data,
            },
            _ => Self::AppError {
                code,
                message: message_or(Self::APP_ERROR_MESSAGE),
                data,
            },
        }
    }

    /// Returns the numeric JSON-RPC error code for this error.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::ParseError { .. } => PARSE_ERROR,
            Self::InvalidRequest { .. } => INVALID_REQUEST,
            Self::MethodNotFound { .. } => METHOD_NOT_FOUND,
            Self::InvalidParams { .. } => INVALID_PARAMS,
            Self::InternalError { .. } => INTERNAL_ERROR,
            Self::ServerError { code, .. } | Self::AppError { code, .. } => *code,
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::ParseError { message, .. }
            | Self::InvalidRequest { message, .. }
            | Self::MethodNotFound { message, .. }
            | Self::InvalidParams { message, .. }
            | Self::InternalError { message, .. }
            | Self::ServerError { message, .. }
            | Self::AppError { message, .. } => message,
        }
    }

    /// Returns the optional structured data attached to the error.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::ParseError { data, .. }
            | Self::InvalidRequest { data, .. }
            | Self::MethodNotFound { data, .. }
            | Self::InvalidParams { data, .. }
            | Self::InternalError { data, .. }
            | Self::ServerError { data, .. }
            | Self::AppError { data, .. } => data.as_ref(),
        }
    }
}
