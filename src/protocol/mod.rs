//! JSON-RPC 2.0 protocol layer.
//!
//! This module provides types for:
//! - Building request envelopes ([`JsonRpcRequest`])
//! - Decoding response envelopes ([`JsonRpcResponse`], [`ErrorObject`])
//! - The typed error taxonomy for server-reported failures ([`RpcError`])

mod envelope;
mod error;


pub use envelope::{ErrorObject, JsonRpcRequest, JsonRpcResponse, VERSION};
pub use error::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, RpcError,
    SERVER_ERROR_MAX, SERVER_ERROR_MIN,
};
