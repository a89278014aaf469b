//! jrpc-client: JSON-RPC 2.0 over HTTP
//!
//! A client library for calling JSON-RPC 2.0 services over HTTP, with a
//! typed error taxonomy and configurable retry policies that distinguish
//! transient transport/server failures from terminal application errors.

pub mod client;
pub mod protocol;
pub mod time;
pub mod transport;
