//! HTTP transport layer.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpTransport`])
//! - Reporting per-attempt outcomes to the retry engine ([`AttemptOutcome`])
//! - Production HTTP transport implementation ([`ReqwestTransport`])

mod error;
mod http;
mod reqwest;

#[cfg(test)]
mod reqwest_tests;

pub use self::http::{AttemptOutcome, HttpRequest, HttpResponse, HttpTransport};
pub use self::reqwest::ReqwestTransport;
pub use error::TransportError;
