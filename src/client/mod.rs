//! JSON-RPC client layer.
//!
//! This module provides:
//! - The public client facade ([`Client`], [`ClientConfig`])
//! - Retry policy configuration and per-attempt decisions
//!   ([`RetryPolicy`], [`RetryState`], [`IsRetryable`])
//! - The top-level error type ([`Error`])

mod classify;
mod error;
mod facade;
mod retry;

#[cfg(test)]
mod retry_tests;

pub use error::Error;
pub use facade::{Client, ClientConfig};
pub use retry::{IsRetryable, RetryDecision, RetryPolicy, RetryState};
