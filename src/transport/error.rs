//! Error types for HTTP transport operations.

use thiserror::Error;

/// Error type for failures below the JSON-RPC envelope.
///
/// Describes what went wrong without dictating recovery strategy; the
/// retry engine decides which of these warrant another attempt.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused, and
    /// other connect-phase errors. The only transport failure eligible
    /// for automatic retry.
    #[error("connection error: {0}")]
    Connect(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This indicates a configuration error rather than a transient
    /// failure.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other failure while sending the request or reading the
    /// response.
    #[error("request error: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
}
