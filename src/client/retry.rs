//! Retry policy configuration and per-attempt retry decisions.

use std::time::Duration;

use crate::protocol::{INTERNAL_ERROR, JsonRpcResponse};
use crate::transport::{AttemptOutcome, HttpResponse, TransportError};

/// Configuration for linear backoff retry behavior.
///
/// Controls how many extra attempts a failed request gets and the base
/// delay between attempts. Backoff is linear rather than exponential:
/// the first retry waits `delay`, the second `2 * delay`, and so on.
///
/// # Defaults
///
/// - `retries`: 0 (a single attempt, no retries)
/// - `delay`: 500 milliseconds
///
/// # Example
///
/// ```
/// use jrpc_client::client::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new()
///     .with_retries(3)
///     .with_delay(Duration::from_millis(100));
///
/// assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of extra attempts after the initial one.
    ///
    /// Zero disables retries; the initial attempt is always made.
    pub retries: u32,

    /// Base delay between attempts.
    ///
    /// The delay after failed attempt `n` (1-based) is `n * delay`.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Default number of retries.
    pub const DEFAULT_RETRIES: u32 = 0;

    /// Default base delay (500 milliseconds).
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            retries: Self::DEFAULT_RETRIES,
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Sets the number of retries.
    #[must_use]
    pub const fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the base delay between attempts.
    ///
    /// Zero delay is supported (useful for testing) but not recommended
    /// for production as it creates a tight retry loop.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Computes the delay to wait after a failed attempt.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The 1-based index of the attempt that just failed.
    #[must_use]
    pub const fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.delay.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension trait for checking if a failure is transient.
///
/// Determines whether an outcome represents a failure that warrants
/// another attempt. Used by [`RetryState`] to decide whether to keep
/// retrying.
pub trait IsRetryable {
    /// Returns true if the failure is potentially transient and should
    /// be retried.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for TransportError {
    fn is_retryable(&self) -> bool {
        match self {
            // Only connect-phase failures are transient: nothing reached
            // the server, so repeating the request is safe.
            Self::Connect(_) => true,
            Self::Timeout | Self::InvalidUrl(_) | Self::Request(_) => false,
        }
    }
}

impl IsRetryable for AttemptOutcome {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Response(response) => response_is_retryable(response),
            Self::ConnectFailure(error) | Self::TransportFailure(error) => error.is_retryable(),
        }
    }
}

/// A received response is retryable only for a 5xx status carrying no
/// RPC error, or for an RPC error of exactly [`INTERNAL_ERROR`] on any
/// status. Every other RPC error code marks a non-transient application
/// failure, even under a 5xx wrapper.
fn response_is_retryable(response: &HttpResponse) -> bool {
    match JsonRpcResponse::peek_error_code(&response.body) {
        Some(code) => code == INTERNAL_ERROR,
        None => response.status.is_server_error(),
    }
}

/// Per-call retry state: the remaining-retries counter.
///
/// Created once per call cycle from the armed [`RetryPolicy`] and
/// consulted exactly once per completed attempt.
#[derive(Debug)]
pub struct RetryState {
    remaining: u32,
}

impl RetryState {
    /// Creates retry state with the given retry budget.
    #[must_use]
    pub const fn new(retries: u32) -> Self {
        Self { remaining: retries }
    }

    /// Returns the number of retries left in the budget.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Decides whether the attempt that produced `outcome` should be
    /// retried.
    ///
    /// Each eligible failure consumes one retry from the budget, so a
    /// policy with `retries = n` yields at most `n` extra attempts.
    pub fn decide(&mut self, outcome: &AttemptOutcome) -> RetryDecision {
        if !outcome.is_retryable() {
            return RetryDecision::Stop;
        }

        if self.remaining == 0 {
            return RetryDecision::Stop;
        }

        self.remaining -= 1;
        RetryDecision::Retry
    }
}

/// The verdict for a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Run another attempt after the backoff delay.
    Retry,
    /// Stop; the outcome is final.
    Stop,
}
