//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting
//! instant sleepers in tests while using real delays in production.

use std::time::Duration;

/// Abstraction over delaying execution for testability.
///
/// Implementations pause the current task for a given duration. Tests
/// inject [`InstantSleeper`] to run retry sequences without waiting.
///
/// # Example
///
/// ```
/// use jrpc_client::time::{Sleeper, TokioSleeper};
/// use std::time::Duration;
///
/// # async fn example() {
/// let sleeper = TokioSleeper;
/// sleeper.sleep(Duration::from_millis(1)).await;
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Pauses the current task for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper using the tokio timer.
///
/// This is the default sleeper implementation that delegates to
/// [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately without waiting.
///
/// Used in tests to exercise retry loops without real delays.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_waits_for_duration() {
        let sleeper = TokioSleeper;
        let start = tokio::time::Instant::now();

        sleeper.sleep(Duration::from_secs(5)).await;

        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn instant_sleeper_returns_immediately() {
        let sleeper = InstantSleeper;
        let start = std::time::Instant::now();

        sleeper.sleep(Duration::from_secs(60)).await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn sleepers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokioSleeper>();
        assert_send_sync::<InstantSleeper>();
    }

    #[test]
    fn sleepers_are_default() {
        fn assert_default<T: Default>() {}
        assert_default::<TokioSleeper>();
        assert_default::<InstantSleeper>();
    }
}
