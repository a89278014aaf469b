//! Tests for retry policy and per-attempt decisions.

use super::retry::{IsRetryable, RetryDecision, RetryPolicy, RetryState};
use crate::transport::{AttemptOutcome, HttpResponse, TransportError};
use http::StatusCode;
use std::time::Duration;

fn received(status: StatusCode, body: &str) -> AttemptOutcome {
    AttemptOutcome::Response(HttpResponse::new(status, body.as_bytes().to_vec()))
}

fn connect_refused() -> AttemptOutcome {
    AttemptOutcome::from(TransportError::Connect("connection refused".into()))
}

mod retry_policy_defaults {
    use super::*;

    #[test]
    fn new_creates_policy_with_defaults() {
        let policy = RetryPolicy::new();

        assert_eq!(policy.retries, RetryPolicy::DEFAULT_RETRIES);
        assert_eq!(policy.delay, RetryPolicy::DEFAULT_DELAY);
    }

    #[test]
    fn default_trait_matches_new() {
        assert_eq!(RetryPolicy::new(), RetryPolicy::default());
    }

    #[test]
    fn default_retries_is_zero() {
        assert_eq!(RetryPolicy::DEFAULT_RETRIES, 0);
    }

    #[test]
    fn default_delay_is_500_milliseconds() {
        assert_eq!(RetryPolicy::DEFAULT_DELAY, Duration::from_millis(500));
    }
}

mod retry_policy_builder {
    use super::*;

    #[test]
    fn with_retries_sets_value() {
        let policy = RetryPolicy::new().with_retries(5);

        assert_eq!(policy.retries, 5);
    }

    #[test]
    fn with_delay_sets_value() {
        let policy = RetryPolicy::new().with_delay(Duration::from_millis(100));

        assert_eq!(policy.delay, Duration::from_millis(100));
    }

    #[test]
    fn builder_chains_correctly() {
        let policy = RetryPolicy::new()
            .with_retries(10)
            .with_delay(Duration::from_secs(1));

        assert_eq!(policy.retries, 10);
        assert_eq!(policy.delay, Duration::from_secs(1));
    }
}

mod delay_for_attempt {
    use super::*;

    #[test]
    fn backoff_grows_linearly() {
        let policy = RetryPolicy::new().with_delay(Duration::from_millis(500));

        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(500));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(1500));
    }

    #[test]
    fn zero_delay_stays_zero() {
        let policy = RetryPolicy::new().with_delay(Duration::ZERO);

        assert_eq!(policy.delay_for_attempt(10), Duration::ZERO);
    }
}

mod outcome_retryability {
    use super::*;

    #[test]
    fn server_error_status_is_retryable() {
        assert!(received(StatusCode::INTERNAL_SERVER_ERROR, "").is_retryable());
        assert!(received(StatusCode::BAD_GATEWAY, "").is_retryable());
        assert!(received(StatusCode::SERVICE_UNAVAILABLE, "").is_retryable());
    }

    #[test]
    fn client_error_status_is_not_retryable() {
        assert!(!received(StatusCode::BAD_REQUEST, "").is_retryable());
        assert!(!received(StatusCode::NOT_FOUND, "").is_retryable());
        assert!(!received(StatusCode::TOO_MANY_REQUESTS, "").is_retryable());
    }

    #[test]
    fn success_response_is_not_retryable() {
        assert!(!received(StatusCode::OK, r#"{"result": "foo"}"#).is_retryable());
    }

    #[test]
    fn internal_rpc_error_is_retryable_on_any_status() {
        let body = r#"{"error": {"code": -32603, "message": "oops"}}"#;

        assert!(received(StatusCode::OK, body).is_retryable());
        assert!(received(StatusCode::INTERNAL_SERVER_ERROR, body).is_retryable());
    }

    #[test]
    fn other_rpc_errors_are_not_retryable() {
        for code in [-32700, -32600, -32601, -32602, -32000, 42] {
            let body = format!(r#"{{"error": {{"code": {code}}}}}"#);

            assert!(
                !received(StatusCode::OK, &body).is_retryable(),
                "code {code} on 200 should not be retryable"
            );
        }
    }

    #[test]
    fn rpc_error_under_5xx_wrapper_is_still_not_retryable() {
        let body = r#"{"error": {"code": -32000, "message": "fatal"}}"#;

        assert!(!received(StatusCode::INTERNAL_SERVER_ERROR, body).is_retryable());
    }

    #[test]
    fn unparseable_5xx_body_is_retryable() {
        assert!(received(StatusCode::SERVICE_UNAVAILABLE, "<html>down</html>").is_retryable());
    }

    #[test]
    fn connect_failure_is_retryable() {
        assert!(connect_refused().is_retryable());
    }

    #[test]
    fn other_transport_failures_are_not_retryable() {
        assert!(!AttemptOutcome::from(TransportError::Timeout).is_retryable());
        assert!(!AttemptOutcome::from(TransportError::InvalidUrl("x".to_owned())).is_retryable());
        assert!(!AttemptOutcome::from(TransportError::Request("broken pipe".into())).is_retryable());
    }
}

mod retry_state {
    use super::*;

    #[test]
    fn non_retryable_outcome_stops_immediately() {
        let mut state = RetryState::new(10);

        let decision = state.decide(&received(StatusCode::NOT_FOUND, ""));

        assert_eq!(decision, RetryDecision::Stop);
        assert_eq!(state.remaining(), 10);
    }

    #[test]
    fn eligible_failure_consumes_one_retry() {
        let mut state = RetryState::new(2);

        assert_eq!(
            state.decide(&received(StatusCode::SERVICE_UNAVAILABLE, "")),
            RetryDecision::Retry
        );
        assert_eq!(state.remaining(), 1);
    }

    #[test]
    fn budget_bounds_extra_attempts() {
        let mut state = RetryState::new(2);
        let outcome = received(StatusCode::SERVICE_UNAVAILABLE, "");

        assert_eq!(state.decide(&outcome), RetryDecision::Retry);
        assert_eq!(state.decide(&outcome), RetryDecision::Retry);
        assert_eq!(state.decide(&outcome), RetryDecision::Stop);
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn zero_budget_never_retries() {
        let mut state = RetryState::new(0);

        assert_eq!(
            state.decide(&received(StatusCode::SERVICE_UNAVAILABLE, "")),
            RetryDecision::Stop
        );
    }

    #[test]
    fn non_retryable_outcome_does_not_consume_budget() {
        let mut state = RetryState::new(1);

        assert_eq!(
            state.decide(&received(StatusCode::NOT_FOUND, "")),
            RetryDecision::Stop
        );
        assert_eq!(
            state.decide(&received(StatusCode::SERVICE_UNAVAILABLE, "")),
            RetryDecision::Retry
        );
    }

    #[test]
    fn connect_failures_consume_budget_like_responses() {
        let mut state = RetryState::new(1);

        assert_eq!(state.decide(&connect_refused()), RetryDecision::Retry);
        assert_eq!(state.decide(&connect_refused()), RetryDecision::Stop);
    }
}
