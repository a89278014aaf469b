//! Tests for `ReqwestTransport`.
//!
//! Note: These tests focus on unit testing the transport construction and
//! configuration. Full request/response behavior against live servers is
//! exercised via the scriptable mock transport in the client tests.

use super::{HttpRequest, HttpTransport, ReqwestTransport, TransportError};
use std::time::Duration;

mod reqwest_transport {
    use super::*;

    #[test]
    fn new_creates_transport() {
        let transport = ReqwestTransport::new();

        let _ = format!("{transport:?}");
    }

    #[test]
    fn default_creates_same_as_new() {
        let transport1 = ReqwestTransport::new();
        let transport2 = ReqwestTransport::default();

        let _ = format!("{transport1:?}");
        let _ = format!("{transport2:?}");
    }

    #[test]
    fn with_timeout_is_chainable() {
        let transport = ReqwestTransport::new().with_timeout(Duration::from_secs(1));

        let _ = format!("{transport:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let transport = ReqwestTransport::from_client(custom);

        let _ = format!("{transport:?}");
    }

    #[test]
    fn clone_creates_independent_transport() {
        let transport1 = ReqwestTransport::new();
        let transport2 = transport1.clone();

        let _ = format!("{transport1:?}");
        let _ = format!("{transport2:?}");
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let transport = ReqwestTransport::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();
        let req = HttpRequest::post(url);

        let result = transport.execute(req).await;

        // DNS resolution failure typically causes a connect error.
        // However, in environments with a proxy, the proxy may return an
        // HTTP error response (e.g., 502 Bad Gateway) instead.
        match result {
            Err(TransportError::Connect(_)) => {} // Expected in direct connection
            Ok(resp) if !resp.is_success() => {}  // Proxy returned error response
            other => panic!("Expected connect error or proxy error response, got {other:?}"),
        }
    }
}
