//! Production HTTP transport implementation using reqwest.

use std::time::Duration;

use super::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Production HTTP transport using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements the
/// [`HttpTransport`] trait. It inherits reqwest's default configuration
/// including connection pooling; an optional per-request timeout can be
/// layered on top.
///
/// # Example
///
/// ```no_run
/// use jrpc_client::transport::{ReqwestTransport, HttpTransport, HttpRequest};
/// use std::time::Duration;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new().with_timeout(Duration::from_secs(1));
/// let url = Url::parse("https://api.example.com/rpc")?;
/// let request = HttpRequest::post(url).with_body(b"{}".to_vec());
/// let response = transport.execute(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Creates a new transport with default configuration and no
    /// request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Sets a timeout applied to every request sent through this
    /// transport.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (proxies, TLS, etc.).
    /// Any timeout configured on the client itself still applies.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self {
            inner: client,
            timeout: None,
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_error)?.to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

/// Maps a reqwest error into the transport error taxonomy.
///
/// Connect-phase failures must be distinguished from everything else:
/// the retry engine treats only those as transient.
fn map_error(error: reqwest::Error) -> TransportError {
    if error.is_connect() {
        TransportError::Connect(Box::new(error))
    } else if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_builder() {
        TransportError::InvalidUrl(error.to_string())
    } else {
        TransportError::Request(Box::new(error))
    }
}
