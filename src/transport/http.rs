//! HTTP request/response types, transport trait, and attempt outcomes.

use super::TransportError;

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpTransport`] implementation. It uses standard `http` crate types
/// for method and headers, keeping the transport boundary decoupled from
/// any specific HTTP library.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Target URL.
    pub url: url::Url,
    /// HTTP headers to send.
    pub headers: http::HeaderMap,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a POST request to the given URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self {
            method: http::Method::POST,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response received from a server.
///
/// Contains the status code and the fully buffered body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: http::StatusCode,
    /// Response body (fully buffered).
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a string, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP transport implementation, enabling:
/// - Dependency injection for testing with scriptable mock transports
/// - Swapping HTTP libraries without changing calling code
///
/// # Example
///
/// ```ignore
/// use jrpc_client::transport::{HttpTransport, HttpRequest, HttpResponse, TransportError};
///
/// struct MockTransport {
///     response: HttpResponse,
/// }
///
/// impl HttpTransport for MockTransport {
///     async fn execute(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpTransport: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// Implementations return `Ok` for any received response regardless
    /// of status code; `Err` is reserved for failures where no response
    /// arrived at all.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - Network connection fails ([`TransportError::Connect`])
    /// - Request times out ([`TransportError::Timeout`])
    /// - URL is invalid ([`TransportError::InvalidUrl`])
    /// - The request fails for any other reason below the envelope
    ///   ([`TransportError::Request`])
    fn execute(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Outcome of a single request attempt, as seen by the retry engine.
///
/// Classifying the transport result into this type decouples retry
/// decisions from the error hierarchy of any specific HTTP library.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// A response was received, of any status.
    Response(HttpResponse),
    /// No response: the connection could not be established.
    ConnectFailure(TransportError),
    /// No response: the request failed for any other reason.
    TransportFailure(TransportError),
}

impl From<TransportError> for AttemptOutcome {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Connect(_) => Self::ConnectFailure(error),
            TransportError::Timeout | TransportError::InvalidUrl(_) | TransportError::Request(_) => {
                Self::TransportFailure(error)
            }
        }
    }
}
