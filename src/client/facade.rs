//! Client facade: configuration, per-call overrides, and the
//! request/retry loop.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::protocol::JsonRpcRequest;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{
    AttemptOutcome, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};

use super::classify::{Classified, classify};
use super::error::Error;
use super::retry::{RetryDecision, RetryPolicy, RetryState};

/// Fixed request id: calls block one at a time on a client instance,
/// so responses need no correlation.
const CALL_ID: u64 = 1;

/// Client-wide configuration, fixed for the client's lifetime.
///
/// Per-call overrides armed through [`Client::retry`] start from these
/// defaults and never outlive the call they were armed for.
///
/// # Defaults
///
/// - `retry`: 0 retries, 500 millisecond base delay
/// - `timeout`: 1 second
///
/// # Example
///
/// ```
/// use jrpc_client::client::{ClientConfig, RetryPolicy};
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_retry(RetryPolicy::new().with_retries(2))
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.retry.retries, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Default retry policy for every call.
    pub retry: RetryPolicy,

    /// Request timeout applied when the client constructs its own
    /// [`ReqwestTransport`]. Caller-supplied transports manage their
    /// own timeouts.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default request timeout (1 second).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    /// Creates a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            retry: RetryPolicy::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the default retry policy.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A JSON-RPC 2.0 client over HTTP with retry support.
///
/// Calls are issued one at a time: [`call`](Self::call) and
/// [`notify`](Self::notify) take `&mut self` and block the caller until
/// the retry sequence resolves, so a per-call override armed with
/// [`retry`](Self::retry) cannot race a call on the same instance.
///
/// # Type Parameters
///
/// - `T`: The HTTP transport implementation
/// - `S`: The sleeper implementation for retry delays (defaults to
///   [`TokioSleeper`])
///
/// # Example
///
/// ```no_run
/// use jrpc_client::client::Client;
/// use serde_json::json;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = Client::new(Url::parse("https://api.example.com/rpc")?);
///
/// let result = client.retry(3).call("sum", Some(json!([1, 2]))).await?;
/// println!("{result}");
///
/// client.notify("log", Some(json!({"level": "info"}))).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T = ReqwestTransport, S = TokioSleeper> {
    endpoint: url::Url,
    config: ClientConfig,
    next_call: Option<RetryPolicy>,
    transport: T,
    sleeper: S,
}

impl Client {
    /// Creates a client with default configuration and the production
    /// transport.
    #[must_use]
    pub fn new(endpoint: url::Url) -> Self {
        Self::with_config(endpoint, ClientConfig::new())
    }

    /// Creates a client with the given configuration and the production
    /// transport.
    #[must_use]
    pub fn with_config(endpoint: url::Url, config: ClientConfig) -> Self {
        let transport = ReqwestTransport::new().with_timeout(config.timeout);
        Self::with_transport(endpoint, config, transport)
    }
}

impl<T> Client<T, TokioSleeper> {
    /// Creates a client with a caller-supplied transport.
    ///
    /// This is the injection point for scriptable mock transports in
    /// tests, and for custom `reqwest` configuration in production.
    #[must_use]
    pub const fn with_transport(endpoint: url::Url, config: ClientConfig, transport: T) -> Self {
        Self {
            endpoint,
            config,
            next_call: None,
            transport,
            sleeper: TokioSleeper,
        }
    }
}

impl<T, S> Client<T, S> {
    /// Sets a custom sleeper for retry delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Client<T, S2> {
        Client {
            endpoint: self.endpoint,
            config: self.config,
            next_call: self.next_call,
            transport: self.transport,
            sleeper,
        }
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Returns the client-wide configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Arms a retry override for the next call only.
    ///
    /// Applies to whichever of [`call`](Self::call) /
    /// [`notify`](Self::notify) runs next on this client and is
    /// consumed by it, success or failure. The base delay stays at the
    /// configured default. Returns `&mut Self` so call sites can chain:
    /// `client.retry(3).call(...)`.
    pub fn retry(&mut self, times: u32) -> &mut Self {
        let delay = self.config.retry.delay;
        self.retry_with_delay(times, delay)
    }

    /// Arms a retry override for the next call with an explicit base
    /// delay.
    pub fn retry_with_delay(&mut self, times: u32, delay: Duration) -> &mut Self {
        self.next_call = Some(RetryPolicy::new().with_retries(times).with_delay(delay));
        self
    }

    /// Arms a single retry for the next call.
    pub fn retry_once(&mut self) -> &mut Self {
        self.retry(1)
    }

    /// Arms a single retry for the next call with an explicit delay.
    pub fn retry_once_after(&mut self, delay: Duration) -> &mut Self {
        self.retry_with_delay(1, delay)
    }

    /// Takes the armed per-call policy, falling back to the configured
    /// defaults.
    ///
    /// Taking (rather than reading) the policy is what guarantees an
    /// override never outlives its call: the next call starts from
    /// defaults unless `retry` is invoked again.
    fn take_policy(&mut self) -> RetryPolicy {
        self.next_call
            .take()
            .unwrap_or_else(|| self.config.retry.clone())
    }
}

impl<T: HttpTransport, S: Sleeper> Client<T, S> {
    /// Calls an RPC method and returns the unwrapped `result` value.
    ///
    /// The request carries `id = 1` and blocks until the retry sequence
    /// resolves or exhausts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rpc`] when the server answers with an error
    /// envelope, [`Error::Transport`] when no response was received,
    /// [`Error::Status`] for a non-success status without an RPC
    /// envelope, and [`Error::MalformedBody`] when the body is not
    /// valid JSON.
    pub async fn call(&mut self, method: &str, params: Option<Value>) -> Result<Value, Error> {
        let policy = self.take_policy();
        let envelope = JsonRpcRequest::call(method, CALL_ID, params);
        let response = self.execute(&envelope, &policy).await?;

        match classify(response) {
            Classified::Success(result) => Ok(result),
            Classified::RpcFailure(error) => Err(error.into()),
            Classified::HttpFailure { status, body } => Err(Error::Status { status, body }),
            Classified::MalformedBody {
                status,
                reason,
                body,
            } => Err(Error::MalformedBody {
                status,
                reason,
                body,
            }),
        }
    }

    /// Calls an RPC method and deserializes the `result` value into
    /// `R`.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call), plus [`Error::Decode`] when the
    /// result value does not match the requested shape.
    pub async fn call_as<R>(&mut self, method: &str, params: Option<Value>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let result = self.call(method, params).await?;
        serde_json::from_value(result).map_err(Error::Decode)
    }

    /// Sends a notification: a request without an `id`, expecting no
    /// correlated response.
    ///
    /// The response body is not inspected; an application error in it
    /// never surfaces. Flows through the same retry machinery as
    /// [`call`](Self::call).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when no response was received and
    /// [`Error::Status`] for a non-success status.
    pub async fn notify(&mut self, method: &str, params: Option<Value>) -> Result<(), Error> {
        let policy = self.take_policy();
        let envelope = JsonRpcRequest::notification(method, params);
        let response = self.execute(&envelope, &policy).await?;

        if response.is_success() {
            return Ok(());
        }

        Err(Error::Status {
            status: response.status,
            body: response.body_text(),
        })
    }

    /// Runs the attempt loop for one call cycle.
    ///
    /// Builds the HTTP request once, then alternates between the
    /// transport and the retry engine until a decision to stop. A
    /// received response is returned whole for classification; a
    /// transport failure that exhausted its retries propagates as-is.
    async fn execute(
        &self,
        envelope: &JsonRpcRequest,
        policy: &RetryPolicy,
    ) -> Result<HttpResponse, Error> {
        let body = serde_json::to_vec(envelope).map_err(Error::Encode)?;
        let request = HttpRequest::post(self.endpoint.clone())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(body);

        let mut state = RetryState::new(policy.retries);
        let mut attempt: u32 = 1;

        loop {
            let outcome = match self.transport.execute(request.clone()).await {
                Ok(response) => AttemptOutcome::Response(response),
                Err(error) => AttemptOutcome::from(error),
            };

            match state.decide(&outcome) {
                RetryDecision::Stop => {
                    return match outcome {
                        AttemptOutcome::Response(response) => Ok(response),
                        AttemptOutcome::ConnectFailure(error)
                        | AttemptOutcome::TransportFailure(error) => {
                            tracing::warn!(
                                "Request for {} failed after {attempt} attempt(s): {error}",
                                envelope.method
                            );
                            Err(error.into())
                        }
                    };
                }
                RetryDecision::Retry => {
                    let delay = policy.delay_for_attempt(attempt);
                    tracing::debug!(
                        "Attempt {attempt} for {} failed, retrying in {delay:?}",
                        envelope.method
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
