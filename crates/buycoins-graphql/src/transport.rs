//! GraphQL transport abstraction
//!
//! The client never talks HTTP directly: it hands a [`GraphQlRequest`] and
//! the `Authorization` value to a [`Transport`]. This enables unit testing of
//! the request pipeline without real network calls.
//!
//! # Example
//!
//! ```no_run
//! use buycoins_graphql::documents::GET_PRICES;
//! use buycoins_graphql::transport::{HttpTransport, Transport, TransportError};
//! use buycoins_graphql::types::GraphQlRequest;
//!
//! async fn example() -> Result<(), TransportError> {
//!     let transport = HttpTransport::new("https://backend.buycoins.tech/api")?;
//!     let request = GraphQlRequest::new(&GET_PRICES, Default::default());
//!     let data = transport.execute(&request, "Basic cHViOnNlYw==").await?;
//!     println!("{}", data);
//!     Ok(())
//! }
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::types::{GraphQlRequest, GraphQlResponse};

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network or protocol failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response carried a GraphQL `errors` payload
    #[error("GraphQL error: {}", .messages.join(", "))]
    GraphQl { messages: Vec<String> },

    /// The authorization value is not a valid header
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Response could not be decoded
    #[error("parse error: {0}")]
    Parse(String),
}

impl TransportError {
    /// Check if retrying the same request could succeed
    ///
    /// The SDK never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::GraphQl { .. } | Self::InvalidHeader(_) | Self::Parse(_) => false,
        }
    }
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Trait for GraphQL transport abstraction
///
/// Implementations execute exactly one request per call and return the
/// response `data` unmodified.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a document with its variables
    async fn execute(&self, request: &GraphQlRequest, authorization: &str) -> TransportResult<Value>;

    /// Get the endpoint URL
    fn endpoint(&self) -> &str;
}

/// HTTP transport posting JSON to the GraphQL endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    /// Create a transport with the default timeout
    pub fn new(url: impl Into<String>) -> TransportResult<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS), None)
    }

    /// Create a transport with a custom timeout and user agent
    pub fn with_timeout(
        url: impl Into<String>,
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(concat!("buycoins-graphql/", env!("CARGO_PKG_VERSION"))))
            .build()?;

        Ok(Self::with_client(client, url))
    }

    /// Create a transport around an existing reqwest client
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request, authorization), fields(url = %self.url, operation = request.operation()))]
    async fn execute(&self, request: &GraphQlRequest, authorization: &str) -> TransportResult<Value> {
        let mut auth_value = HeaderValue::from_str(authorization)
            .map_err(|e| TransportError::InvalidHeader(e.to_string()))?;
        auth_value.set_sensitive(true);

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, auth_value)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "GraphQL endpoint returned error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let body: GraphQlResponse =
            serde_json::from_str(&text).map_err(|e| TransportError::Parse(e.to_string()))?;
        body.into_result()
            .map_err(|messages| TransportError::GraphQl { messages })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// Request captured by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Operation name of the executed document
    pub operation: &'static str,
    /// Document text
    pub query: &'static str,
    /// Variables as sent
    pub variables: Value,
    /// Authorization value as sent
    pub authorization: String,
}

/// Mock transport for testing
///
/// Returns queued responses in order and records every executed request.
/// When the queue is empty it answers with an empty JSON object.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResult<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response to be returned by the next execute()
    pub fn push_response(&self, data: Value) {
        self.responses.lock().push_back(Ok(data));
    }

    /// Simulate a transport failure on the next execute()
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests executed so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests executed so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &GraphQlRequest, authorization: &str) -> TransportResult<Value> {
        self.requests.lock().push(RecordedRequest {
            operation: request.operation(),
            query: request.query,
            variables: request.variables.clone(),
            authorization: authorization.to_string(),
        });

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }

    fn endpoint(&self) -> &str {
        "mock://buycoins"
    }
}
