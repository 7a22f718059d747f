//! Reqwest-backed notification transport.
//!
//! This adapter owns transport details only: JSON encoding of the payload,
//! the POST itself, and mapping of HTTP and client failures into
//! [`TransportError`]. The response body is never read.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, Url};
use tower::Service;

use crate::config::{ConfigError, DispatchConfig};
use crate::types::{Acknowledgement, NotificationPayload, TransportError};

/// Transport that POSTs JSON payloads to one endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    user_agent: String,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Builds a transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint does not parse or the reqwest client
    /// cannot be constructed.
    pub fn new(config: &DispatchConfig) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint()?;
        let timeout = config.request_timeout();

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, endpoint, user_agent: config.user_agent.clone(), timeout })
    }

    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts one payload.
    ///
    /// # Errors
    ///
    /// Any non-2xx status, client failure, or encoding failure.
    pub async fn post(&self, payload: &NotificationPayload) -> Result<Acknowledgement, TransportError> {
        let body = serde_json::to_vec(payload).map_err(|e| TransportError::Encode(e.to_string()))?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(USER_AGENT, self.user_agent.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_client_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                retry_after: retry_after(response.headers()),
            });
        }
        Ok(Acknowledgement::new(status.as_u16()))
    }

    fn map_client_error(&self, error: reqwest::Error) -> TransportError {
        match self.timeout {
            Some(limit) if error.is_timeout() => TransportError::Timeout(limit),
            _ => TransportError::Network(error.to_string()),
        }
    }
}

/// `Retry-After` in its delta-seconds form; HTTP dates are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

impl Service<NotificationPayload> for HttpTransport {
    type Response = Acknowledgement;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Acknowledgement, TransportError>> + Send>>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, payload: NotificationPayload) -> Self::Future {
        let transport = self.clone();
        Box::pin(async move { transport.post(&payload).await })
    }
}
