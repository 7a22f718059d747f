//! Dispatcher: the pipeline's only side effect.
//!
//! A [`Dispatcher`] sends one [`NotificationPayload`] through a transport and
//! reports any failure as a [`DispatchError`]. Unless a retry policy is set
//! with [`Dispatcher::with_retry_policy`], it makes exactly one call per
//! dispatch.
//!
//! # Examples
//!
//! ```rust
//! use purchase_rail::dispatch::Dispatcher;
//! use purchase_rail::types::{Acknowledgement, NotificationPayload, TransportError};
//! use tower::service_fn;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let dispatcher = Dispatcher::new(service_fn(|_payload: NotificationPayload| async {
//!     Err::<Acknowledgement, _>(TransportError::network("network down"))
//! }));
//!
//! let payload = NotificationPayload::Plain { message: "hi".into() };
//! let error = dispatcher.dispatch(&payload).await.unwrap_err();
//! assert_eq!(error.message(), "Failed to send email: network down");
//! # }
//! ```

#[cfg(feature = "http")]
pub mod http;

use core::time::Duration;

use tower::{Layer, Service, ServiceExt};

use crate::async_ext::{retry_with_policy, NoRetry, RetryPolicy};
use crate::tower::{DispatchLayer, DispatchService};
use crate::types::{Acknowledgement, DispatchError, NotificationPayload, TransportError};

#[cfg(feature = "http")]
pub use http::HttpTransport;

/// Sends notifications through a transport service.
///
/// `S` is any `tower::Service<NotificationPayload>` answering with an
/// [`Acknowledgement`]; `P` decides whether transient failures are retried.
#[derive(Clone, Debug)]
pub struct Dispatcher<S, P = NoRetry> {
    service: DispatchService<S>,
    policy: P,
    timeout: Option<Duration>,
}

impl<S> Dispatcher<S> {
    /// Creates a dispatcher that makes one attempt per dispatch, with no timeout.
    pub fn new(transport: S) -> Self {
        Self { service: DispatchLayer::new().layer(transport), policy: NoRetry, timeout: None }
    }
}

impl<S, P> Dispatcher<S, P> {
    /// Bounds every attempt; an attempt that runs out of time fails with
    /// [`TransportError::Timeout`].
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retries transient failures according to `policy`.
    #[inline]
    pub fn with_retry_policy<Q: RetryPolicy>(self, policy: Q) -> Dispatcher<S, Q> {
        Dispatcher { service: self.service, policy, timeout: self.timeout }
    }

    /// Returns a reference to the transport.
    #[inline]
    pub fn transport(&self) -> &S {
        self.service.inner()
    }
}

impl<S, P> Dispatcher<S, P>
where
    S: Service<NotificationPayload, Response = Acknowledgement> + Clone,
    S::Error: Into<TransportError>,
    P: RetryPolicy,
{
    /// Sends `payload` and waits for the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchError`] of the last attempt when the transport
    /// rejects the request, fails to reach the endpoint, or times out.
    pub async fn dispatch(
        &self,
        payload: &NotificationPayload,
    ) -> Result<Acknowledgement, DispatchError> {
        tracing::debug!(coupon = payload.is_coupon(), "dispatching thank-you notification");

        let outcome = retry_with_policy(
            move || self.attempt(payload.clone()),
            self.policy.clone(),
            tokio::time::sleep,
        )
        .await;

        match &outcome.result {
            Ok(ack) => {
                tracing::debug!(status = ack.status, attempts = outcome.attempts, "notification sent")
            }
            Err(error) => {
                tracing::warn!(attempts = outcome.attempts, error = %error, "notification failed")
            }
        }
        outcome.result
    }

    async fn attempt(&self, payload: NotificationPayload) -> Result<Acknowledgement, DispatchError> {
        let call = self.service.clone().oneshot(payload);

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or_else(|_elapsed| Err(TransportError::Timeout(limit).into())),
            None => call.await,
        }
    }
}
