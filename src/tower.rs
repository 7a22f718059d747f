//! Tower integration for notification transports.
//!
//! A transport is any [`Service`] that accepts a
//! [`NotificationPayload`](crate::types::NotificationPayload). [`DispatchLayer`]
//! wraps it so that every failure, from `poll_ready` or from the call future,
//! comes out as a [`DispatchError`].
//!
//! # Example
//!
//! ```rust
//! use purchase_rail::tower::DispatchLayer;
//! use purchase_rail::types::{Acknowledgement, NotificationPayload, TransportError};
//! use tower::{service_fn, ServiceBuilder};
//!
//! let service = ServiceBuilder::new().layer(DispatchLayer::new()).service(service_fn(
//!     |_payload: NotificationPayload| async { Err::<Acknowledgement, _>(TransportError::network("network down")) },
//! ));
//! # let _ = service;
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::types::{DispatchError, TransportError};

/// A Tower [`Layer`] that maps transport errors into [`DispatchError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DispatchLayer {
    _private: (),
}

impl DispatchLayer {
    #[inline]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl<S> Layer<S> for DispatchLayer {
    type Service = DispatchService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        DispatchService::new(inner)
    }
}

/// A Tower [`Service`] whose error type is [`DispatchError`].
///
/// Created by [`DispatchLayer`] or [`ServiceDispatchExt::into_dispatch_service`].
#[derive(Clone, Debug)]
pub struct DispatchService<S> {
    inner: S,
}

impl<S> DispatchService<S> {
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the wrapped transport.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, Request> Service<Request> for DispatchService<S>
where
    S: Service<Request>,
    S::Error: Into<TransportError>,
{
    type Response = S::Response;
    type Error = DispatchError;
    type Future = DispatchFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|e| DispatchError::new(e.into()))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        DispatchFuture { inner: self.inner.call(request) }
    }
}

pin_project! {
    /// Future returned by [`DispatchService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct DispatchFuture<F> {
        #[pin]
        inner: F,
    }
}

impl<F, T, E> Future for DispatchFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<TransportError>,
{
    type Output = Result<T, DispatchError>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(|res| res.map_err(|e| DispatchError::new(e.into())))
    }
}

impl<F, T, E> FusedFuture for DispatchFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Into<TransportError>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

/// Extension trait for wrapping a transport directly.
pub trait ServiceDispatchExt<Request>: Service<Request> + Sized {
    /// Wraps this service so its errors become [`DispatchError`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use purchase_rail::tower::ServiceDispatchExt;
    ///
    /// let wrapped = transport.into_dispatch_service();
    /// ```
    fn into_dispatch_service(self) -> DispatchService<Self> {
        DispatchService::new(self)
    }
}

impl<S, Request> ServiceDispatchExt<Request> for S where S: Service<Request> {}
