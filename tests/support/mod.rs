//! Shared fixtures: sample inputs and an in-memory transport.

use std::collections::VecDeque;
use std::future::{ready, Ready};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use purchase_rail::types::{Acknowledgement, Customer, NotificationPayload, Product, TransportError};
use tower::Service;

pub fn john() -> Customer {
    Customer::new("c-1", "John", "Doe", 42, "john@example.com")
}

pub fn products(prices: &[f64]) -> Vec<Product> {
    prices.iter().enumerate().map(|(i, price)| Product::new(format!("item-{i}"), *price)).collect()
}

/// Transport that records every payload and answers from a script of
/// failures, acknowledging with 200 once the script runs out.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<NotificationPayload>>>,
    failures: Arc<Mutex<VecDeque<TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(failures: impl IntoIterator<Item = TransportError>) -> Self {
        let transport = Self::default();
        transport.failures.lock().unwrap().extend(failures);
        transport
    }

    pub fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Service<NotificationPayload> for RecordingTransport {
    type Response = Acknowledgement;
    type Error = TransportError;
    type Future = Ready<Result<Acknowledgement, TransportError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, payload: NotificationPayload) -> Self::Future {
        self.sent.lock().unwrap().push(payload);
        match self.failures.lock().unwrap().pop_front() {
            Some(error) => ready(Err(error)),
            None => ready(Ok(Acknowledgement::new(200))),
        }
    }
}
