use std::time::Duration;

use purchase_rail::async_ext::{ExponentialBackoff, FixedDelay};
use purchase_rail::dispatch::Dispatcher;
use purchase_rail::types::{Acknowledgement, NotificationPayload, TransportError};
use tower::service_fn;

use crate::support::RecordingTransport;

fn payload() -> NotificationPayload {
    NotificationPayload::Plain { message: "Thank you for your purchase, John! You saved $0!".into() }
}

#[tokio::test]
async fn success_makes_exactly_one_call() {
    let transport = RecordingTransport::new();
    let dispatcher = Dispatcher::new(transport.clone());

    let ack = dispatcher.dispatch(&payload()).await.unwrap();

    assert_eq!(ack, Acknowledgement::new(200));
    assert_eq!(transport.sent(), vec![payload()]);
}

#[tokio::test]
async fn network_failure_becomes_a_dispatch_error() {
    let transport = RecordingTransport::failing_with([TransportError::network("network down")]);
    let dispatcher = Dispatcher::new(transport.clone());

    let error = dispatcher.dispatch(&payload()).await.unwrap_err();

    assert_eq!(error.message(), "Failed to send email: network down");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn non_success_status_uses_the_same_error_shape() {
    let dispatcher =
        Dispatcher::new(RecordingTransport::failing_with([TransportError::status(500)]));

    let error = dispatcher.dispatch(&payload()).await.unwrap_err();

    assert_eq!(error.message(), "Failed to send email: endpoint responded with status 500");
}

#[tokio::test]
async fn default_dispatcher_does_not_retry_transient_failures() {
    let transport = RecordingTransport::failing_with([TransportError::network("reset")]);
    let dispatcher = Dispatcher::new(transport.clone());

    assert!(dispatcher.dispatch(&payload()).await.is_err());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn retry_policy_repeats_transient_failures_until_success() {
    let transport = RecordingTransport::failing_with([
        TransportError::network("reset"),
        TransportError::status(503),
    ]);
    let dispatcher = Dispatcher::new(transport.clone())
        .with_retry_policy(FixedDelay::new(Duration::from_millis(1), 3));

    let ack = dispatcher.dispatch(&payload()).await.unwrap();

    assert_eq!(ack.status, 200);
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn retry_policy_gives_up_after_its_attempts() {
    let transport = RecordingTransport::failing_with(
        std::iter::repeat(TransportError::network("down")).take(5),
    );
    let dispatcher = Dispatcher::new(transport.clone()).with_retry_policy(
        ExponentialBackoff::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_max_attempts(2),
    );

    let error = dispatcher.dispatch(&payload()).await.unwrap_err();

    assert_eq!(error.message(), "Failed to send email: down");
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn permanent_failures_are_never_retried() {
    let transport = RecordingTransport::failing_with([TransportError::status(400)]);
    let dispatcher = Dispatcher::new(transport.clone())
        .with_retry_policy(FixedDelay::new(Duration::from_millis(1), 5));

    assert!(dispatcher.dispatch(&payload()).await.is_err());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn slow_transport_times_out() {
    let dispatcher = Dispatcher::new(service_fn(|_payload: NotificationPayload| {
        std::future::pending::<Result<Acknowledgement, TransportError>>()
    }))
    .with_timeout(Duration::from_millis(20));

    let error = dispatcher.dispatch(&payload()).await.unwrap_err();

    assert_eq!(error.transport_error(), &TransportError::Timeout(Duration::from_millis(20)));
    assert!(error.message().starts_with("Failed to send email: request timed out"));
}

#[tokio::test]
async fn one_dispatcher_serves_concurrent_dispatches() {
    let transport = RecordingTransport::new();
    let dispatcher = Dispatcher::new(transport.clone());

    let (first, second) = (payload(), payload());
    let (a, b) = tokio::join!(dispatcher.dispatch(&first), dispatcher.dispatch(&second));

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(transport.calls(), 2);
}
