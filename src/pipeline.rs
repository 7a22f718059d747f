//! The purchase notification workflow, end to end.
//!
//! Guard, aggregator and classifier are synchronous and pure; they are
//! exposed together as [`prepare_notification`]. [`notify_purchase`] adds the
//! dispatch, the only point where a run can suspend or fail from outside the
//! process.

use tower::Service;

use crate::aggregate::SaleTotals;
use crate::async_ext::RetryPolicy;
use crate::classify::build_payload;
use crate::dispatch::Dispatcher;
use crate::types::{
    Acknowledgement, Customer, Delivery, NotificationPayload, PipelineError, Product,
    TransportError, ValidationError,
};
use crate::validation::guard_inputs;

/// Validates the inputs and builds the payload, without touching the network.
///
/// # Examples
///
/// ```
/// use purchase_rail::pipeline::prepare_notification;
/// use purchase_rail::types::{Customer, Product};
///
/// let customer = Customer::new("c-1", "John", "Doe", 42, "john@example.com");
/// let payload = prepare_notification(Some(customer), Some(vec![Product::new("mug", 30.0)])).unwrap();
///
/// assert_eq!(payload.message(), "Thank you for your purchase, John! You saved $0!");
/// ```
pub fn prepare_notification(
    customer: Option<Customer>,
    products: Option<Vec<Product>>,
) -> Result<NotificationPayload, ValidationError> {
    guard_inputs(customer, products).map(|purchase| {
        let totals = SaleTotals::from_products(&purchase.products);
        build_payload(&purchase.customer, &totals)
    })
}

/// Runs the whole workflow: validate, aggregate, classify, dispatch.
///
/// A validation failure returns before the dispatcher is touched.
///
/// # Errors
///
/// [`PipelineError::Validation`] for a missing input,
/// [`PipelineError::Dispatch`] when the notification could not be sent.
#[tracing::instrument(name = "notify_purchase", skip_all)]
pub async fn notify_purchase<S, P>(
    customer: Option<Customer>,
    products: Option<Vec<Product>>,
    dispatcher: &Dispatcher<S, P>,
) -> Result<Delivery, PipelineError>
where
    S: Service<NotificationPayload, Response = Acknowledgement> + Clone,
    S::Error: Into<TransportError>,
    P: RetryPolicy,
{
    let payload = prepare_notification(customer, products)
        .inspect_err(|error| tracing::debug!(%error, "purchase rejected before dispatch"))?;
    tracing::debug!(coupon = payload.is_coupon(), "notification prepared");

    let acknowledgement = dispatcher.dispatch(&payload).await?;
    Ok(Delivery { payload, acknowledgement })
}
