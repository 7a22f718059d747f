//! The original nested implementation of the workflow.
//!
//! Kept as the reference the railway version in [`crate::pipeline`] is
//! checked against: for every input both produce the same payload, the same
//! error and the same number of transport calls. New code should call
//! [`notify_purchase`](crate::pipeline::notify_purchase).

use tower::Service;

use crate::async_ext::RetryPolicy;
use crate::classify::{coupon_message, plain_message, COUPON_CODE, COUPON_THRESHOLD};
use crate::dispatch::Dispatcher;
use crate::types::{
    Acknowledgement, Customer, Delivery, NotificationPayload, PipelineError, Product,
    TransportError, ValidationError,
};

/// Nested-conditional version of [`notify_purchase`](crate::pipeline::notify_purchase).
///
/// # Errors
///
/// Same as the railway version.
pub async fn notify_nested<S, P>(
    customer: Option<Customer>,
    products: Option<Vec<Product>>,
    dispatcher: &Dispatcher<S, P>,
) -> Result<Delivery, PipelineError>
where
    S: Service<NotificationPayload, Response = Acknowledgement> + Clone,
    S::Error: Into<TransportError>,
    P: RetryPolicy,
{
    if let Some(customer) = customer {
        if let Some(products) = products {
            let mut total_price = 0.0;
            let mut total_discount = 0.0;

            for product in &products {
                total_price += product.price;
                if let Some(discount) = product.discount_amount {
                    total_discount += discount;
                }
            }

            let payload = if total_price > COUPON_THRESHOLD {
                NotificationPayload::Coupon {
                    message: coupon_message(&customer.first_name),
                    coupon: COUPON_CODE.to_owned(),
                }
            } else {
                NotificationPayload::Plain {
                    message: plain_message(&customer.first_name, total_discount),
                }
            };

            match dispatcher.dispatch(&payload).await {
                Ok(acknowledgement) => Ok(Delivery { payload, acknowledgement }),
                Err(error) => Err(PipelineError::Dispatch(error)),
            }
        } else {
            Err(ValidationError::MissingProducts.into())
        }
    } else {
        Err(ValidationError::MissingCustomer.into())
    }
}
