//! Outcome classifier: chooses which notification a purchase earns.
//!
//! Both matches in this module list every case explicitly and have no
//! wildcard arm. Adding an [`Outcome`] variant fails to compile until
//! [`build_payload`] handles it.

use crate::aggregate::SaleTotals;
use crate::types::{Customer, NotificationPayload};

/// Totals strictly above this amount earn a coupon.
pub const COUPON_THRESHOLD: f64 = 100.0;

/// Code sent with every coupon notification.
pub const COUPON_CODE: &str = "20OFF";

/// Business outcome of a purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Coupon,
    Plain,
}

impl Outcome {
    /// Classifies totals; exactly [`COUPON_THRESHOLD`] is still plain.
    ///
    /// # Examples
    ///
    /// ```
    /// use purchase_rail::aggregate::SaleTotals;
    /// use purchase_rail::classify::Outcome;
    /// use purchase_rail::types::Product;
    ///
    /// let at_threshold = SaleTotals::from_products(&[Product::new("a", 100.0)]);
    /// let above = SaleTotals::from_products(&[Product::new("a", 100.01)]);
    ///
    /// assert_eq!(Outcome::for_totals(&at_threshold), Outcome::Plain);
    /// assert_eq!(Outcome::for_totals(&above), Outcome::Coupon);
    /// ```
    pub fn for_totals(totals: &SaleTotals) -> Self {
        let should_get_coupon = totals.total_price() > COUPON_THRESHOLD;
        match should_get_coupon {
            true => Self::Coupon,
            false => Self::Plain,
        }
    }
}

/// Builds the notification for a validated customer and their totals.
pub fn build_payload(customer: &Customer, totals: &SaleTotals) -> NotificationPayload {
    match Outcome::for_totals(totals) {
        Outcome::Coupon => NotificationPayload::Coupon {
            message: coupon_message(&customer.first_name),
            coupon: COUPON_CODE.to_owned(),
        },
        Outcome::Plain => NotificationPayload::Plain {
            message: plain_message(&customer.first_name, totals.total_discount()),
        },
    }
}

/// Message of the coupon notification.
pub fn coupon_message(first_name: &str) -> String {
    format!(
        "Thank you for your purchase, {first_name}! For being a loyal customer, \
         we're giving you a 20% discount on your next purchase!"
    )
}

/// Message of the plain notification; the discount uses the shortest `f64`
/// rendering, so `10.0` prints as `10`.
pub fn plain_message(first_name: &str, total_discount: f64) -> String {
    format!("Thank you for your purchase, {first_name}! You saved ${total_discount}!")
}
