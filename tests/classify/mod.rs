use purchase_rail::aggregate::SaleTotals;
use purchase_rail::classify::{build_payload, Outcome, COUPON_CODE};
use purchase_rail::types::{NotificationPayload, Product};

use crate::support::{john, products};

fn totals(prices: &[f64]) -> SaleTotals {
    SaleTotals::from_products(&products(prices))
}

#[test]
fn exactly_one_hundred_is_plain() {
    assert_eq!(Outcome::for_totals(&totals(&[100.0])), Outcome::Plain);
    assert!(!build_payload(&john(), &totals(&[60.0, 40.0])).is_coupon());
}

#[test]
fn just_above_one_hundred_earns_a_coupon() {
    assert_eq!(Outcome::for_totals(&totals(&[100.01])), Outcome::Coupon);
}

#[test]
fn coupon_payload_carries_the_fixed_code_and_loyalty_message() {
    let payload = build_payload(&john(), &totals(&[60.0, 50.0]));

    assert_eq!(
        payload,
        NotificationPayload::Coupon {
            message: "Thank you for your purchase, John! For being a loyal customer, we're giving \
                      you a 20% discount on your next purchase!"
                .into(),
            coupon: "20OFF".into(),
        }
    );
    assert_eq!(payload.coupon(), Some(COUPON_CODE));
}

#[test]
fn plain_payload_reports_the_saved_amount() {
    let items = [Product::new("mug", 30.0).with_discount(5.0), Product::new("pen", 10.0).with_discount(5.0)];
    let payload = build_payload(&john(), &SaleTotals::from_products(&items));

    assert_eq!(payload.message(), "Thank you for your purchase, John! You saved $10!");
}

#[test]
fn fractional_savings_keep_their_decimals() {
    let items = [Product::new("mug", 30.0).with_discount(2.5)];
    let payload = build_payload(&john(), &SaleTotals::from_products(&items));

    assert_eq!(payload.message(), "Thank you for your purchase, John! You saved $2.5!");
}

#[test]
fn plain_payload_has_no_coupon_field_on_the_wire() {
    let payload = build_payload(&john(), &totals(&[30.0]));
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json, serde_json::json!({ "message": "Thank you for your purchase, John! You saved $0!" }));
    assert!(json.get("coupon").is_none());
}

#[test]
fn coupon_payload_has_both_fields_on_the_wire() {
    let json = serde_json::to_value(build_payload(&john(), &totals(&[150.0]))).unwrap();

    assert_eq!(json["coupon"], "20OFF");
    assert!(json["message"].as_str().unwrap().contains("John"));
}

#[test]
fn classification_is_pure() {
    let t = totals(&[99.0, 2.0]);
    assert_eq!(build_payload(&john(), &t), build_payload(&john(), &t));
}
