use std::error::Error;

use purchase_rail::traits::TransientError;
use purchase_rail::types::{
    Customer, DispatchError, NotificationPayload, PipelineError, TransportError, ValidationError,
};

#[test]
fn validation_errors_use_their_fixed_messages() {
    assert_eq!(ValidationError::MissingCustomer.to_string(), "User is missing");
    assert_eq!(ValidationError::MissingProducts.to_string(), "Products are missing");
}

#[test]
fn dispatch_error_prefixes_the_transport_detail() {
    let error = DispatchError::new(TransportError::network("network down"));

    assert_eq!(error.message(), "Failed to send email: network down");
    assert_eq!(error.transport_error(), &TransportError::network("network down"));
    assert_eq!(error.source().unwrap().to_string(), "network down");
}

#[test]
fn every_error_kind_serializes_as_a_message_record() {
    let records = [
        serde_json::to_value(ValidationError::MissingCustomer).unwrap(),
        serde_json::to_value(DispatchError::from(TransportError::status(502))).unwrap(),
        serde_json::to_value(PipelineError::from(ValidationError::MissingProducts)).unwrap(),
    ];

    assert_eq!(records[0], serde_json::json!({ "message": "User is missing" }));
    assert_eq!(
        records[1],
        serde_json::json!({ "message": "Failed to send email: endpoint responded with status 502" })
    );
    assert_eq!(records[2], serde_json::json!({ "message": "Products are missing" }));
}

#[test]
fn pipeline_error_wraps_both_stages() {
    let validation: PipelineError = ValidationError::MissingCustomer.into();
    let dispatch: PipelineError = DispatchError::from(TransportError::network("reset")).into();

    assert!(validation.is_validation());
    assert!(!dispatch.is_validation());
    assert_eq!(dispatch.message(), "Failed to send email: reset");
    assert_eq!(validation.source().unwrap().to_string(), "User is missing");
}

#[test]
fn transport_failures_are_classified_for_retry() {
    assert!(TransportError::network("refused").is_transient());
    assert!(TransportError::Timeout(std::time::Duration::from_secs(1)).is_transient());
    assert!(TransportError::status(429).is_transient());
    assert!(TransportError::status(503).is_transient());
    assert!(TransportError::status(404).is_permanent());
    assert!(TransportError::Encode("bad float".into()).is_permanent());
    assert!(PipelineError::from(ValidationError::MissingCustomer).is_permanent());
}

#[test]
fn retry_after_hint_comes_from_the_status() {
    let limited = TransportError::Status {
        status: 429,
        retry_after: Some(std::time::Duration::from_secs(3)),
    };
    let wrapped = PipelineError::from(DispatchError::new(limited));

    assert_eq!(wrapped.retry_after_hint(), Some(std::time::Duration::from_secs(3)));
}

#[test]
fn customer_reads_camel_case_fields() {
    let customer: Customer = serde_json::from_str(
        r#"{"id":"c-9","firstName":"Ada","lastName":"King","age":36,"email":"ada@example.com"}"#,
    )
    .unwrap();

    assert_eq!(customer, Customer::new("c-9", "Ada", "King", 36, "ada@example.com"));
}

#[test]
fn payloads_deserialize_into_the_matching_variant() {
    let coupon: NotificationPayload =
        serde_json::from_str(r#"{"message":"m","coupon":"20OFF"}"#).unwrap();
    let plain: NotificationPayload = serde_json::from_str(r#"{"message":"m"}"#).unwrap();

    assert!(coupon.is_coupon());
    assert!(!plain.is_coupon());
}
