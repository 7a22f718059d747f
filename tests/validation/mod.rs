use purchase_rail::types::{Product, ValidationError};
use purchase_rail::validation::{audit_inputs, guard_inputs, Validation};

use crate::support::{john, products};

#[test]
fn absent_customer_is_reported_whatever_the_products() {
    for products in [None, Some(vec![]), Some(products(&[10.0, 20.0]))] {
        assert_eq!(guard_inputs(None, products).unwrap_err(), ValidationError::MissingCustomer);
    }
}

#[test]
fn absent_products_are_reported_once_the_customer_is_present() {
    assert_eq!(guard_inputs(Some(john()), None).unwrap_err(), ValidationError::MissingProducts);
}

#[test]
fn present_inputs_pass_through_unchanged() {
    let items = vec![Product::new("mug", 12.0).with_discount(2.0)];
    let purchase = guard_inputs(Some(john()), Some(items.clone())).unwrap();

    assert_eq!(purchase.customer, john());
    assert_eq!(purchase.products, items);
}

#[test]
fn an_empty_product_list_counts_as_present() {
    assert!(guard_inputs(Some(john()), Some(vec![])).is_ok());
}

#[test]
fn audit_accumulates_both_failures() {
    let audit = audit_inputs(None, None);

    assert!(audit.is_invalid());
    let errors = audit.into_errors().unwrap();
    assert_eq!(errors.as_slice(), &[ValidationError::MissingCustomer, ValidationError::MissingProducts]);
}

#[test]
fn audit_of_valid_inputs_yields_the_purchase() {
    let purchase = audit_inputs(Some(john()), Some(products(&[5.0]))).into_value().unwrap();
    assert_eq!(purchase.products.len(), 1);
}

#[test]
fn into_first_error_matches_fail_fast_order() {
    let audit = audit_inputs(None, None);
    assert_eq!(audit.into_first_error().unwrap().unwrap_err(), ValidationError::MissingCustomer);
}

#[test]
fn zip_keeps_left_errors_before_right_errors() {
    let left: Validation<&str, i32> = Validation::invalid("left");
    let right = Validation::<&str, i32>::invalid("right-1").zip(Validation::<&str, i32>::invalid("right-2"));

    let errors: Vec<_> = left.zip(right).iter_errors().copied().collect();
    assert_eq!(errors, vec!["left", "right-1", "right-2"]);
}

#[test]
fn valid_audit_has_no_errors_to_iterate() {
    let audit = audit_inputs(Some(john()), Some(vec![]));
    assert_eq!(audit.iter_errors().count(), 0);
}

#[test]
fn validation_serializes_with_its_variant_name() {
    let audit = audit_inputs(Some(john()), None).map(|_| ());
    let json = serde_json::to_value(&audit).unwrap();

    assert_eq!(json, serde_json::json!({ "Invalid": [{ "message": "Products are missing" }] }));
}
