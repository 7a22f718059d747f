//! Input guard: the first stage of the pipeline.

use serde::Serialize;

use crate::types::{Customer, Product, ValidationError};
use crate::validation::Validation;

/// Both pipeline inputs, now known to be present.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Purchase {
    pub customer: Customer,
    pub products: Vec<Product>,
}

/// Checks that both inputs are present.
///
/// The customer is checked first. When both are absent only
/// [`ValidationError::MissingCustomer`] is reported; use [`audit_inputs`] to
/// see both failures at once.
///
/// # Examples
///
/// ```
/// use purchase_rail::types::{Customer, ValidationError};
/// use purchase_rail::validation::guard_inputs;
///
/// let customer = Customer::new("c-1", "John", "Doe", 42, "john@example.com");
/// assert_eq!(guard_inputs(Some(customer), None).unwrap_err(), ValidationError::MissingProducts);
///
/// let empty = guard_inputs(Some(Customer::new("c-2", "Ann", "Lee", 30, "a@b.c")), Some(vec![]));
/// assert!(empty.unwrap().products.is_empty());
/// ```
pub fn guard_inputs(
    customer: Option<Customer>,
    products: Option<Vec<Product>>,
) -> Result<Purchase, ValidationError> {
    let customer = customer.ok_or(ValidationError::MissingCustomer)?;
    let products = products.ok_or(ValidationError::MissingProducts)?;
    Ok(Purchase { customer, products })
}

/// Runs both presence checks and accumulates every failure.
///
/// Errors are reported in guard order: customer first, then products.
/// [`Validation::into_first_error`] turns an audit into the same outcome as
/// [`guard_inputs`].
pub fn audit_inputs(
    customer: Option<Customer>,
    products: Option<Vec<Product>>,
) -> Validation<ValidationError, Purchase> {
    Validation::from_option(customer, || ValidationError::MissingCustomer)
        .zip(Validation::from_option(products, || ValidationError::MissingProducts))
        .map(|(customer, products)| Purchase { customer, products })
}
