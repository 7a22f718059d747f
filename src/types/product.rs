use serde::{Deserialize, Serialize};

/// A purchased product.
///
/// `discount_amount` accepts three wire shapes: the key may be missing, set to
/// `null`, or carry a number. The first two both become `None`.
///
/// # Examples
///
/// ```
/// use purchase_rail::types::Product;
///
/// let missing: Product = serde_json::from_str(r#"{"name":"a","price":1}"#).unwrap();
/// let null: Product = serde_json::from_str(r#"{"name":"a","price":1,"discountAmount":null}"#).unwrap();
///
/// assert_eq!(missing.discount_amount, None);
/// assert_eq!(missing, null);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
}

impl Product {
    /// Creates a product without a discount.
    #[inline]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self { name: name.into(), price, discount_amount: None }
    }

    /// Sets the discount amount.
    #[inline]
    pub fn with_discount(mut self, amount: f64) -> Self {
        self.discount_amount = Some(amount);
        self
    }

    /// The discount to aggregate, with an absent discount counting as zero.
    #[inline]
    pub fn effective_discount(&self) -> f64 {
        self.discount_amount.unwrap_or(0.0)
    }
}
