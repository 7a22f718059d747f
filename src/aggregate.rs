//! Aggregator: folds a product list into sale totals.

use serde::Serialize;

use crate::types::Product;

/// Price and discount totals of one purchase.
///
/// Only produced from products, either through [`SaleTotals::from_products`],
/// by collecting an iterator of `&Product`, or by merging two totals. Both
/// fields stay non-negative when every input is non-negative.
///
/// # Examples
///
/// ```
/// use purchase_rail::aggregate::SaleTotals;
/// use purchase_rail::types::Product;
///
/// let totals = SaleTotals::from_products(&[
///     Product::new("mug", 60.0),
///     Product::new("lamp", 50.0).with_discount(10.0),
/// ]);
///
/// assert_eq!(totals.total_price(), 110.0);
/// assert_eq!(totals.total_discount(), 10.0);
/// let empty = SaleTotals::from_products(&[]);
/// assert_eq!((empty.total_price(), empty.total_discount()), (0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleTotals {
    total_price: f64,
    total_discount: f64,
}

impl SaleTotals {
    const ZERO: Self = Self { total_price: 0.0, total_discount: 0.0 };

    /// Folds `products` left to right.
    #[inline]
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().collect()
    }

    #[inline]
    pub const fn total_price(&self) -> f64 {
        self.total_price
    }

    #[inline]
    pub const fn total_discount(&self) -> f64 {
        self.total_discount
    }

    /// Combines totals computed over two disjoint slices of one purchase.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            total_price: self.total_price + other.total_price,
            total_discount: self.total_discount + other.total_discount,
        }
    }

    #[inline]
    fn accumulate(mut self, product: &Product) -> Self {
        self.total_price += product.price;
        self.total_discount += product.effective_discount();
        self
    }
}

impl<'a> FromIterator<&'a Product> for SaleTotals {
    fn from_iter<I: IntoIterator<Item = &'a Product>>(iter: I) -> Self {
        iter.into_iter().fold(Self::ZERO, Self::accumulate)
    }
}
