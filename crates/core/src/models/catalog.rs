//! Product catalog records.

use serde::{Deserialize, Serialize};

use crate::types::{Money, ProductId};

/// A product on sale.
///
/// The backend names the key `productId`; `id` is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "productId")]
    pub id: ProductId,
    pub product_name: String,
    pub price: Money,
    /// Stock that is not reserved by pending orders.
    #[serde(default)]
    pub available_quantity: u32,
}

impl Product {
    /// Whether the product is at or below `threshold` units of stock.
    #[must_use]
    pub const fn is_low_stock(&self, threshold: u32) -> bool {
        self.available_quantity <= threshold
    }
}

/// Result of a stock check for a requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub available: bool,
    pub available_quantity: u32,
}
