//! Order records and aggregate statistics.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Money, OrderId, OrderStatus};

use super::timestamp;

/// An order placed by a customer.
///
/// `customer_id` is a reference, not ownership. The backend joins in the
/// customer and product names when it has them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "orderId")]
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub order_amount: Money,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity_ordered: Option<u32>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub order_date: Option<NaiveDateTime>,
}

/// Read-only snapshot of order counters.
///
/// Counters the backend omits decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderStatistics {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub confirmed_orders: u64,
    pub shipped_orders: u64,
    pub delivered_orders: u64,
    pub cancelled_orders: u64,
    pub total_revenue: Money,
}

impl OrderStatistics {
    /// Count for a single status, `None` for statuses the backend does not count.
    #[must_use]
    pub fn count_for(&self, status: &OrderStatus) -> Option<u64> {
        match status {
            OrderStatus::Pending => Some(self.pending_orders),
            OrderStatus::Confirmed => Some(self.confirmed_orders),
            OrderStatus::Shipped => Some(self.shipped_orders),
            OrderStatus::Delivered => Some(self.delivered_orders),
            OrderStatus::Cancelled => Some(self.cancelled_orders),
            OrderStatus::Other(_) => None,
        }
    }
}
