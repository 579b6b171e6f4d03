//! Display-ready projections of backend records.
//!
//! Every field is preformatted so templates only interpolate.

use grocery_core::{Customer, Order, OrderStatistics, OrderStatus, Product};

use crate::alerts::Alert;

/// Date format for listing columns.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One statistics card.
#[derive(Debug, Clone)]
pub struct StatCardView {
    pub value: String,
    pub label: &'static str,
    pub card_class: &'static str,
    pub icon: &'static str,
}

impl StatCardView {
    pub fn from_statistics(stats: &OrderStatistics) -> Vec<Self> {
        vec![
            Self {
                value: stats.total_orders.to_string(),
                label: "Total Orders",
                card_class: "customers",
                icon: "fa-shopping-bag",
            },
            Self {
                value: stats.pending_orders.to_string(),
                label: "Pending Orders",
                card_class: "products",
                icon: "fa-clock",
            },
            Self {
                value: stats.delivered_orders.to_string(),
                label: "Delivered Orders",
                card_class: "orders",
                icon: "fa-check-circle",
            },
            Self {
                value: stats.total_revenue.to_string(),
                label: "Total Revenue",
                card_class: "revenue",
                icon: "fa-dollar-sign",
            },
        ]
    }
}

/// Order line for the dashboard's recent-orders list and the orders table.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub quantity: String,
    pub amount: String,
    pub status: String,
    pub tone: &'static str,
    pub date: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order
                .customer_name
                .clone()
                .unwrap_or_else(|| order.customer_id.to_string()),
            product: order.product_name.clone().unwrap_or_default(),
            quantity: order
                .quantity_ordered
                .map(|q| q.to_string())
                .unwrap_or_default(),
            amount: order.order_amount.to_string(),
            status: order.status.to_string(),
            tone: order.status.badge().as_css(),
            date: order
                .order_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Product row for the low-stock list and the products table.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub available: u32,
    pub is_low_stock: bool,
}

impl ProductView {
    pub fn new(product: &Product, low_stock_threshold: u32) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.product_name.clone(),
            price: product.price.to_string(),
            available: product.available_quantity,
            is_low_stock: product.is_low_stock(low_stock_threshold),
        }
    }
}

/// Customers table row.
#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub created_at: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.customer_id.to_string(),
            full_name: customer.full_name.clone(),
            email: customer.email.clone(),
            contact_number: customer.contact_number.clone(),
            address: customer.address.clone(),
            created_at: customer
                .created_at
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// One row of the reports status breakdown.
#[derive(Debug, Clone)]
pub struct StatusCountView {
    pub status: String,
    pub tone: &'static str,
    pub count: u64,
}

impl StatusCountView {
    pub fn from_statistics(stats: &OrderStatistics) -> Vec<Self> {
        OrderStatus::KNOWN
            .iter()
            .filter_map(|status| {
                stats.count_for(status).map(|count| Self {
                    status: status.to_string(),
                    tone: status.badge().as_css(),
                    count,
                })
            })
            .collect()
    }
}

/// A rendered notification.
#[derive(Debug, Clone)]
pub struct AlertView {
    pub tone: &'static str,
    pub message: String,
}

impl From<&Alert> for AlertView {
    fn from(alert: &Alert) -> Self {
        Self {
            tone: alert.tone.as_css(),
            message: alert.message.clone(),
        }
    }
}
