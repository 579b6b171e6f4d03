//! Markup renderers, one per collection.
//!
//! Each function is pure: records in, markup out. An empty collection
//! renders a placeholder sentence rather than an empty container. Values
//! are HTML-escaped by askama.

mod views;

pub use views::*;

use askama::Template;
use grocery_core::{Customer, Order, OrderStatistics, Product};

use crate::alerts::Alert;
use crate::filters;

/// Products at or below this many available units count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Template)]
#[template(path = "dashboard/statistics.html")]
struct StatisticsTemplate {
    cards: Vec<StatCardView>,
}

#[derive(Template)]
#[template(path = "dashboard/recent_orders.html")]
struct RecentOrdersTemplate {
    orders: Vec<OrderView>,
}

#[derive(Template)]
#[template(path = "dashboard/low_stock.html")]
struct LowStockTemplate {
    products: Vec<ProductView>,
}

#[derive(Template)]
#[template(path = "customers/table.html")]
struct CustomersTemplate {
    customers: Vec<CustomerView>,
}

#[derive(Template)]
#[template(path = "products/table.html")]
struct ProductsTemplate {
    products: Vec<ProductView>,
}

#[derive(Template)]
#[template(path = "orders/table.html")]
struct OrdersTemplate {
    orders: Vec<OrderView>,
}

#[derive(Template)]
#[template(path = "reports/breakdown.html")]
struct ReportsTemplate {
    total_orders: u64,
    total_revenue: String,
    rows: Vec<StatusCountView>,
}

#[derive(Template)]
#[template(path = "alerts.html")]
struct AlertsTemplate {
    alerts: Vec<AlertView>,
}

fn render(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        r#"<p class="text-danger">Unable to display this section.</p>"#.to_string()
    })
}

/// The four statistics cards.
#[must_use]
pub fn statistics(stats: &OrderStatistics) -> String {
    render(&StatisticsTemplate {
        cards: StatCardView::from_statistics(stats),
    })
}

/// Compact recent-orders list for the dashboard.
#[must_use]
pub fn recent_orders(orders: &[Order]) -> String {
    render(&RecentOrdersTemplate {
        orders: orders.iter().map(OrderView::from).collect(),
    })
}

/// Low-stock list. Callers pass the already filtered products.
#[must_use]
pub fn low_stock(products: &[Product]) -> String {
    render(&LowStockTemplate {
        products: products
            .iter()
            .map(|p| ProductView::new(p, LOW_STOCK_THRESHOLD))
            .collect(),
    })
}

#[must_use]
pub fn customers(customers: &[Customer]) -> String {
    render(&CustomersTemplate {
        customers: customers.iter().map(CustomerView::from).collect(),
    })
}

#[must_use]
pub fn products(products: &[Product]) -> String {
    render(&ProductsTemplate {
        products: products
            .iter()
            .map(|p| ProductView::new(p, LOW_STOCK_THRESHOLD))
            .collect(),
    })
}

#[must_use]
pub fn orders(orders: &[Order]) -> String {
    render(&OrdersTemplate {
        orders: orders.iter().map(OrderView::from).collect(),
    })
}

/// Per-status breakdown with totals.
#[must_use]
pub fn reports(stats: &OrderStatistics) -> String {
    render(&ReportsTemplate {
        total_orders: stats.total_orders,
        total_revenue: stats.total_revenue.to_string(),
        rows: StatusCountView::from_statistics(stats),
    })
}

/// The alert stack, newest first.
#[must_use]
pub fn alerts(alerts: &[Alert]) -> String {
    render(&AlertsTemplate {
        alerts: alerts.iter().map(AlertView::from).collect(),
    })
}
