//! The dashboard landing section: statistics, recent orders, low stock.

use grocery_core::{BadgeTone, Product};
use tracing::{error, instrument};

use super::AdminContext;
use crate::render::{self, LOW_STOCK_THRESHOLD};
use crate::view::Region;

/// How many orders the recent-orders list shows.
pub const RECENT_ORDERS_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct OverviewController {
    ctx: AdminContext,
}

impl OverviewController {
    #[must_use]
    pub const fn new(ctx: AdminContext) -> Self {
        Self { ctx }
    }

    /// Fetch the three dashboard panels concurrently.
    ///
    /// Each panel renders as soon as its own data is in; a failed panel
    /// keeps its previous markup. Any failure shows one alert.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        let (stats_ok, orders_ok, products_ok) = tokio::join!(
            self.load_statistics(),
            self.load_recent_orders(),
            self.load_low_stock()
        );

        if !(stats_ok && orders_ok && products_ok) {
            self.ctx
                .alerts
                .show("Error loading dashboard data", BadgeTone::Danger);
        }
    }

    async fn load_statistics(&self) -> bool {
        match self.ctx.api.order_statistics().await {
            Ok(stats) => {
                self.ctx.replace(Region::Statistics, render::statistics(&stats));
                true
            }
            Err(e) => {
                error!("Failed to fetch order statistics: {e}");
                false
            }
        }
    }

    async fn load_recent_orders(&self) -> bool {
        match self.ctx.api.orders().await {
            Ok(mut orders) => {
                orders.truncate(RECENT_ORDERS_LIMIT);
                self.ctx
                    .replace(Region::RecentOrders, render::recent_orders(&orders));
                true
            }
            Err(e) => {
                error!("Failed to fetch orders: {e}");
                false
            }
        }
    }

    async fn load_low_stock(&self) -> bool {
        match self.ctx.api.products().await {
            Ok(products) => {
                let low_stock: Vec<Product> = products
                    .into_iter()
                    .filter(|p| p.is_low_stock(LOW_STOCK_THRESHOLD))
                    .collect();
                self.ctx
                    .replace(Region::LowStock, render::low_stock(&low_stock));
                true
            }
            Err(e) => {
                error!("Failed to fetch products: {e}");
                false
            }
        }
    }
}
