use tracing::{error, instrument};

use super::AdminContext;
use crate::render;
use crate::view::Region;

/// Reports section: order counts per status and revenue.
#[derive(Debug, Clone)]
pub struct ReportsController {
    ctx: AdminContext,
}

impl ReportsController {
    #[must_use]
    pub const fn new(ctx: AdminContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) {
        match self.ctx.api.order_statistics().await {
            Ok(stats) => self.ctx.replace(Region::Reports, render::reports(&stats)),
            Err(e) => {
                error!("Failed to fetch order statistics: {e}");
                self.ctx
                    .alert_load_failure(&e, "Failed to load reports", "Error loading reports");
            }
        }
    }
}
