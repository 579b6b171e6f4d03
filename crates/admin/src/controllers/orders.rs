//! Orders section: full order table with a client-side status filter.

use std::sync::{Arc, Mutex};

use grocery_core::{Order, OrderStatus};
use tracing::{error, instrument};

use super::{AdminContext, lock};
use crate::render;
use crate::view::Region;

#[derive(Debug, Default)]
struct OrdersState {
    all: Vec<Order>,
    filter: Option<OrderStatus>,
}

impl OrdersState {
    fn displayed(&self) -> Vec<Order> {
        match &self.filter {
            Some(status) => self
                .all
                .iter()
                .filter(|o| &o.status == status)
                .cloned()
                .collect(),
            None => self.all.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrdersController {
    ctx: AdminContext,
    state: Arc<Mutex<OrdersState>>,
}

impl OrdersController {
    #[must_use]
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            state: Arc::new(Mutex::new(OrdersState::default())),
        }
    }

    /// Fetch every order. The current status filter stays applied.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        match self.ctx.api.orders().await {
            Ok(orders) => {
                let mut state = lock(&self.state);
                state.all = orders;
                self.ctx
                    .replace(Region::Orders, render::orders(&state.displayed()));
            }
            Err(e) => {
                error!("Failed to fetch orders: {e}");
                self.ctx
                    .alert_load_failure(&e, "Failed to load orders", "Error loading orders");
            }
        }
    }

    /// Narrow the table to one status, or show everything with `None`.
    ///
    /// Works on the cached orders; no request is sent.
    pub fn filter_by_status(&self, status: Option<OrderStatus>) {
        let mut state = lock(&self.state);
        state.filter = status;
        self.ctx
            .replace(Region::Orders, render::orders(&state.displayed()));
    }

    pub async fn refresh(&self) {
        self.load().await;
    }

    #[must_use]
    pub fn all(&self) -> Vec<Order> {
        lock(&self.state).all.clone()
    }

    #[must_use]
    pub fn displayed(&self) -> Vec<Order> {
        lock(&self.state).displayed()
    }
}
