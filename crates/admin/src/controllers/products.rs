//! Products section: full catalog table with name search.

use std::sync::{Arc, Mutex};

use grocery_core::Product;
use tracing::{error, instrument};

use super::{AdminContext, lock};
use crate::render;
use crate::view::Region;

#[derive(Debug, Default)]
struct ProductsState {
    all: Vec<Product>,
    displayed: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct ProductsController {
    ctx: AdminContext,
    state: Arc<Mutex<ProductsState>>,
}

impl ProductsController {
    #[must_use]
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            state: Arc::new(Mutex::new(ProductsState::default())),
        }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) {
        match self.ctx.api.products().await {
            Ok(products) => {
                let mut state = lock(&self.state);
                state.displayed.clone_from(&products);
                state.all = products;
                self.ctx
                    .replace(Region::Products, render::products(&state.displayed));
            }
            Err(e) => {
                error!("Failed to fetch products: {e}");
                self.ctx
                    .alert_load_failure(&e, "Failed to load products", "Error loading products");
            }
        }
    }

    /// Search by name. A blank term reloads the full catalog.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            self.load().await;
            return;
        }

        match self.ctx.api.search_products(term).await {
            Ok(found) => {
                let mut state = lock(&self.state);
                state.displayed = found;
                self.ctx
                    .replace(Region::Products, render::products(&state.displayed));
            }
            Err(e) => {
                error!("Failed to search products: {e}");
                self.ctx.alert_search_failure(&e, "Error searching products");
            }
        }
    }

    pub async fn refresh(&self) {
        self.load().await;
    }

    #[must_use]
    pub fn all(&self) -> Vec<Product> {
        lock(&self.state).all.clone()
    }

    #[must_use]
    pub fn displayed(&self) -> Vec<Product> {
        lock(&self.state).displayed.clone()
    }
}
