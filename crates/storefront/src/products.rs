//! Product browsing, search and add-to-cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use grocery_client::{ApiClient, SessionStore};
use grocery_core::{Money, Product, ProductId};
use tracing::{error, info, instrument, warn};

use crate::render;

/// How long the add-to-cart confirmation stays visible.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(3);

const LOGIN_REQUIRED: &str = "Please login to add items to cart";
const LOAD_FAILED: &str = "Failed to load products";
const LOAD_UNREACHABLE: &str = "Failed to load products. Please try again.";
const NOT_FOUND: &str = "No products found";
const SEARCH_UNREACHABLE: &str = "Search failed. Please try again.";
const ADD_FAILED: &str = "Failed to add to cart. Please try again.";

/// A product as listed, with the quantity picked next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    pub product: Product,
    /// Transient, never sent anywhere except the stock check.
    pub selected_quantity: u32,
}

impl From<Product> for ProductListing {
    fn from(product: Product) -> Self {
        Self {
            product,
            selected_quantity: 1,
        }
    }
}

/// One cart line. The cart lives only as long as the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

/// How [`ProductsController::add_to_cart`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// No session; nothing was sent.
    LoginRequired,
    /// Another add was still pending.
    Busy,
    /// The product is not in the displayed list.
    Unknown,
    OutOfStock,
    Failed,
    Added,
}

/// Everything the products view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsSnapshot {
    pub listings: Vec<ProductListing>,
    pub is_loading: bool,
    pub is_adding_to_cart: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub cart: Vec<CartLine>,
}

#[derive(Debug, Default)]
struct ProductsState {
    /// Last full fetch. Searches never modify it.
    all: Vec<Product>,
    view: ProductsSnapshot,
    /// Bumped on every confirmation so a stale timer cannot clear a newer one.
    notice: u64,
}

#[derive(Clone)]
pub struct ProductsController {
    api: ApiClient,
    session: SessionStore,
    state: Arc<Mutex<ProductsState>>,
}

impl ProductsController {
    #[must_use]
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self {
            api,
            session,
            state: Arc::new(Mutex::new(ProductsState::default())),
        }
    }

    /// Fetch the full catalog. Called when the view mounts.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        {
            let mut state = self.lock();
            state.view.is_loading = true;
            state.view.error_message = None;
        }

        let result = self.api.products().await;

        let mut state = self.lock();
        state.view.is_loading = false;
        match result {
            Ok(products) => {
                state.view.listings = products.iter().cloned().map(ProductListing::from).collect();
                state.all = products;
            }
            Err(e) => {
                error!("Error loading products: {e}");
                let message = if e.is_domain() {
                    e.user_message(LOAD_FAILED)
                } else {
                    LOAD_UNREACHABLE.to_string()
                };
                state.view.error_message = Some(message);
            }
        }
    }

    /// Search by name. A blank term reloads the full catalog.
    ///
    /// A failed search empties the list and explains why.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            self.load().await;
            return;
        }

        {
            let mut state = self.lock();
            state.view.is_loading = true;
            state.view.error_message = None;
        }

        let result = self.api.search_products(term).await;

        let mut state = self.lock();
        state.view.is_loading = false;
        match result {
            Ok(found) => {
                state.view.listings = found.into_iter().map(ProductListing::from).collect();
            }
            Err(e) => {
                error!("Error searching products: {e}");
                state.view.listings.clear();
                let message = if e.is_domain() {
                    e.user_message(NOT_FOUND)
                } else {
                    SEARCH_UNREACHABLE.to_string()
                };
                state.view.error_message = Some(message);
            }
        }
    }

    /// Clear the search and reload.
    pub async fn clear_search(&self) {
        self.load().await;
    }

    /// Set the quantity picked for a listed product. Zero is raised to one.
    pub fn set_quantity(&self, product_id: ProductId, quantity: u32) {
        let mut state = self.lock();
        if let Some(listing) = state
            .view
            .listings
            .iter_mut()
            .find(|l| l.product.id == product_id)
        {
            listing.selected_quantity = quantity.max(1);
        }
    }

    /// Put the selected quantity of a listed product in the cart.
    ///
    /// Requires a session; without one no request is sent. Stock is
    /// checked with the backend before the line is added. The
    /// confirmation clears itself after [`CONFIRMATION_TIMEOUT`].
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, product_id: ProductId) -> CartOutcome {
        if !self.session.is_logged_in() {
            let mut state = self.lock();
            state.view.success_message = None;
            state.view.error_message = Some(LOGIN_REQUIRED.to_string());
            return CartOutcome::LoginRequired;
        }

        let listing = {
            let mut state = self.lock();
            if state.view.is_adding_to_cart {
                return CartOutcome::Busy;
            }
            let Some(listing) = state
                .view
                .listings
                .iter()
                .find(|l| l.product.id == product_id)
                .cloned()
            else {
                warn!("Product {product_id} is not listed");
                return CartOutcome::Unknown;
            };
            state.view.is_adding_to_cart = true;
            state.view.error_message = None;
            state.view.success_message = None;
            listing
        };

        let quantity = listing.selected_quantity.max(1);
        let result = self.api.product_availability(product_id, quantity).await;

        let mut state = self.lock();
        state.view.is_adding_to_cart = false;
        match result {
            Ok(availability) if availability.available => {
                add_line(&mut state.view.cart, &listing.product, quantity);
                state.view.success_message = Some(format!(
                    "Added {quantity} {}(s) to cart!",
                    listing.product.product_name
                ));
                state.notice += 1;
                self.schedule_clear(state.notice);
                info!(quantity, "Added to cart");
                CartOutcome::Added
            }
            Ok(availability) => {
                state.view.error_message = Some(format!(
                    "Only {} left in stock",
                    availability.available_quantity
                ));
                CartOutcome::OutOfStock
            }
            Err(e) => {
                error!("Failed to check availability: {e}");
                state.view.error_message = Some(e.user_message(ADD_FAILED));
                CartOutcome::Failed
            }
        }
    }

    fn schedule_clear(&self, notice: u64) {
        let deadline = tokio::time::Instant::now() + CONFIRMATION_TIMEOUT;
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.notice == notice {
                state.view.success_message = None;
            }
        });
    }

    #[must_use]
    pub fn snapshot(&self) -> ProductsSnapshot {
        self.lock().view.clone()
    }

    /// The cached full catalog.
    #[must_use]
    pub fn all(&self) -> Vec<Product> {
        self.lock().all.clone()
    }

    /// Markup for the current state.
    #[must_use]
    pub fn render(&self) -> String {
        render::products_page(&self.snapshot())
    }

    fn lock(&self) -> MutexGuard<'_, ProductsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn add_line(cart: &mut Vec<CartLine>, product: &Product, quantity: u32) {
    match cart.iter_mut().find(|line| line.product_id == product.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(quantity),
        None => cart.push(CartLine {
            product_id: product.id,
            product_name: product.product_name.clone(),
            unit_price: product.price,
            quantity,
        }),
    }
}

impl std::fmt::Debug for ProductsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsController")
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}
