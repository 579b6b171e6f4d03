//! Per-section controllers.
//!
//! Controllers own their cache behind a short `std::sync::Mutex` that is
//! never held across an `.await`. Failures are logged and turned into
//! alerts; nothing propagates to the caller.

mod customers;
mod orders;
mod overview;
mod products;
mod reports;

pub use customers::{CustomersController, DELETE_PROMPT, DeleteOutcome};
pub use orders::OrdersController;
pub use overview::{OverviewController, RECENT_ORDERS_LIMIT};
pub use products::ProductsController;
pub use reports::ReportsController;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use grocery_client::{ApiClient, ApiError};
use grocery_core::BadgeTone;

use crate::alerts::AlertStack;
use crate::view::{DashboardView, Region};

/// What every controller needs: the API, the page and the alert stack.
#[derive(Clone)]
pub struct AdminContext {
    pub api: ApiClient,
    pub view: Arc<dyn DashboardView>,
    pub alerts: AlertStack,
}

impl AdminContext {
    #[must_use]
    pub fn new(api: ApiClient, view: Arc<dyn DashboardView>) -> Self {
        let alerts = AlertStack::new(Arc::clone(&view));
        Self { api, view, alerts }
    }

    pub(crate) fn replace(&self, region: Region, markup: String) {
        self.view.replace_region(region, markup);
    }

    /// Alert for a failed load.
    ///
    /// An error status or `success: false` shows `rejected`; a request that
    /// failed in flight shows `unreachable`.
    pub(crate) fn alert_load_failure(&self, err: &ApiError, rejected: &str, unreachable: &str) {
        let message = if err.is_transport() {
            unreachable
        } else {
            rejected
        };
        self.alerts.show(message, BadgeTone::Danger);
    }

    /// Alert for a failed search.
    ///
    /// A refused search is a warning carrying the server's explanation; a
    /// search that never got an answer is an error.
    pub(crate) fn alert_search_failure(&self, err: &ApiError, unreachable: &str) {
        if err.is_transport() {
            self.alerts.show(unreachable, BadgeTone::Danger);
        } else {
            self.alerts
                .show(err.user_message("Search failed"), BadgeTone::Warning);
        }
    }
}

impl std::fmt::Debug for AdminContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminContext")
            .field("api", &self.api)
            .field("alerts", &self.alerts)
            .finish_non_exhaustive()
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
