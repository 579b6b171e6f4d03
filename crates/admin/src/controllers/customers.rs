//! Customers section: listing, name search and deletion.

use std::sync::{Arc, Mutex};

use grocery_core::{BadgeTone, Customer, CustomerId};
use tracing::{error, info, instrument, warn};

use super::{AdminContext, lock};
use crate::render;
use crate::view::Region;

/// Prompt shown before a customer is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this customer?";

/// Result of [`CustomersController::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Deleted,
    Failed,
}

#[derive(Debug, Default)]
struct CustomersState {
    /// Last full fetch. Searches never modify it.
    all: Vec<Customer>,
    displayed: Vec<Customer>,
}

#[derive(Debug, Clone)]
pub struct CustomersController {
    ctx: AdminContext,
    state: Arc<Mutex<CustomersState>>,
}

impl CustomersController {
    #[must_use]
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            state: Arc::new(Mutex::new(CustomersState::default())),
        }
    }

    /// Fetch every customer, replace the cache and show the full list.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        match self.ctx.api.customers().await {
            Ok(customers) => {
                let mut state = lock(&self.state);
                state.displayed.clone_from(&customers);
                state.all = customers;
                self.ctx
                    .replace(Region::Customers, render::customers(&state.displayed));
            }
            Err(e) => {
                error!("Failed to fetch customers: {e}");
                self.ctx
                    .alert_load_failure(&e, "Failed to load customers", "Error loading customers");
            }
        }
    }

    /// Search by name. A blank term reloads the full list.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            self.load().await;
            return;
        }

        match self.ctx.api.search_customers(term).await {
            Ok(found) => {
                let mut state = lock(&self.state);
                state.displayed = found;
                self.ctx
                    .replace(Region::Customers, render::customers(&state.displayed));
            }
            Err(e) => {
                error!("Failed to search customers: {e}");
                self.ctx
                    .alert_search_failure(&e, "Error searching customers");
            }
        }
    }

    /// Clear any search and reload.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Delete a customer after the user confirms.
    ///
    /// No request is sent unless the confirmation is accepted. On success
    /// the record is dropped from the cache and the displayed list.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete(&self, id: &CustomerId) -> DeleteOutcome {
        if !self.ctx.view.confirm(DELETE_PROMPT) {
            info!("Customer deletion cancelled");
            return DeleteOutcome::Cancelled;
        }

        match self.ctx.api.delete_customer(id).await {
            Ok(()) => {
                {
                    let mut state = lock(&self.state);
                    state.all.retain(|c| &c.customer_id != id);
                    state.displayed.retain(|c| &c.customer_id != id);
                    self.ctx
                        .replace(Region::Customers, render::customers(&state.displayed));
                }
                self.ctx
                    .alerts
                    .show("Customer deleted successfully", BadgeTone::Success);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!("Failed to delete customer: {e}");
                self.ctx.alerts.show(
                    e.user_message("Failed to delete customer"),
                    BadgeTone::Danger,
                );
                DeleteOutcome::Failed
            }
        }
    }

    /// The cached full list.
    #[must_use]
    pub fn all(&self) -> Vec<Customer> {
        lock(&self.state).all.clone()
    }

    /// What the table currently shows.
    #[must_use]
    pub fn displayed(&self) -> Vec<Customer> {
        lock(&self.state).displayed.clone()
    }
}
