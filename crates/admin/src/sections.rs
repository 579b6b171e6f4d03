//! Dashboard sections and the controller that switches between them.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use grocery_client::{ApiClient, ApiError, ClientConfig};
use thiserror::Error;
use tracing::{info, instrument};

use crate::controllers::{
    AdminContext, CustomersController, OrdersController, OverviewController, ProductsController,
    ReportsController, lock,
};
use crate::view::DashboardView;

/// A logical page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Customers,
    Products,
    Orders,
    Reports,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Customers,
        Self::Products,
        Self::Orders,
        Self::Reports,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Customers => "customers",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Reports => "reports",
        }
    }

    /// DOM id of the section container, e.g. `customers-section`.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("{}-section", self.as_str())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dashboard section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Tracks the visible section and owns one controller per section.
#[derive(Debug, Clone)]
pub struct SectionController {
    ctx: AdminContext,
    current: Arc<Mutex<Section>>,
    pub overview: OverviewController,
    pub customers: CustomersController,
    pub products: ProductsController,
    pub orders: OrdersController,
    pub reports: ReportsController,
}

impl SectionController {
    #[must_use]
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            overview: OverviewController::new(ctx.clone()),
            customers: CustomersController::new(ctx.clone()),
            products: ProductsController::new(ctx.clone()),
            orders: OrdersController::new(ctx.clone()),
            reports: ReportsController::new(ctx.clone()),
            current: Arc::new(Mutex::new(Section::default())),
            ctx,
        }
    }

    /// Build the API client from `config` and wire it to `view`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn from_config(
        config: &ClientConfig,
        view: Arc<dyn DashboardView>,
    ) -> Result<Self, ApiError> {
        let api = ApiClient::new(config)?;
        Ok(Self::new(AdminContext::new(api, view)))
    }

    #[must_use]
    pub fn context(&self) -> &AdminContext {
        &self.ctx
    }

    #[must_use]
    pub fn current_section(&self) -> Section {
        *lock(&self.current)
    }

    /// Page load: show the landing section and fetch its data.
    pub async fn start(&self) {
        self.show_section(Section::Dashboard).await;
    }

    /// Switch to `section` and load its data.
    ///
    /// Loads are not coordinated: switching again before a load finishes
    /// lets both complete, each rendering into its own region.
    #[instrument(skip(self))]
    pub async fn show_section(&self, section: Section) {
        for other in Section::ALL {
            self.ctx.view.set_section_visible(other, false);
        }
        self.ctx.view.set_section_visible(section, true);
        self.ctx.view.set_nav_active(section);
        *lock(&self.current) = section;
        info!(%section, "section shown");

        match section {
            Section::Dashboard => self.overview.load().await,
            Section::Customers => self.customers.load().await,
            Section::Products => self.products.load().await,
            Section::Orders => self.orders.load().await,
            Section::Reports => self.reports.load().await,
        }
    }
}
