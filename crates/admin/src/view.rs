//! The page surface controllers render into.
//!
//! Controllers never touch markup containers directly. They hand finished
//! markup for a [`Region`] to a [`DashboardView`], toggle section
//! visibility and ask it for confirmations. A browser binding would map
//! these calls onto elements; [`MemoryView`] records them for tests and
//! headless use.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::sections::Section;

/// A markup container on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Statistics,
    RecentOrders,
    LowStock,
    Customers,
    Products,
    Orders,
    Reports,
    Alerts,
}

impl Region {
    /// DOM id of the container.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Statistics => "statsContainer",
            Self::RecentOrders => "recentOrders",
            Self::LowStock => "lowStockProducts",
            Self::Customers => "customersTable",
            Self::Products => "productsTable",
            Self::Orders => "ordersTable",
            Self::Reports => "reportsContainer",
            Self::Alerts => "alertContainer",
        }
    }
}

/// Rendering surface for the dashboard page.
pub trait DashboardView: Send + Sync {
    /// Show or hide a section's container.
    fn set_section_visible(&self, section: Section, visible: bool);

    /// Mark `section`'s nav link active and every other link inactive.
    fn set_nav_active(&self, section: Section);

    /// Replace the contents of `region` with `markup`.
    fn replace_region(&self, region: Region, markup: String);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Debug, Default)]
struct MemoryViewState {
    visible: HashSet<Section>,
    active_nav: Option<Section>,
    regions: HashMap<Region, String>,
    prompts: Vec<String>,
}

/// A [`DashboardView`] that keeps everything in memory.
///
/// Confirmation prompts are recorded and answered with a fixed reply,
/// `true` unless changed with [`MemoryView::answer_confirmations`].
#[derive(Debug)]
pub struct MemoryView {
    state: Mutex<MemoryViewState>,
    confirm_reply: AtomicBool,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryViewState::default()),
            confirm_reply: AtomicBool::new(true),
        }
    }

    /// Reply every later confirmation prompt with `reply`.
    pub fn answer_confirmations(&self, reply: bool) {
        self.confirm_reply.store(reply, Ordering::SeqCst);
    }

    /// Current markup of `region`, if it was ever rendered.
    #[must_use]
    pub fn region(&self, region: Region) -> Option<String> {
        self.lock().regions.get(&region).cloned()
    }

    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.lock().visible.contains(&section)
    }

    #[must_use]
    pub fn active_nav(&self) -> Option<Section> {
        self.lock().active_nav
    }

    /// Every confirmation prompt shown so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DashboardView for MemoryView {
    fn set_section_visible(&self, section: Section, visible: bool) {
        let mut state = self.lock();
        if visible {
            state.visible.insert(section);
        } else {
            state.visible.remove(&section);
        }
    }

    fn set_nav_active(&self, section: Section) {
        self.lock().active_nav = Some(section);
    }

    fn replace_region(&self, region: Region, markup: String) {
        self.lock().regions.insert(region, markup);
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.lock().prompts.push(prompt.to_string());
        self.confirm_reply.load(Ordering::SeqCst)
    }
}
