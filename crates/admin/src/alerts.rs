//! Transient dashboard notifications.
//!
//! Alerts are inserted at the top of the alert region, newest first. Each
//! one removes itself [`ALERT_TIMEOUT`] after it was shown. Identical
//! messages are not merged.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use grocery_core::BadgeTone;
use tracing::{debug, warn};

use crate::render;
use crate::view::{DashboardView, Region};

/// How long an alert stays on screen.
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle for a shown alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub tone: BadgeTone,
    pub message: String,
}

/// The stack of visible alerts.
///
/// Cheap to clone; clones share one stack.
#[derive(Clone)]
pub struct AlertStack {
    inner: Arc<AlertStackInner>,
}

struct AlertStackInner {
    alerts: Mutex<Vec<Alert>>,
    next_id: AtomicU64,
    view: Arc<dyn DashboardView>,
}

impl AlertStack {
    #[must_use]
    pub fn new(view: Arc<dyn DashboardView>) -> Self {
        Self {
            inner: Arc::new(AlertStackInner {
                alerts: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                view,
            }),
        }
    }

    /// Show `message` and schedule its removal.
    ///
    /// Outside a tokio runtime the alert stays until [`AlertStack::dismiss`]
    /// is called.
    pub fn show(&self, message: impl Into<String>, tone: BadgeTone) -> AlertId {
        let id = AlertId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let alert = Alert {
            id,
            tone,
            message: message.into(),
        };
        debug!(tone = %tone, message = %alert.message, "showing alert");

        {
            let mut alerts = self.lock();
            alerts.insert(0, alert);
            self.redraw(&alerts);
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                // Deadline is fixed at show time, not when the task first runs.
                let deadline = tokio::time::Instant::now() + ALERT_TIMEOUT;
                let stack = self.clone();
                handle.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    stack.dismiss(id);
                });
            }
            Err(_) => warn!("No runtime available; alert {id:?} will not auto-dismiss"),
        }

        id
    }

    /// Remove one alert. Unknown ids are ignored.
    pub fn dismiss(&self, id: AlertId) {
        let mut alerts = self.lock();
        let before = alerts.len();
        alerts.retain(|alert| alert.id != id);
        if alerts.len() != before {
            self.redraw(&alerts);
        }
    }

    /// Visible alerts, newest first.
    #[must_use]
    pub fn visible(&self) -> Vec<Alert> {
        self.lock().clone()
    }

    fn redraw(&self, alerts: &[Alert]) {
        self.inner
            .view
            .replace_region(Region::Alerts, render::alerts(alerts));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Alert>> {
        self.inner
            .alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for AlertStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertStack")
            .field("visible", &self.lock().len())
            .finish_non_exhaustive()
    }
}
