//! The application shell: header state and logout.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use grocery_client::{ApiClient, SessionStore};
use grocery_core::Session;
use tracing::{info, instrument, warn};

use crate::render;
use crate::routes::{Navigator, Route};

#[derive(Clone)]
pub struct AppShell {
    api: ApiClient,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    current_user: Arc<Mutex<Option<Session>>>,
}

impl AppShell {
    #[must_use]
    pub fn new(api: ApiClient, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            session,
            navigator,
            current_user: Arc::new(Mutex::new(None)),
        }
    }

    /// Re-read the stored session. A corrupt record is discarded.
    ///
    /// Returns whether a user is logged in.
    pub fn check_auth_status(&self) -> bool {
        let session = self.session.load();
        let logged_in = session.is_some();
        *self.lock() = session;
        logged_in
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.lock().is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<Session> {
        self.lock().clone()
    }

    /// Forget the session and go home.
    ///
    /// The local record is cleared first; the backend logout is best-effort
    /// and its failure only logged.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        self.session.clear();
        *self.lock() = None;

        if let Err(e) = self.api.logout().await {
            warn!("Logout request failed: {e}");
        }
        info!("Logged out");
        self.navigator.navigate(Route::Home);
    }

    /// Header markup for the current auth state.
    #[must_use]
    pub fn header(&self) -> String {
        render::header(self.lock().as_ref())
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.current_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for AppShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppShell")
            .field("logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grocery_client::ClientConfig;
    use grocery_client::session::{MemoryStorage, SESSION_KEY, SessionStorage};
    use grocery_core::UserType;
    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::routes::{MemoryNavigator, Navigation};

    fn shell(session: SessionStore, navigator: Arc<MemoryNavigator>) -> AppShell {
        let config = ClientConfig::new(Url::parse("http://127.0.0.1:9").unwrap());
        AppShell::new(ApiClient::new(&config).unwrap(), session, navigator)
    }

    #[test]
    fn test_corrupt_session_is_cleared() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(SESSION_KEY, "][").unwrap();
        let shell = shell(SessionStore::new(storage.clone()), Arc::new(MemoryNavigator::new()));

        assert!(!shell.check_auth_status());
        assert_eq!(storage.get_item(SESSION_KEY).unwrap(), None);
        assert!(shell.header().contains("Login"));
    }

    #[test]
    fn test_header_shows_user_name() {
        let session = SessionStore::in_memory();
        session
            .save(&Session {
                user_type: UserType::Customer,
                user_data: json!({ "fullName": "Ada Lovelace" }),
            })
            .unwrap();
        let shell = shell(session, Arc::new(MemoryNavigator::new()));

        assert!(shell.check_auth_status());
        let header = shell.header();
        assert!(header.contains("Ada Lovelace"));
        assert!(header.contains(">AL<"));
        assert!(header.contains("Logout"));
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_is_down() {
        let session = SessionStore::in_memory();
        session
            .save(&Session {
                user_type: UserType::Customer,
                user_data: json!({}),
            })
            .unwrap();
        let navigator = Arc::new(MemoryNavigator::new());
        let shell = shell(session.clone(), navigator.clone());
        assert!(shell.check_auth_status());

        shell.logout().await;

        assert!(!shell.is_logged_in());
        assert!(!session.is_logged_in());
        assert_eq!(navigator.last(), Some(Navigation::Route(Route::Home)));
    }
}
