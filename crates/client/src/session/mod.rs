//! Client-persisted user session.
//!
//! A successful login stores the backend's `{userType, userData}` payload
//! under [`SESSION_KEY`]. Presence of the record means "logged in"; there
//! is no expiry. The record is a convenience for routing and gating, not a
//! security boundary: the backend's own cookie session is what authorizes
//! requests.

mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use std::sync::Arc;

use grocery_core::Session;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// Storage key of the session record.
pub const SESSION_KEY: &str = "userSession";

/// Errors from reading or writing session storage.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Reads and writes the session record.
///
/// Cheap to clone; clones share the same backend, which is how the login
/// controller's write becomes visible to the products controller.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// A store backed by [`MemoryStorage`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// File-backed when `session_dir` is configured, in-memory otherwise.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        match &config.session_dir {
            Some(dir) => Self::new(Arc::new(FileStorage::new(dir))),
            None => Self::in_memory(),
        }
    }

    /// Persist `session`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the record cannot be encoded or stored.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(session)?;
        self.storage.set_item(SESSION_KEY, &encoded)?;
        debug!(user_type = %session.user_type, "session saved");
        Ok(())
    }

    /// The stored session, if there is a readable one.
    ///
    /// An unparsable record is removed and reported as absent; storage
    /// read failures are also reported as absent.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let raw = match self.storage.get_item(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read session storage: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Discarding corrupt session record: {e}");
                self.clear();
                None
            }
        }
    }

    /// Remove the session record. Failures are logged, never returned.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(SESSION_KEY) {
            warn!("Failed to clear session storage: {e}");
        }
    }

    /// Whether a readable session record exists.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.load().is_some()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grocery_core::UserType;
    use serde_json::json;

    use super::*;

    fn customer_session() -> Session {
        Session {
            user_type: UserType::Customer,
            user_data: json!({ "customerId": "CUST-1", "fullName": "Ada Lovelace" }),
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = SessionStore::in_memory();
        assert!(!store.is_logged_in());

        store.save(&customer_session()).unwrap();
        assert_eq!(store.load(), Some(customer_session()));
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_clones_share_storage() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.save(&customer_session()).unwrap();
        assert!(other.is_logged_in());

        other.clear();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_corrupt_record_is_removed() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(SESSION_KEY, "{not json").unwrap();
        let store = SessionStore::new(storage.clone());

        assert_eq!(store.load(), None);
        assert_eq!(storage.get_item(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_stored_shape_matches_login_payload() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.save(&customer_session()).unwrap();

        let raw = storage.get_item(SESSION_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["userType"], "CUSTOMER");
        assert_eq!(value["userData"]["fullName"], "Ada Lovelace");
    }
}
