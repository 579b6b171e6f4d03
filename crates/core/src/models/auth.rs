//! Login and registration payloads, and the persisted session record.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

use crate::types::{Email, UserType};

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    pub user_type: UserType,
}

impl LoginRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString, user_type: UserType) -> Self {
        Self {
            username: username.into(),
            password,
            user_type,
        }
    }
}

/// Body of `POST /api/customers/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: Email,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    pub address: String,
    pub contact_number: String,
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// Logged-in user record returned by a successful login.
///
/// Stored client-side as-is. `user_data` is the backend's customer or admin
/// record and is never interpreted beyond display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_type: UserType,
    #[serde(default)]
    pub user_data: serde_json::Value,
}

impl Session {
    /// Best-effort display name pulled from the opaque user record.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        ["fullName", "username", "email"]
            .iter()
            .find_map(|key| self.user_data.get(key).and_then(serde_json::Value::as_str))
    }
}
