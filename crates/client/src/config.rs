//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GROCERY_API_BASE_URL` - Origin of the REST backend (default: `http://localhost:8080`)
//! - `GROCERY_ADMIN_LOGIN_URL` - Where admin logins are sent (default: `{base}/login`)
//! - `GROCERY_HTTP_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)
//! - `GROCERY_SESSION_DIR` - Directory for the persisted session (default: in-memory only)
//! - `GROCERY_LOG_JSON` - Emit JSON logs when set (see [`crate::telemetry`])

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings shared by every controller.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the REST backend; endpoint paths are appended to it.
    pub api_base_url: Url,
    /// Separate admin origin that admin logins redirect to.
    pub admin_login_url: Url,
    /// Upper bound for a single request, including reading the body.
    pub request_timeout: Duration,
    /// Directory holding the persisted session; `None` keeps it in memory.
    pub session_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Configuration pointing at `api_base_url` with every other setting defaulted.
    #[must_use]
    pub fn new(api_base_url: Url) -> Self {
        let admin_login_url = default_admin_login_url(&api_base_url);
        Self {
            api_base_url,
            admin_login_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_dir: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = parse_url(
            "GROCERY_API_BASE_URL",
            &get_env_or_default("GROCERY_API_BASE_URL", DEFAULT_API_BASE_URL),
        )?;
        let admin_login_url = match get_optional_env("GROCERY_ADMIN_LOGIN_URL") {
            Some(raw) => parse_url("GROCERY_ADMIN_LOGIN_URL", &raw)?,
            None => default_admin_login_url(&api_base_url),
        };
        let timeout_secs = get_env_or_default(
            "GROCERY_HTTP_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("GROCERY_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;
        let session_dir = get_optional_env("GROCERY_SESSION_DIR").map(PathBuf::from);

        Ok(Self {
            api_base_url,
            admin_login_url,
            request_timeout: Duration::from_secs(timeout_secs),
            session_dir,
        })
    }

    /// Set the persisted session directory.
    #[must_use]
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }
}

fn default_admin_login_url(base: &Url) -> Url {
    let mut url = base.clone();
    url.set_path("/login");
    url.set_query(None);
    url
}

fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
