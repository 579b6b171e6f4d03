//! Login form controller.

use std::sync::Arc;

use grocery_client::{ApiClient, SessionStore};
use grocery_core::{LoginRequest, UserType};
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, instrument, warn};
use url::Url;

use crate::forms::{FormState, FormStatus, Submission};
use crate::render;
use crate::routes::{Navigator, Route};

const MISSING_CREDENTIALS: &str = "Please enter your username and password";
const LOGIN_FAILED: &str = "Login failed";
const BAD_CREDENTIALS: &str = "Please Enter Correct UserName and Password";
const SESSION_NOT_SAVED: &str = "Unable to save your session. Please try again.";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// Email for customers, username for admins.
    pub username: String,
    pub password: SecretString,
    pub user_type: UserType,
}

impl LoginForm {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>, user_type: UserType) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            user_type,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Submits credentials and routes the user on success.
///
/// Admin logins leave the storefront for the admin origin; every other
/// login lands on the products view.
#[derive(Clone)]
pub struct LoginController {
    api: ApiClient,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    admin_login_url: Url,
    state: FormState,
}

impl LoginController {
    #[must_use]
    pub fn new(
        api: ApiClient,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        admin_login_url: Url,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            admin_login_url,
            state: FormState::default(),
        }
    }

    /// Submit the form.
    ///
    /// A submit while another is pending does nothing. The session is
    /// written only after the backend accepted the credentials.
    #[instrument(skip(self, form), fields(username = %form.username, user_type = %form.user_type))]
    pub async fn submit(&self, form: LoginForm) -> Submission {
        let username = form.username.trim();
        if username.is_empty() || form.password.expose_secret().is_empty() {
            self.state.reject(MISSING_CREDENTIALS);
            return Submission::Invalid;
        }
        if !self.state.begin() {
            return Submission::Busy;
        }

        let request = LoginRequest::new(username, form.password, form.user_type);
        match self.api.login(&request).await {
            Ok(session) => {
                if let Err(e) = self.session.save(&session) {
                    error!("Failed to save session: {e}");
                    self.state.fail(SESSION_NOT_SAVED);
                    return Submission::Failed;
                }
                self.state.succeed("Login successful!");
                info!("Login succeeded");

                if request.user_type.is_admin() {
                    self.navigator.redirect(&self.admin_login_url);
                } else {
                    self.navigator.navigate(Route::Products);
                }
                Submission::Completed
            }
            Err(e) => {
                warn!("Login failed: {e}");
                let fallback = if e.is_domain() {
                    LOGIN_FAILED
                } else {
                    BAD_CREDENTIALS
                };
                self.state.fail(e.user_message(fallback));
                Submission::Failed
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.state.snapshot()
    }

    /// Messages and spinner for the current form state.
    #[must_use]
    pub fn render(&self) -> String {
        render::form_status(&self.state.snapshot())
    }
}

impl std::fmt::Debug for LoginController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginController")
            .field("admin_login_url", &self.admin_login_url.as_str())
            .field("status", &self.state.snapshot())
            .finish_non_exhaustive()
    }
}
