//! Registration form controller.

use std::sync::Arc;
use std::time::Duration;

use grocery_client::ApiClient;
use grocery_core::{Email, EmailError, RegisterRequest};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::forms::{FormState, FormStatus, Submission};
use crate::render;
use crate::routes::{Navigator, Route};

/// Delay between a successful registration and the move to the login view.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

const REGISTERED: &str = "Registration successful! Redirecting to login...";
const REGISTRATION_FAILED: &str = "Registration failed";
const REGISTRATION_UNREACHABLE: &str = "Registration failed. Please try again.";

// =============================================================================
// Form Types
// =============================================================================

/// Registration form data.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub address: String,
    pub contact_number: String,
}

/// Why a registration form was not sent.
#[derive(Debug, Error)]
pub enum RegisterFormError {
    #[error("Please enter your full name")]
    MissingName,

    #[error("Please enter a valid email address")]
    InvalidEmail(#[source] EmailError),

    #[error("Please enter a password")]
    MissingPassword,
}

impl RegisterForm {
    /// Check the fields the backend cannot do without.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in form order.
    pub fn validate(self) -> Result<RegisterRequest, RegisterFormError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(RegisterFormError::MissingName);
        }
        let email = Email::parse(&self.email).map_err(RegisterFormError::InvalidEmail)?;
        if self.password.expose_secret().is_empty() {
            return Err(RegisterFormError::MissingPassword);
        }

        Ok(RegisterRequest {
            full_name: full_name.to_string(),
            email,
            password: self.password,
            address: self.address.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
        })
    }
}

// =============================================================================
// Controller
// =============================================================================

#[derive(Clone)]
pub struct RegisterController {
    api: ApiClient,
    navigator: Arc<dyn Navigator>,
    state: FormState,
}

impl RegisterController {
    #[must_use]
    pub fn new(api: ApiClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            navigator,
            state: FormState::default(),
        }
    }

    /// Submit the form.
    ///
    /// On success the confirmation is shown at once and the move to the
    /// login view happens [`REDIRECT_DELAY`] later.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn submit(&self, form: RegisterForm) -> Submission {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.state.reject(e.to_string());
                return Submission::Invalid;
            }
        };
        if !self.state.begin() {
            return Submission::Busy;
        }

        match self.api.register_customer(&request).await {
            Ok(customer) => {
                info!(customer_id = %customer.customer_id, "Customer registered");
                self.state.succeed(REGISTERED);

                let deadline = tokio::time::Instant::now() + REDIRECT_DELAY;
                let navigator = Arc::clone(&self.navigator);
                tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    navigator.navigate(Route::Login);
                });
                Submission::Completed
            }
            Err(e) => {
                warn!("Registration failed: {e}");
                let fallback = if e.is_domain() {
                    REGISTRATION_FAILED
                } else {
                    REGISTRATION_UNREACHABLE
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

impl std::fmt::Debug for RegisterController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterController")
            .field("status", &self.state.snapshot())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grocery_client::ClientConfig;
    use url::Url;

    use super::*;
    use crate::routes::MemoryNavigator;

    fn form(full_name: &str, email: &str, password: &str) -> RegisterForm {
        RegisterForm {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: SecretString::from(password),
            address: " 12 Analytical Way ".to_string(),
            contact_number: "5550100".to_string(),
        }
    }

    #[test]
    fn test_validate_builds_request() {
        let request = form(" Ada Lovelace ", "ada@grocer.test", "hunter22")
            .validate()
            .unwrap();
        assert_eq!(request.full_name, "Ada Lovelace");
        assert_eq!(request.email.as_str(), "ada@grocer.test");
        assert_eq!(request.address, "12 Analytical Way");
    }

    #[test]
    fn test_validate_reports_first_problem() {
        assert!(matches!(
            form("", "not-an-email", "").validate(),
            Err(RegisterFormError::MissingName)
        ));
        assert!(matches!(
            form("Ada", "not-an-email", "").validate(),
            Err(RegisterFormError::InvalidEmail(_))
        ));
        assert!(matches!(
            form("Ada", "ada@grocer.test", "").validate(),
            Err(RegisterFormError::MissingPassword)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_sends_nothing() {
        let navigator = Arc::new(MemoryNavigator::new());
        let config = ClientConfig::new(Url::parse("http://127.0.0.1:9").unwrap());
        let register = RegisterController::new(ApiClient::new(&config).unwrap(), navigator.clone());

        let outcome = register.submit(form("Ada", "nope", "pw")).await;
        assert_eq!(outcome, Submission::Invalid);
        assert_eq!(
            register.status().error_message.as_deref(),
            Some("Please enter a valid email address")
        );

        tokio::time::advance(REDIRECT_DELAY * 2).await;
        assert!(navigator.history().is_empty());
    }
}
