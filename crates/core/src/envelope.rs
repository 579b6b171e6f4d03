//! The uniform response wrapper used by every backend endpoint.
//!
//! ```json
//! { "success": true, "message": "All products retrieved", "data": [...] }
//! { "success": false, "message": "Product not found", "data": null }
//! ```
//!
//! `success: false` is a domain failure, distinct from a transport failure
//! or an HTTP error status. [`ApiEnvelope::into_result`] turns the envelope
//! into a plain `Result` once the caller has decided the transport worked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an envelope did not yield a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The backend reported `success: false`.
    #[error("{}", .message.as_deref().unwrap_or("request was not successful"))]
    Rejected {
        /// Server-supplied explanation, if any.
        message: Option<String>,
    },
    /// The backend reported success but sent no `data`.
    #[error("response reported success without data")]
    MissingData,
}

/// `{success, data, message}` response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    /// Technical error detail some endpoints attach alongside `message`.
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// A failed envelope carrying only a message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    /// The server message, ignoring blank strings.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Unwrap the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::Rejected`] when `success` is false,
    /// [`EnvelopeError::MissingData`] when a success carries no `data`.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if !self.success {
            let message = self.message().map(str::to_owned);
            return Err(EnvelopeError::Rejected { message });
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }
}
