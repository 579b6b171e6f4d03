use grocery_core::EnvelopeError;
use thiserror::Error;

/// Errors that can occur when talking to the REST backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error: {status}{}", .message.as_ref().map(|m| format!(" - {m}")).unwrap_or_default())]
    Status {
        status: u16,
        /// `message` from the error envelope, when the body carried one.
        message: Option<String>,
    },

    /// The backend answered `success: false`.
    #[error("{}", .message.as_deref().unwrap_or("request was not successful"))]
    Domain { message: Option<String> },

    /// The body was not the expected JSON.
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-supplied explanation, if the backend sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Domain { message } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Text to show the user: the server message, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Whether the backend itself reported `success: false` on a 2xx response.
    ///
    /// Everything else (no response, error status, garbage body) is the
    /// request failing rather than the operation being refused.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// Whether no usable answer came back at all: the request failed in
    /// flight or the body could not be read as an envelope.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Rejected { message } => Self::Domain { message },
            EnvelopeError::MissingData => Self::Decode(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("Failed to parse response: {err}"))
    }
}
