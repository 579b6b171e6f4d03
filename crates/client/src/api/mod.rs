//! REST gateway client for the grocery backend.
//!
//! Every endpoint answers with the `{success, data, message}` envelope
//! from [`grocery_core::ApiEnvelope`]. The client keeps three failure
//! shapes apart:
//!
//! - the request never got a response ([`ApiError::Transport`])
//! - the backend answered with an error status ([`ApiError::Status`])
//! - the backend answered 2xx with `success: false` ([`ApiError::Domain`])
//!
//! # Cookies
//!
//! A cookie store is enabled so the backend's session cookie set by
//! `POST /api/auth/login` rides along on every later call.

mod endpoints;
mod error;

pub use error::ApiError;

use std::sync::Arc;

use grocery_core::ApiEnvelope;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;

/// REST gateway client.
///
/// Cheap to clone; clones share one connection pool and cookie jar.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_base_url.clone(),
            }),
        })
    }

    /// The backend origin requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url.as_str().trim_end_matches('/'))
    }

    /// Issue a request and decode the response envelope.
    ///
    /// The envelope is returned as-is, so `success: false` on a 2xx
    /// response is still `Ok` here; the typed endpoints turn it into
    /// [`ApiError::Domain`].
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when no response arrives,
    /// [`ApiError::Status`] for non-2xx responses and
    /// [`ApiError::Decode`] when a 2xx body is not an envelope.
    #[instrument(skip(self, body))]
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let mut builder = self.inner.client.request(method, self.url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), len = bytes.len(), "response received");

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        Err(Self::parse_error(status.as_u16(), &bytes))
    }

    /// GET and unwrap the payload.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(self
            .request::<T, ()>(Method::GET, path, None)
            .await?
            .into_result()?)
    }

    /// POST a JSON body and unwrap the payload.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Ok(self
            .request::<T, B>(Method::POST, path, Some(body))
            .await?
            .into_result()?)
    }

    /// Send a request whose only interesting outcome is success.
    ///
    /// A 2xx with an empty body counts as success; a body that is an
    /// envelope must say `success: true`.
    pub(crate) async fn send_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let response = self.inner.client.request(method, self.url(path)).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::parse_error(status.as_u16(), &bytes));
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }

        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_slice(&bytes)?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Domain {
                message: envelope.message().map(str::to_owned),
            })
        }
    }

    /// Build a status error, keeping the envelope message when there is one.
    fn parse_error(status: u16, body: &[u8]) -> ApiError {
        let message = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message().map(str::to_owned));
        ApiError::Status { status, message }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}
