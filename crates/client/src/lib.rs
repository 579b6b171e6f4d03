//! Grocery Client - shared runtime for the admin dashboard and storefront.
//!
//! This crate owns everything that touches the outside world:
//! - [`api`] - the REST gateway client (cookies, envelope unwrapping, error taxonomy)
//! - [`session`] - the client-persisted user session record
//! - [`config`] - environment-driven configuration
//! - [`telemetry`] - tracing subscriber setup
//!
//! Controllers in `grocery-admin` and `grocery-storefront` hold an
//! [`api::ApiClient`] and, where gated actions need it, a shared
//! [`session::SessionStore`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod session;
pub mod telemetry;

pub use api::{ApiClient, ApiError};
pub use config::{ClientConfig, ConfigError};
pub use session::{SessionError, SessionStore};
