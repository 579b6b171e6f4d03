//! Grocery Core - Shared types library.
//!
//! This crate provides the types used by every grocery ordering client:
//! - `client` - API gateway client and session store
//! - `admin` - Admin dashboard controllers and renderers
//! - `storefront` - Customer-facing login, registration and product browsing
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! Everything here is decoded from or encoded to the REST backend's JSON.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, money and statuses
//! - [`models`] - Records passed through from the REST API
//! - [`envelope`] - The uniform `{success, data, message}` response wrapper

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod envelope;
pub mod models;
pub mod types;

pub use envelope::{ApiEnvelope, EnvelopeError};
pub use models::*;
pub use types::*;
