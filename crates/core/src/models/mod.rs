//! Records exchanged with the REST backend.
//!
//! Field names follow the backend's camelCase JSON. Records are passed
//! through unchanged; anything the client derives (selected quantities,
//! cart lines) lives in the controllers, not here.

mod auth;
mod catalog;
mod customer;
mod order;
mod timestamp;

pub use auth::{LoginRequest, RegisterRequest, Session};
pub use catalog::{Availability, Product};
pub use customer::Customer;
pub use order::{Order, OrderStatistics};
