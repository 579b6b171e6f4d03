//! Grocery Admin - dashboard library.
//!
//! The dashboard is a single page split into sections. Each section owns a
//! controller that fetches from the REST backend, keeps the last full fetch
//! as its cache and re-renders its region of the page through a
//! [`view::DashboardView`].
//!
//! # Modules
//!
//! - [`sections`] - section names and the section controller
//! - [`controllers`] - per-section data loads, searches and actions
//! - [`render`] - askama renderers, one per collection
//! - [`alerts`] - transient, self-dismissing notifications
//! - [`view`] - the rendering surface the controllers drive

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod alerts;
pub mod controllers;
pub mod filters;
pub mod render;
pub mod sections;
pub mod view;

pub use alerts::{Alert, AlertId, AlertStack};
pub use controllers::AdminContext;
pub use sections::{Section, SectionController};
pub use view::{DashboardView, MemoryView, Region};
