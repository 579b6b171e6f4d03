//! Grocery Storefront library.
//!
//! Customer-facing controllers: the app shell (auth status, logout), login,
//! registration, the home page and product browsing. Controllers keep their
//! own state, talk to the backend through [`grocery_client::ApiClient`] and
//! move the user around through a [`routes::Navigator`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod filters;
pub mod forms;
pub mod home;
pub mod login;
pub mod products;
pub mod register;
pub mod render;
pub mod routes;
pub mod shell;

pub use login::{LoginController, LoginForm};
pub use products::ProductsController;
pub use register::{RegisterController, RegisterForm};
pub use routes::{MemoryNavigator, Navigation, Navigator, Route};
pub use shell::AppShell;
