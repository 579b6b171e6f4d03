//! Client-side routes and navigation.

use std::sync::{Mutex, PoisonError};

use url::Url;

/// A view inside the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Products,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Products => "/products",
        }
    }

    /// Route for a path, ignoring a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        [Self::Home, Self::Login, Self::Register, Self::Products]
            .into_iter()
            .find(|route| route.path().trim_end_matches('/') == trimmed)
    }
}

/// Moves the user between views, or off to another origin.
pub trait Navigator: Send + Sync {
    /// Switch to an in-app route.
    fn navigate(&self, route: Route);

    /// Leave the storefront for `url`.
    fn redirect(&self, url: &Url);
}

/// One recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Route(Route),
    External(Url),
}

/// A [`Navigator`] that records every call.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    history: Mutex<Vec<Navigation>>,
}

impl MemoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every navigation so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Navigation> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<Navigation> {
        self.history().pop()
    }

    fn push(&self, navigation: Navigation) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(navigation);
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        self.push(Navigation::Route(route));
    }

    fn redirect(&self, url: &Url) {
        tracing::debug!(%url, "redirect");
        self.push(Navigation::External(url.clone()));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("/products/"), Some(Route::Products));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/checkout"), None);
    }

    #[test]
    fn test_memory_navigator_history() {
        let navigator = MemoryNavigator::new();
        assert_eq!(navigator.last(), None);

        navigator.navigate(Route::Login);
        let admin = Url::parse("http://localhost:8080/login").unwrap();
        navigator.redirect(&admin);

        assert_eq!(
            navigator.history(),
            vec![Navigation::Route(Route::Login), Navigation::External(admin)]
        );
    }
}
