//! Route guard and navigation seam for auth redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes call [`AuthGuard::check`] on every entry so a cleared
//! session (logout, or a 401/403 seen by the interceptor) is noticed on the
//! very next navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::config::LOGIN_PATH;
use crate::net::auth::AuthService;

/// Something that can move the user to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigates by assigning `window.location`; no-op off-browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// Result of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed,
    Denied,
}

impl GuardOutcome {
    pub fn from_logged_in(logged_in: bool) -> Self {
        if logged_in { Self::Allowed } else { Self::Denied }
    }

    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }
}

/// Gate for the protected task routes.
#[derive(Clone)]
pub struct AuthGuard {
    auth: AuthService,
    navigator: Arc<dyn Navigator>,
}

impl AuthGuard {
    pub fn new(auth: AuthService, navigator: Arc<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }

    /// Allow when [`AuthService::is_logged_in`]; otherwise redirect to login
    /// and deny. Never cached: every call re-reads the session.
    pub fn check(&self) -> GuardOutcome {
        let outcome = GuardOutcome::from_logged_in(self.auth.is_logged_in());
        if outcome == GuardOutcome::Denied {
            self.navigator.navigate(LOGIN_PATH);
        }
        outcome
    }
}
