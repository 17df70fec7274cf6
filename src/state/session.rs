//! Session record persisted between page loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard on every navigation and by the auth interceptor on
//! every request; written by the login flow; cleared by logout and by the
//! interceptor when the API rejects the token.
//!
//! INVARIANTS
//! ==========
//! `token`, `userEmail` and `userId` are written and cleared together. An
//! empty stored string reads back as absent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::config::{TOKEN_KEY, USER_EMAIL_KEY, USER_ID_KEY};
use crate::util::storage::{BrowserStorage, KeyValueStore, MemoryStore};

/// The signed-in user's credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_email: String,
    /// Owning-user id attached to created tasks. Empty when the API did not
    /// return one.
    pub user_id: String,
}

/// Shared handle to the session keys of a [`KeyValueStore`].
///
/// Cloning is cheap; all clones see the same storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("logged_in", &self.token().is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Session persisted in the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Session held only in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Persist all session fields.
    pub fn set(&self, session: &Session) {
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(USER_EMAIL_KEY, &session.user_email);
        if session.user_id.is_empty() {
            self.storage.remove(USER_ID_KEY);
        } else {
            self.storage.set(USER_ID_KEY, &session.user_id);
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn user_email(&self) -> Option<String> {
        self.read(USER_EMAIL_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.read(USER_ID_KEY)
    }

    /// Full record, present only when a token is stored.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            user_email: self.user_email().unwrap_or_default(),
            user_id: self.user_id().unwrap_or_default(),
        })
    }

    /// Remove every session key. Unrelated keys are left alone.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_EMAIL_KEY);
        self.storage.remove(USER_ID_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }
}
