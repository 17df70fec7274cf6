//! Email login/registration and session bookkeeping.
//!
//! ERROR HANDLING
//! ==============
//! Network and server failures come back unchanged as [`ApiError`]; callers
//! decide what to show. [`classify_login`] turns the one meaningful failure (404
//! = unknown account) into an explicit outcome for the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::pipeline::ApiClient;
use super::types::{AuthResponse, EmailRequest};
use crate::state::session::{Session, SessionStore};

const LOGIN_ENDPOINT: &str = "/auth/login";
const REGISTER_ENDPOINT: &str = "/auth/register";

/// What the login page should do after a login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials issued; the response carries token and user.
    Authenticated(AuthResponse),
    /// No account for this email; offer registration.
    UnknownAccount,
    Failed(ApiError),
}

/// Interpret the result of [`AuthService::login`].
pub fn classify_login(result: Result<AuthResponse, ApiError>) -> LoginOutcome {
    match result {
        Ok(resp) if session_from_response(&resp).is_some() => LoginOutcome::Authenticated(resp),
        Ok(_) => LoginOutcome::UnknownAccount,
        Err(err) if err.is_not_found() => LoginOutcome::UnknownAccount,
        Err(err) => LoginOutcome::Failed(err),
    }
}

/// Session record carried by an auth response, if it has a token and user.
pub fn session_from_response(resp: &AuthResponse) -> Option<Session> {
    let token = resp.token.as_deref().filter(|t| !t.is_empty())?;
    let user = resp.user.as_ref()?;
    Some(Session {
        token: token.to_owned(),
        user_email: user.email.clone(),
        user_id: user.id.clone(),
    })
}

/// Session query service: auth calls plus token save/read/clear.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Create an account for `email` via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error unchanged.
    pub async fn register(&self, email: &str) -> Result<AuthResponse, ApiError> {
        self.client.post_json(REGISTER_ENDPOINT, &EmailRequest { email }).await
    }

    /// Sign in with `email` via `POST /auth/login`. A 404 means the account
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error unchanged.
    pub async fn login(&self, email: &str) -> Result<AuthResponse, ApiError> {
        self.client.post_json(LOGIN_ENDPOINT, &EmailRequest { email }).await
    }

    /// Store a token/email pair. Any previously stored user id is dropped.
    pub fn save_token(&self, token: &str, email: &str) {
        self.session.set(&Session {
            token: token.to_owned(),
            user_email: email.to_owned(),
            user_id: String::new(),
        });
    }

    /// Store the full session from an auth response. Returns `false` when the
    /// response lacks a token or user.
    pub fn save_session(&self, resp: &AuthResponse) -> bool {
        match session_from_response(resp) {
            Some(session) => {
                self.session.set(&session);
                true
            }
            None => false,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    pub fn user_email(&self) -> Option<String> {
        self.session.user_email()
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.user_id()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn logout(&self) {
        self.session.clear();
    }
}
