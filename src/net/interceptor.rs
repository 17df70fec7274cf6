//! Auth stage of the request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once by the app shell in front of the HTTP transport, so every
//! API call (auth and tasks alike) carries the stored bearer token and every
//! 401/403 ends the local session.
//!
//! The request rewrite ([`AuthInterceptor::authorize`]) and the rejection side
//! effect ([`AuthInterceptor::on_session_rejected`]) are separate so each can be
//! exercised alone. Failures are observed, never retried.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::sync::Arc;

use futures::future::{FutureExt as _, LocalBoxFuture};

use super::pipeline::{ApiRequest, ApiResult, Interceptor, Next};
use crate::config::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::util::auth::Navigator;

/// Header carrying the bearer credential.
pub const AUTHORIZATION: &str = "Authorization";

/// Attaches `Authorization: Bearer <token>` and enforces session rejection.
#[derive(Clone)]
pub struct AuthInterceptor {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl AuthInterceptor {
    pub fn new(session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Add the bearer header when a token is stored; otherwise return the
    /// request untouched.
    pub fn authorize(&self, request: ApiRequest) -> ApiRequest {
        match self.session.token() {
            Some(token) => request.with_header(AUTHORIZATION, bearer(&token)),
            None => request,
        }
    }

    /// Clear the session and send the user back to login.
    pub fn on_session_rejected(&self) {
        leptos::logging::warn!("session rejected by API; redirecting to login");
        self.session.clear();
        self.navigator.navigate(LOGIN_PATH);
    }
}

impl Interceptor for AuthInterceptor {
    fn intercept<'a>(&'a self, request: ApiRequest, next: Next<'a>) -> LocalBoxFuture<'a, ApiResult> {
        let request = self.authorize(request);
        async move {
            let outcome = next.run(request).await;
            if let Err(err) = &outcome {
                if err.is_session_rejection() {
                    self.on_session_rejected();
                }
            }
            outcome
        }
        .boxed_local()
    }
}

/// `Bearer <token>` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
