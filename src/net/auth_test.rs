use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use futures::future::{FutureExt as _, LocalBoxFuture};

use super::*;
use crate::net::pipeline::{ApiRequest, ApiResponse, ApiResult, Method, Pipeline, Transport};
use crate::net::types::AuthUser;

struct StubTransport {
    seen: Mutex<Vec<ApiRequest>>,
    outcome: ApiResult,
}

impl Transport for StubTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, ApiResult> {
        self.seen.lock().unwrap().push(request);
        let outcome = self.outcome.clone();
        async move { outcome }.boxed_local()
    }
}

fn service(outcome: ApiResult) -> (AuthService, Arc<StubTransport>) {
    let transport = Arc::new(StubTransport {
        seen: Mutex::new(Vec::new()),
        outcome,
    });
    let client = ApiClient::new(Pipeline::new(transport.clone()));
    (AuthService::new(client, SessionStore::in_memory()), transport)
}

fn ok_body() -> ApiResult {
    Ok(ApiResponse::new(
        200,
        r#"{"token":"abc","user":{"id":"u-1","email":"user@test.com"}}"#,
    ))
}

fn authenticated() -> AuthResponse {
    AuthResponse {
        token: Some("abc".to_owned()),
        user: Some(AuthUser {
            id: "u-1".to_owned(),
            email: "user@test.com".to_owned(),
        }),
    }
}

#[test]
fn login_posts_email_to_login_endpoint() {
    let (auth, transport) = service(ok_body());
    let resp = block_on(auth.login("user@test.com")).unwrap();
    assert_eq!(resp, authenticated());
    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen[0].method, Method::Post);
    assert_eq!(seen[0].path, "/auth/login");
    assert_eq!(seen[0].body, Some(serde_json::json!({ "email": "user@test.com" })));
}

#[test]
fn register_posts_email_to_register_endpoint() {
    let (auth, transport) = service(ok_body());
    block_on(auth.register("new@test.com")).unwrap();
    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen[0].path, "/auth/register");
    assert_eq!(seen[0].body, Some(serde_json::json!({ "email": "new@test.com" })));
}

#[test]
fn login_then_save_marks_user_logged_in() {
    let (auth, _) = service(ok_body());
    assert!(!auth.is_logged_in());
    let resp = block_on(auth.login("user@test.com")).unwrap();
    assert!(auth.save_session(&resp));
    assert!(auth.is_logged_in());
    assert_eq!(auth.token().as_deref(), Some("abc"));
    assert_eq!(auth.user_email().as_deref(), Some("user@test.com"));
    assert_eq!(auth.user_id().as_deref(), Some("u-1"));
}

#[test]
fn login_failure_is_surfaced_unchanged() {
    let failure = ApiError::Status { status: 500, body: "oops".to_owned() };
    let (auth, _) = service(Err(failure.clone()));
    assert_eq!(block_on(auth.login("user@test.com")), Err(failure));
    assert!(!auth.is_logged_in());
}

#[test]
fn logout_clears_token_and_email() {
    let (auth, _) = service(ok_body());
    auth.save_token("abc", "user@test.com");
    assert!(auth.is_logged_in());
    auth.logout();
    assert_eq!(auth.token(), None);
    assert_eq!(auth.user_email(), None);
    assert!(!auth.is_logged_in());
}

#[test]
fn save_session_rejects_incomplete_responses() {
    let (auth, _) = service(ok_body());
    assert!(!auth.save_session(&AuthResponse::default()));
    assert!(!auth.save_session(&AuthResponse {
        token: Some(String::new()),
        ..authenticated()
    }));
    assert!(!auth.save_session(&AuthResponse { user: None, ..authenticated() }));
    assert!(!auth.is_logged_in());
}

#[test]
fn classify_login_authenticated() {
    assert_eq!(classify_login(Ok(authenticated())), LoginOutcome::Authenticated(authenticated()));
}

#[test]
fn classify_login_unknown_account_on_404_or_tokenless_body() {
    let not_found = ApiError::Status { status: 404, body: String::new() };
    assert_eq!(classify_login(Err(not_found)), LoginOutcome::UnknownAccount);
    assert_eq!(classify_login(Ok(AuthResponse::default())), LoginOutcome::UnknownAccount);
}

#[test]
fn classify_login_other_errors_fail() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(classify_login(Err(err.clone())), LoginOutcome::Failed(err));
}

#[test]
fn login_with_null_user_id_still_authenticates() {
    let (auth, _) = service(Ok(ApiResponse::new(
        200,
        r#"{"token":"abc","user":{"id":null,"email":"a@b.co"}}"#,
    )));
    let outcome = classify_login(block_on(auth.login("a@b.co")));
    let LoginOutcome::Authenticated(resp) = outcome else {
        panic!("expected authenticated, got {outcome:?}");
    };
    assert!(auth.save_session(&resp));
    assert_eq!(auth.user_email().as_deref(), Some("a@b.co"));
    assert_eq!(auth.user_id(), None);
}
