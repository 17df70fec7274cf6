use std::sync::Mutex;

use super::*;
use crate::net::pipeline::{ApiClient, Pipeline, UnavailableTransport};
use crate::state::session::{Session, SessionStore};

#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_owned());
    }
}

fn guard() -> (AuthGuard, SessionStore, Arc<RecordingNavigator>) {
    let session = SessionStore::in_memory();
    let navigator = Arc::new(RecordingNavigator::default());
    let auth = AuthService::new(
        ApiClient::new(Pipeline::new(Arc::new(UnavailableTransport))),
        session.clone(),
    );
    (AuthGuard::new(auth, navigator.clone()), session, navigator)
}

fn sign_in(session: &SessionStore, token: &str) {
    session.set(&Session {
        token: token.to_owned(),
        user_email: "user@test.com".to_owned(),
        user_id: String::new(),
    });
}

#[test]
fn denies_and_redirects_without_token() {
    let (guard, _, navigator) = guard();
    assert_eq!(guard.check(), GuardOutcome::Denied);
    assert_eq!(navigator.visited(), vec!["/login".to_owned()]);
}

#[test]
fn allows_any_stored_token_without_redirect() {
    let (guard, session, navigator) = guard();
    sign_in(&session, "possibly-expired");
    assert_eq!(guard.check(), GuardOutcome::Allowed);
    assert!(navigator.visited().is_empty());
}

#[test]
fn re_evaluates_on_every_check() {
    let (guard, session, navigator) = guard();
    sign_in(&session, "abc");
    assert!(guard.check().is_allowed());
    session.clear();
    assert!(!guard.check().is_allowed());
    sign_in(&session, "def");
    assert!(guard.check().is_allowed());
    assert_eq!(navigator.visited().len(), 1);
}

#[test]
fn each_denied_attempt_redirects_again() {
    let (guard, _, navigator) = guard();
    guard.check();
    guard.check();
    assert_eq!(navigator.visited(), vec!["/login".to_owned(), "/login".to_owned()]);
}

#[test]
fn outcome_from_logged_in_flag() {
    assert_eq!(GuardOutcome::from_logged_in(true), GuardOutcome::Allowed);
    assert_eq!(GuardOutcome::from_logged_in(false), GuardOutcome::Denied);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_navigator_is_noop_off_browser() {
    BrowserNavigator.navigate("/login");
}
