//! Build-time configuration and shared constants.
//!
//! The API base URL is baked in at compile time from
//! `STICKY_TASKS_API_URL`; there is no runtime config file in the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback API origin used when `STICKY_TASKS_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the signed-in user's email.
pub const USER_EMAIL_KEY: &str = "userEmail";
/// Storage key holding the signed-in user's id.
pub const USER_ID_KEY: &str = "userId";

/// Background color applied to notes without a valid color.
pub const DEFAULT_NOTE_COLOR: &str = "#fff9c4";

/// Route of the public login screen.
pub const LOGIN_PATH: &str = "/login";
/// Route of the protected task list.
pub const TASKS_PATH: &str = "/tasks";

/// Remote API origin, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("STICKY_TASKS_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
