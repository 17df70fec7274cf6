//! Error type shared by every API call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a request somewhere in the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, body: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// No HTTP transport exists in this build (native/test).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of a server-side failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the server refused the session credential (401 or 403).
    pub fn is_session_rejection(&self) -> bool {
        self.status().is_some_and(is_session_rejection_status)
    }
}

/// 401 and 403 both mean the stored token is no longer usable.
pub fn is_session_rejection_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}
