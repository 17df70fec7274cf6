//! Browser HTTP transport.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`UnavailableTransport`] stands in so the rest of the
//! pipeline still links and can be unit tested.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;

#[cfg(feature = "csr")]
use futures::future::FutureExt as _;
#[cfg(feature = "csr")]
use futures::future::LocalBoxFuture;

#[cfg(feature = "csr")]
use super::error::ApiError;
use super::pipeline::Transport;
#[cfg(feature = "csr")]
use super::pipeline::{ApiRequest, ApiResult, Method};

/// Join the API origin and a request path with exactly one slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `fetch`-backed transport rooted at the API base URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[cfg(feature = "csr")]
impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, ApiResult> {
        let url = self.url_for(&request.path);
        async move {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
                Method::Delete => gloo_net::http::Request::delete(&url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let sent = match &request.body {
                Some(body) => builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                return Err(ApiError::Status { status, body });
            }
            Ok(super::pipeline::ApiResponse { status, body })
        }
        .boxed_local()
    }
}

/// Transport used by the app shell for this build target.
pub fn default_transport(base_url: &str) -> Arc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        Arc::new(HttpTransport::new(base_url))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = base_url;
        Arc::new(super::pipeline::UnavailableTransport)
    }
}
