//! Request pipeline: request/response values, the transport seam, and
//! interceptor stages composed in front of it.
//!
//! ARCHITECTURE
//! ============
//! A [`Pipeline`] holds an ordered list of [`Interceptor`] stages and one
//! terminal [`Transport`]. Each stage receives the request plus a [`Next`]
//! handle for the remainder of the chain, so a stage can rewrite the request,
//! observe the outcome, or both. Stages run in registration order.
//!
//! Futures are `!Send` (`LocalBoxFuture`) because the browser transport is
//! single-threaded; the stage objects themselves are `Send + Sync` so the
//! pipeline can be shared through Leptos context.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::sync::Arc;

use futures::future::{FutureExt as _, LocalBoxFuture};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Outcome of sending a request through the pipeline.
pub type ApiResult = Result<ApiResponse, ApiError>;

/// HTTP verbs used by the task API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// An outgoing API request. `path` is relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Set a header, replacing any existing value (names compare case-insensitively).
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A successful (2xx) response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Terminal stage that actually performs the request.
///
/// Implementations report any non-2xx response as [`ApiError::Status`].
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, ApiResult>;
}

/// One stage wrapping every request and its outcome.
pub trait Interceptor: Send + Sync {
    fn intercept<'a>(&'a self, request: ApiRequest, next: Next<'a>) -> LocalBoxFuture<'a, ApiResult>;
}

/// Remainder of the chain after the current stage.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    stages: &'a [Arc<dyn Interceptor>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    /// Hand the request to the following stage, or to the transport.
    pub fn run(self, request: ApiRequest) -> LocalBoxFuture<'a, ApiResult> {
        match self.stages.split_first() {
            Some((stage, rest)) => stage.intercept(
                request,
                Next {
                    stages: rest,
                    transport: self.transport,
                },
            ),
            None => self.transport.send(request),
        }
    }
}

/// Ordered interceptor stages in front of a transport.
#[derive(Clone)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Interceptor>>,
    transport: Arc<dyn Transport>,
}

impl Pipeline {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            stages: Vec::new(),
            transport,
        }
    }

    /// Append a stage; it runs after every stage added before it.
    #[must_use]
    pub fn with_stage(mut self, stage: Arc<dyn Interceptor>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, ApiResult> {
        Next {
            stages: &self.stages,
            transport: self.transport.as_ref(),
        }
        .run(request)
    }
}

/// JSON convenience layer over a [`Pipeline`].
#[derive(Clone)]
pub struct ApiClient {
    pipeline: Pipeline,
}

impl ApiClient {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Propagates pipeline failures and body decode errors.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.pipeline.send(ApiRequest::get(path)).await?.json()
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates encode, pipeline and decode failures.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(Method::Post, path).with_json(body)?;
        self.pipeline.send(request).await?.json()
    }

    /// `PUT path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates encode, pipeline and decode failures.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(Method::Put, path).with_json(body)?;
        self.pipeline.send(request).await?.json()
    }

    /// `DELETE path`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Propagates pipeline failures.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.pipeline.send(ApiRequest::delete(path)).await.map(|_| ())
    }
}

/// Transport for builds without a browser; every request fails with
/// [`ApiError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

impl Transport for UnavailableTransport {
    fn send(&self, _request: ApiRequest) -> LocalBoxFuture<'_, ApiResult> {
        async { Err(ApiError::Unavailable) }.boxed_local()
    }
}
