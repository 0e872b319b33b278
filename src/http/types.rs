//! Transport value types and the sender capability

use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use std::sync::Arc;

/// A request ready to be sent
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Serialized body
    pub body: String,
}

impl HttpRequest {
    /// Create a POST request with a JSON body
    pub fn post_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Parse the body back into JSON
    pub fn json_body(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// What came back from the server
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Create a 200 response with a JSON body
    pub fn ok_json(body: &serde_json::Value) -> Self {
        Self::new(200, body.to_string())
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Get a header as a string, empty if absent or not valid text
    pub fn header_str(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// Capability to perform one HTTP exchange.
///
/// Implementations own connection handling, deadlines and cancellation. An
/// exchange that produced a response of any status must return `Ok`; `Err`
/// is reserved for failures to complete the exchange.
#[async_trait]
pub trait HttpSender: Send + Sync {
    /// Send a request and return the raw response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: HttpSender + ?Sized> HttpSender for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: HttpSender + ?Sized> HttpSender for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request).await
    }
}
