//! reqwest-backed sender
//!
//! Sends one request per call. Status codes are returned as-is; the retriever
//! decides what a non-200 means.

use super::types::{HttpRequest, HttpResponse, HttpSender};
use crate::config::{duration_ms, HttpConfig};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Builder for [`ReqwestSender`]
#[derive(Debug, Default)]
pub struct ReqwestSenderBuilder {
    config: HttpConfig,
}

impl ReqwestSenderBuilder {
    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = duration_ms(timeout);
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the sender
    pub fn build(self) -> Result<ReqwestSender> {
        ReqwestSender::with_config(&self.config)
    }
}

/// Default transport over a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestSender {
    client: Client,
}

impl ReqwestSender {
    /// Create a sender with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Create a sender from transport settings
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Create a builder
    pub fn builder() -> ReqwestSenderBuilder {
        ReqwestSenderBuilder::default()
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let response = self
            .client
            .request(method.clone(), &url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(Error::Http)?;

        debug!("{} {} -> {}", method, url, status);
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
