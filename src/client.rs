//! Pocket client facade
//!
//! Bundles a sender, credentials and configuration and exposes the two
//! usual projections of a retrieval.

use crate::config::{ClientConfig, Credentials};
use crate::decode::Item;
use crate::error::Result;
use crate::http::{HttpSender, ReqwestSender};
use crate::pager::Retriever;
use crate::projection::{FullItem, Link, Projection};
use crate::types::{Retrieval, Since};
use std::fmt;
use std::sync::Arc;

/// Shared sender handle
pub type SharedSender = Arc<dyn HttpSender>;

/// Entry point for retrieving a reading list
#[derive(Clone)]
pub struct Pocket {
    retriever: Retriever<SharedSender, FullItem>,
}

impl Pocket {
    /// Create a client with default settings and the reqwest transport
    pub fn new(consumer_key: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(
            &Credentials::new(consumer_key, access_token),
            &ClientConfig::default(),
        )
    }

    /// Create a client from explicit configuration
    pub fn with_config(credentials: &Credentials, config: &ClientConfig) -> Result<Self> {
        let sender = ReqwestSender::with_config(&config.http)?;
        Self::with_sender(credentials, config, Arc::new(sender))
    }

    /// Create a client over any transport
    pub fn with_sender(
        credentials: &Credentials,
        config: &ClientConfig,
        sender: SharedSender,
    ) -> Result<Self> {
        Ok(Self {
            retriever: Retriever::new(sender, credentials, config, FullItem)?,
        })
    }

    /// Every item changed since `since`, with all fields
    pub async fn retrieve(&self, since: Since) -> Result<Retrieval<Item>> {
        self.retriever.retrieve(since).await
    }

    /// Best link of every item changed since `since`
    pub async fn retrieve_links(&self, since: Since) -> Result<Retrieval<String>> {
        self.retriever(Link).retrieve(since).await
    }

    /// A retriever with a custom projection sharing this client's transport
    pub fn retriever<P: Projection>(&self, projection: P) -> Retriever<SharedSender, P> {
        self.retriever.clone().with_projection(projection)
    }
}

impl fmt::Debug for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pocket")
            .field("count", &self.retriever.count())
            .finish_non_exhaustive()
    }
}
