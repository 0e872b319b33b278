//! Paginated retrieval loop

use super::types::Progress;
use crate::config::{ClientConfig, Credentials};
use crate::decode::{Page, PageOutcome};
use crate::error::{Error, Result};
use crate::http::HttpSender;
use crate::projection::{FullItem, Projection};
use crate::request::RequestTemplate;
use crate::types::{Retrieval, Since};
use tracing::{debug, info, warn};

/// Retrieves every item changed since a cursor.
///
/// Holds only immutable configuration, so one retriever can serve any
/// number of concurrent calls with different cursors.
#[derive(Debug, Clone)]
pub struct Retriever<S, P = FullItem> {
    sender: S,
    endpoint: String,
    template: RequestTemplate,
    count: u32,
    initial_offset: u32,
    projection: P,
}

impl<S: HttpSender, P: Projection> Retriever<S, P> {
    /// Create a retriever; fails if the configuration or credentials are unusable
    pub fn new(
        sender: S,
        credentials: &Credentials,
        config: &ClientConfig,
        projection: P,
    ) -> Result<Self> {
        config.validate()?;
        credentials.validate()?;

        Ok(Self {
            sender,
            endpoint: config.endpoint.clone(),
            template: RequestTemplate::new(credentials, &config.policy),
            count: config.policy.count,
            initial_offset: config.policy.initial_offset,
            projection,
        })
    }

    /// Same retriever with a different projection
    pub fn with_projection<Q: Projection>(self, projection: Q) -> Retriever<S, Q> {
        Retriever {
            sender: self.sender,
            endpoint: self.endpoint,
            template: self.template,
            count: self.count,
            initial_offset: self.initial_offset,
            projection,
        }
    }

    /// Page size used as the offset step
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Fetch all pages for `since` and return the projected items with the
    /// newest cursor.
    ///
    /// On error nothing is returned; keep using `since` for the next call.
    pub async fn retrieve(&self, since: Since) -> Result<Retrieval<P::Output>> {
        let mut progress = Progress::new(since, self.initial_offset);
        let mut items = Vec::new();

        while progress.state.is_fetching() {
            if let Err(e) = self.next_page(&mut progress, &mut items).await {
                progress.fail();
                warn!(
                    "Retrieval since {} failed at offset {} after {} pages: {}",
                    since, progress.offset, progress.pages, e
                );
                return Err(e);
            }
        }

        info!(
            "Retrieved {} items ({} listed) in {} pages, since {} -> {}",
            items.len(),
            progress.entries,
            progress.pages,
            since,
            progress.since
        );

        Ok(Retrieval {
            items,
            since: progress.since,
            pages: progress.pages,
        })
    }

    /// Fetch, decode and project one page, then move the state machine on
    async fn next_page(&self, progress: &mut Progress, items: &mut Vec<P::Output>) -> Result<()> {
        let offset = progress.offset;
        let page = self.fetch_page(progress.requested_since, offset).await?;
        progress.observe_cursor(page.since);

        match page.outcome {
            PageOutcome::Complete => {
                debug!("Completion signal at offset {}", offset);
                progress.complete();
            }
            PageOutcome::Entries(entries) => {
                let before = items.len();
                for (item_id, raw) in &entries {
                    if let Some(item) = self.projection.project(item_id, raw)? {
                        items.push(item);
                    }
                }
                let kept = items.len() - before;
                debug!(
                    "Page at offset {}: {} entries, {} kept, cursor {}",
                    offset,
                    entries.len(),
                    kept,
                    progress.since
                );

                progress.parsed(entries.len(), kept);
                if !progress.advance(self.count) {
                    return Err(Error::invalid_response(format!(
                        "page offset overflow after offset {offset}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// One request/response exchange, decoded into a page
    async fn fetch_page(&self, since: Since, offset: u32) -> Result<Page> {
        debug!("Requesting page at offset {} since {}", offset, since);
        let request = self.template.build(&self.endpoint, since, offset);
        let response = self.sender.send(request).await?;

        if response.status != 200 {
            let x_error = response.header_str("X-Error").to_string();
            return Err(Error::http_status(response.status, x_error));
        }

        Page::parse(&response.body)
    }
}
