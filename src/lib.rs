// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # pocket-sync
//!
//! Incremental retrieval of a Pocket reading list over the v3 JSON API.
//!
//! ## Features
//!
//! - **Offset Pagination**: Pages are requested until one comes back empty
//!   or the service signals completion
//! - **Incremental Sync**: The `since` cursor from the last response is
//!   returned for the next call
//! - **Projections**: Full typed items, best links, or any closure
//! - **Pluggable Transport**: Anything implementing [`http::HttpSender`];
//!   reqwest by default
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pocket_sync::{Pocket, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let pocket = Pocket::new("1234-abcd1234abcd1234abcd1234", "user-access-token")?;
//!
//!     // First sync: everything
//!     let first = pocket.retrieve_links(0).await?;
//!     for link in &first.items {
//!         println!("{link}");
//!     }
//!
//!     // Later: only what changed
//!     let delta = pocket.retrieve(first.since).await?;
//!     println!("{} new or updated items", delta.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Pocket / Retriever                       │
//! │          retrieve(since) → Retrieval<T>                  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌────────────┬───────────────┼──────────────┬──────────────┐
//! │  Request   │     HTTP      │    Decode    │  Projection  │
//! ├────────────┼───────────────┼──────────────┼──────────────┤
//! │ Template   │ HttpSender    │ Page         │ FullItem     │
//! │ since/     │ ReqwestSender │ Item         │ Link         │
//! │ offset     │               │              │ closures     │
//! └────────────┴───────────────┴──────────────┴──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document Item accessors and error fields

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and credentials
pub mod config;

/// HTTP transport capability
pub mod http;

/// Retrieve request builder
pub mod request;

/// Response envelope and item decoding
pub mod decode;

/// Item projections
pub mod projection;

/// Pagination loop
pub mod pager;

/// Client facade
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Pocket;
pub use config::{ClientConfig, Credentials, RequestPolicy};
pub use decode::Item;
pub use error::{Error, Result};
pub use pager::Retriever;
pub use projection::{FullItem, Link, Projection};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
