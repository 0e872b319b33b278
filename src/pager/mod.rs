//! Pager module
//!
//! Drives one "fetch everything since cursor X" operation: requests pages at
//! increasing offsets until one comes back empty or the service signals
//! completion, projects every listed item, and reports the newest cursor.
//!
//! # Overview
//!
//! ```text
//!            ┌──────────── entries > 0, offset += count ───────────┐
//!            ▼                                                      │
//!      ┌──────────┐  200, no error   ┌────────────┐                 │
//!      │ Fetching │ ───────────────▶ │ PageParsed │ ────────────────┘
//!      └──────────┘                  └────────────┘
//!            │ transport / status /        │ entries == 0 or status == 2
//!            │ service / decode error      ▼
//!            ▼                       ┌───────────┐
//!      ┌──────────┐                  │ Exhausted │
//!      │  Failed  │                  └───────────┘
//!      └──────────┘
//! ```
//!
//! Failure is all-or-nothing: items gathered from earlier pages are dropped
//! and the caller's cursor stays current.

mod retriever;
mod types;

pub use retriever::Retriever;
pub use types::{PagerState, Progress};
