//! Response decoder module
//!
//! Parses the retrieve response envelope and defines the full item record.
//!
//! # Overview
//!
//! The envelope is decoded loosely: `error`, `status`, `since` and `list`
//! are read from a generic JSON value, because the service varies their
//! types (numbers vs. numeric strings, `list` as an object or an empty
//! array). Individual item records are decoded strictly by a projection.

mod page;
pub(crate) mod types;

pub use page::{Page, PageOutcome, COMPLETION_STATUS};
pub use types::Item;

#[cfg(test)]
mod tests;
