//! Projection module
//!
//! A projection maps one raw item record into the shape the caller wants.
//! Returning `Ok(None)` drops the item; returning `Err` aborts the whole
//! retrieval.

mod projections;
mod types;

pub use projections::{FullItem, Link};
pub use types::Projection;
