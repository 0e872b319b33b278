//! Request builder module
//!
//! Assembles the fixed-shape retrieve payload once per client and overlays
//! the per-page `since` and `offset` values.

mod builder;

pub use builder::RequestTemplate;
