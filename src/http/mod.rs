//! HTTP transport module
//!
//! The retriever never talks to the network directly. It hands a fully built
//! [`HttpRequest`] to an [`HttpSender`] and receives status, headers and body
//! back.
//!
//! # Features
//!
//! - **Narrow capability**: one async `send` method, easy to fake in tests
//! - **Default transport**: [`ReqwestSender`] with timeout and user agent
//! - **No retries**: transport failures surface to the caller unchanged

mod client;
mod types;

pub use client::{ReqwestSender, ReqwestSenderBuilder};
pub use types::{HttpRequest, HttpResponse, HttpSender};
