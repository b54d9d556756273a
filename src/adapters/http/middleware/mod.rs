//! HTTP middleware for axum.
//!
//! - `request_context` - Extractor building the caller's `RequestContext`

pub mod request_context;

pub use request_context::Caller;
