//! Unified validation framework for request payloads.
//!
//! Extractors that turn malformed bodies, queries and path segments into
//! `VALIDATION` errors before a handler runs. Field rules live on the payload
//! types as `#[derive(Validate)]` attributes.

pub mod extract;

pub use extract::{ApiPath, ApiQuery, ValidatedJson};
pub use validator::Validate;
