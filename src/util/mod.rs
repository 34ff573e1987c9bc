//! Shared helpers for the aggregation pipeline.
//!
//! - **URL validation**: SSRF-focused checks on feed URLs before they are
//!   handed to the relay
//! - **Text normalization**: whitespace cleanup and the title key used for
//!   cross-feed deduplication

mod text;
mod url_validator;

pub use text::{collapse_whitespace, dedup_key};
pub use url_validator::{validate_url, UrlValidationError};
