//! Error types for sized sources

use thiserror::Error;

/// Failures specific to opening a remote source.
///
/// I/O failures are passed through as they are, wrapped in context by the caller.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed with status {status} for URL: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Object has no content length: {0}")]
    UnknownLength(String),
}
