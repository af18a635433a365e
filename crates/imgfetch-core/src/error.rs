//! Typed failures of a single fetch.
//!
//! Every failure of the pipeline ends up as one of these values inside
//! [`crate::fetcher::FetchOutcome::Failed`]; the batch layer and the CLI
//! inspect them instead of parsing console text.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the fixed timeout.
    #[error("connection timeout: {url}")]
    Timeout { url: String },

    /// DNS resolution, TCP connect or the connection itself failed.
    #[error("connection failed: {url}")]
    Connection {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The final response had a non-2xx status.
    #[error("HTTP error {status}: {url}")]
    HttpStatus { url: String, status: u32 },

    /// Any other transport or request error reported by libcurl.
    #[error("request error: {source}")]
    Request {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The response did not declare an accepted image content type.
    #[error("URL does not contain a valid image: {url}")]
    InvalidContentType {
        url: String,
        content_type: Option<String>,
    },

    /// Reading the existing file or writing the new one failed.
    #[error("storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected error: {message}")]
    Unexpected { url: String, message: String },
}

impl FetchError {
    /// HTTP status code, for `HttpStatus` failures.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-friendly name of the failure kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Timeout { .. } => "timeout",
            FetchError::Connection { .. } => "connection",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Request { .. } => "request",
            FetchError::InvalidContentType { .. } => "invalid_content_type",
            FetchError::Storage { .. } => "storage",
            FetchError::Unexpected { .. } => "unexpected",
        }
    }
}
