//! Upload error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur during an upload.
///
/// Transport failures and server rejections surface through the same type;
/// the component draws no distinction beyond the variant and performs no
/// retries for either.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request could not complete at the network layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request completed but the server answered with a status other
    /// than 200 or 201.
    #[error("upload rejected with status {status} by {url}")]
    Rejected { status: StatusCode, url: String },

    /// The captured configuration cannot form a valid request
    /// (malformed destination URL, header value with forbidden characters).
    #[error("invalid upload configuration: {0}")]
    Config(String),
}

impl UploadError {
    /// Status code of the failing request, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::Config(_) => None,
        }
    }

    /// Target URL of the failing request, when known.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Rejected { url, .. } => Some(url),
            Self::Transport(e) => e.url().map(reqwest::Url::as_str),
            Self::Config(_) => None,
        }
    }
}
