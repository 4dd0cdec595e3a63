//! Shared types for upload operations.

use bytes::Bytes;

/// Content type used when neither the request nor the payload declares one.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// An opaque blob of content to upload, optionally carrying its own
/// declared MIME type.
#[derive(Clone, Debug)]
pub struct Payload {
    /// Raw content bytes. `Bytes` so the completion path can hand the
    /// original payload back without copying it.
    pub data: Bytes,
    /// MIME type declared at construction, if any. A request-level
    /// override takes precedence over this.
    pub content_type: Option<String>,
}

impl Payload {
    /// Creates a payload with no declared content type.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
        }
    }

    /// Creates a `text/plain` payload from a string.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            data: Bytes::from(text.into()),
            content_type: Some("text/plain".to_string()),
        }
    }

    /// Creates a payload with an explicit declared content type.
    pub fn with_content_type(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            content_type: Some(content_type.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
