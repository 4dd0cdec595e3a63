//! Upload request configuration.

use crate::types::{Payload, FALLBACK_CONTENT_TYPE};

/// Configuration for a single upload, captured once and immutable for the
/// lifetime of the uploader built from it.
///
/// `payload` and `destination_url` are required; everything else has a
/// stated default. The credential is used verbatim — for basic-style
/// schemes the caller is responsible for pre-encoding.
#[derive(Clone, Debug)]
pub struct UploadRequest {
    /// Content to transmit.
    pub payload: Payload,

    /// Target endpoint for the PUT.
    pub destination_url: String,

    /// Authorization scheme label (e.g. "Bearer", "Basic").
    pub auth_scheme: String,

    /// Opaque credential string, sent as `"{auth_scheme} {credential}"`.
    pub credential: String,

    /// Explicit content type override. When `None`, the payload's declared
    /// type is used, falling back to `application/octet-stream`.
    pub content_type: Option<String>,
}

impl UploadRequest {
    pub fn new(
        payload: Payload,
        destination_url: impl Into<String>,
        auth_scheme: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            payload,
            destination_url: destination_url.into(),
            auth_scheme: auth_scheme.into(),
            credential: credential.into(),
            content_type: None,
        }
    }

    /// Resolves the effective content type: explicit override, then the
    /// payload's declared type, then the generic binary fallback.
    pub fn effective_content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .or(self.payload.content_type.as_deref())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
    }
}
