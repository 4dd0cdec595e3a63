//! Single-shot blob uploader.
//!
//! Wraps one outbound HTTP `PUT` per invocation. The caller observes the
//! terminal outcome through the returned future and transfer progress
//! through an optional event stream; the component itself never retries.

use crate::error::{UploadError, UploadResult};
use crate::progress::{progress_body, TransferProgress};
use crate::request::UploadRequest;
use crate::types::Payload;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Header instructing the server to answer a failed authentication with a
/// plain error status instead of an interactive WWW-Authenticate challenge.
const SUPPRESS_CHALLENGE_HEADER: &str = "Suppress-WWW-Authenticate";

/// Uploads one payload to a storage endpoint via HTTP `PUT`.
///
/// The configuration is captured at construction and immutable afterwards.
/// Each call to [`upload`](Self::upload) or [`start`](Self::start) issues an
/// independent request with that configuration; the uploader keeps no queue
/// and performs no collision detection between concurrent invocations.
///
/// There is no cancellation primitive and no timeout: once dispatched, a
/// request runs until the transport resolves it. Callers that need a bound
/// can wrap the future in `tokio::time::timeout`.
pub struct BlobUploader {
    client: Client,
    request: UploadRequest,
    /// Effective content type, resolved once at construction.
    content_type: String,
    progress_tx: Option<UnboundedSender<TransferProgress>>,
}

impl BlobUploader {
    /// Creates an uploader for `request`, resolving the effective content
    /// type (request override, then payload type, then the binary fallback).
    pub fn new(request: UploadRequest) -> Self {
        // No explicit timeout: the transport default applies.
        let client = Client::builder()
            .build()
            .expect("failed to build HTTP client");
        let content_type = request.effective_content_type().to_string();

        Self {
            client,
            request,
            content_type,
            progress_tx: None,
        }
    }

    /// The content type the upload will carry.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Subscribes to transfer progress.
    ///
    /// Returns a stream of cumulative byte-count events, zero or more of
    /// which precede the terminal outcome of each request. Without a
    /// subscription no progress is recorded; dropping the receiver
    /// mid-transfer discards further events without affecting the upload.
    pub fn progress_events(&mut self) -> UnboundedReceiver<TransferProgress> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.progress_tx = Some(tx);
        rx
    }

    /// Performs the upload.
    ///
    /// Issues one `PUT` of the payload to the destination URL. A 200 or 201
    /// response resolves to the original payload (the response body is never
    /// inspected); any other status — and any transport failure — resolves
    /// to an [`UploadError`].
    pub async fn upload(&self) -> UploadResult<Payload> {
        perform(
            self.client.clone(),
            self.request.clone(),
            self.content_type.clone(),
            self.progress_tx.clone(),
        )
        .await
    }

    /// Dispatches the upload onto the runtime and returns immediately.
    ///
    /// The terminal outcome is observed by awaiting the returned handle.
    /// Aborting the task abandons the await but does not guarantee the
    /// in-flight request stops; this is not a cancellation API.
    pub fn start(&self) -> JoinHandle<UploadResult<Payload>> {
        tokio::spawn(perform(
            self.client.clone(),
            self.request.clone(),
            self.content_type.clone(),
            self.progress_tx.clone(),
        ))
    }
}

async fn perform(
    client: Client,
    request: UploadRequest,
    content_type: String,
    progress_tx: Option<UnboundedSender<TransferProgress>>,
) -> UploadResult<Payload> {
    let UploadRequest {
        payload,
        destination_url,
        auth_scheme,
        credential,
        ..
    } = request;

    let url = Url::parse(&destination_url).map_err(|e| {
        UploadError::Config(format!("invalid destination URL {destination_url:?}: {e}"))
    })?;
    let authorization = HeaderValue::from_str(&format!("{auth_scheme} {credential}"))
        .map_err(|e| UploadError::Config(format!("invalid authorization header: {e}")))?;
    let content_type_value = HeaderValue::from_str(&content_type)
        .map_err(|e| UploadError::Config(format!("invalid content type {content_type:?}: {e}")))?;

    let total_bytes = payload.len() as u64;
    debug!("PUT {destination_url} ({total_bytes} bytes, {content_type})");

    // The body is streamed for progress accounting, so the length is set
    // explicitly rather than inferred.
    let response = client
        .put(url)
        .header(header::CONTENT_TYPE, content_type_value)
        .header(header::AUTHORIZATION, authorization)
        .header(SUPPRESS_CHALLENGE_HEADER, "Suppress")
        .header(header::CONTENT_LENGTH, total_bytes)
        .body(progress_body(payload.data.clone(), progress_tx))
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::OK || status == StatusCode::CREATED {
        debug!("upload of {total_bytes} bytes accepted with status {status}");
        Ok(payload)
    } else {
        warn!("upload rejected with status {status} by {destination_url}");
        Err(UploadError::Rejected {
            status,
            url: destination_url,
        })
    }
}
