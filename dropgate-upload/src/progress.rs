//! Transfer progress reporting.
//!
//! The outgoing payload is chunked into a stream so that each chunk handed
//! to the transport emits one cumulative progress event. The frequency of
//! events is therefore determined by the chunk size, not by wall time.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tokio::sync::mpsc::UnboundedSender;

/// Chunk size of the streamed request body, and thus the granularity of
/// progress events.
const CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// A single transfer progress event.
///
/// `transferred_bytes` is cumulative and monotonically increasing across
/// the events of one request; events are not necessarily evenly spaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferProgress {
    pub transferred_bytes: u64,
    pub total_bytes: u64,
}

/// Builds the streaming request body for `data`, wiring each yielded chunk
/// to a progress event on `progress_tx` (when subscribed).
///
/// A closed receiver never fails the transfer; events are simply dropped.
pub(crate) fn progress_body(
    data: Bytes,
    progress_tx: Option<UnboundedSender<TransferProgress>>,
) -> reqwest::Body {
    let total_bytes = data.len() as u64;
    let mut transferred_bytes = 0u64;

    let chunks = chunk_payload(data).into_iter().map(move |chunk| {
        transferred_bytes += chunk.len() as u64;
        if let Some(tx) = &progress_tx {
            let _ = tx.send(TransferProgress {
                transferred_bytes,
                total_bytes,
            });
        }
        Ok::<Bytes, Infallible>(chunk)
    });

    reqwest::Body::wrap_stream(futures::stream::iter(chunks))
}

/// Splits the payload into `CHUNK_SIZE` pieces without copying.
fn chunk_payload(mut data: Bytes) -> Vec<Bytes> {
    let mut chunks = Vec::with_capacity(data.len() / CHUNK_SIZE + 1);
    while data.len() > CHUNK_SIZE {
        chunks.push(data.split_to(CHUNK_SIZE));
    }
    if !data.is_empty() {
        chunks.push(data);
    }
    chunks
}
