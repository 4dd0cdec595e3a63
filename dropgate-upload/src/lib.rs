//! Direct-to-storage upload client for the DropGate gateway.
//!
//! Uploads one opaque payload per invocation via HTTP `PUT`:
//! - success means the server answered 200 or 201; every other status and
//!   any transport failure surfaces through a single error type
//! - the original payload is echoed back on success (the response body is
//!   never inspected)
//! - transfer progress is reported through an event stream
//! - no retries, no queueing, no resumable uploads

pub mod error;
pub mod progress;
pub mod request;
pub mod types;
pub mod uploader;

pub use error::{UploadError, UploadResult};
pub use progress::TransferProgress;
pub use request::UploadRequest;
pub use types::{Payload, FALLBACK_CONTENT_TYPE};
pub use uploader::BlobUploader;
