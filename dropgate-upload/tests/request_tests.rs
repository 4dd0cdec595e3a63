use dropgate_upload::{
    BlobUploader, Payload, TransferProgress, UploadRequest, FALLBACK_CONTENT_TYPE,
};
use pretty_assertions::assert_eq;

fn request_with(payload: Payload) -> UploadRequest {
    UploadRequest::new(payload, "https://store.example/blob", "Bearer", "tok")
}

// --- Content type resolution ---

#[test]
fn explicit_override_wins() {
    let mut request = request_with(Payload::text("hi"));
    request.content_type = Some("application/json".to_string());
    assert_eq!(request.effective_content_type(), "application/json");
}

#[test]
fn payload_declared_type_used_without_override() {
    let request = request_with(Payload::text("hi"));
    assert_eq!(request.effective_content_type(), "text/plain");
}

#[test]
fn fallback_when_nothing_declares_a_type() {
    let request = request_with(Payload::new(vec![0u8, 1, 2]));
    assert_eq!(request.effective_content_type(), FALLBACK_CONTENT_TYPE);
    assert_eq!(request.effective_content_type(), "application/octet-stream");
}

#[test]
fn resolution_is_captured_at_construction() {
    let uploader = BlobUploader::new(request_with(Payload::text("hi")));
    assert_eq!(uploader.content_type(), "text/plain");
}

#[test]
fn declared_type_from_with_content_type() {
    let payload = Payload::with_content_type(vec![0xFFu8; 4], "image/png");
    assert_eq!(request_with(payload).effective_content_type(), "image/png");
}

// --- Payload ---

#[test]
fn payload_length_tracks_data() {
    let payload = Payload::text("hello world");
    assert_eq!(payload.len(), 11);
    assert!(!payload.is_empty());
    assert!(Payload::new(Vec::<u8>::new()).is_empty());
}

#[test]
fn payload_has_no_type_by_default() {
    assert_eq!(Payload::new(vec![1u8]).content_type, None);
}

// --- TransferProgress ---

#[test]
fn transfer_progress_roundtrip() {
    let event = TransferProgress {
        transferred_bytes: 65_536,
        total_bytes: 200_000,
    };
    let json = serde_json::to_string(&event).unwrap();
    let de: TransferProgress = serde_json::from_str(&json).unwrap();
    assert_eq!(de, event);
}
