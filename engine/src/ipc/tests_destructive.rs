//! Destructive and Edge Case Tests for IPC Payloads
//!
//! Malformed JSON, conflicting image sources and unreadable files must
//! surface as plain error strings, never panics.

use std::sync::Arc;

use crate::core::captioning::MockCaptionModel;
use crate::core::composer::CaptionComposer;
use crate::core::languages::LanguageTable;
use crate::core::service::CaptionService;
use crate::core::styles::StyleCatalog;
use crate::core::translation::{MockTranslationProvider, Translator};
use crate::ipc::{generate_caption, GenerateCaptionPayload};
use crate::AppState;

fn state() -> AppState {
    let translator = Translator::new(
        Arc::new(MockTranslationProvider::new()),
        LanguageTable::builtin().unwrap(),
    );
    AppState::new(CaptionService::new(
        CaptionComposer::new(StyleCatalog::builtin(), translator),
        Arc::new(MockCaptionModel::new("a quiet street")),
    ))
}

#[test]
fn test_destructive_payload_defaults() {
    let payload: GenerateCaptionPayload =
        serde_json::from_str(r#"{"imageBytes":[255,216]}"#).unwrap();

    assert_eq!(payload.style, "Aesthetic");
    assert_eq!(payload.font_style, "Normal");
    assert_eq!(payload.language, "English");
}

#[test]
fn test_destructive_payload_aliases() {
    let payload: GenerateCaptionPayload =
        serde_json::from_str(r#"{"imagePath":"a.png","font":"Bold","lang":"Hindi"}"#).unwrap();

    assert_eq!(payload.font_style, "Bold");
    assert_eq!(payload.language, "Hindi");
}

#[test]
fn test_destructive_payload_wrong_types_rejected() {
    assert!(serde_json::from_str::<GenerateCaptionPayload>(r#"{"imageBytes":"abc"}"#).is_err());
    assert!(serde_json::from_str::<GenerateCaptionPayload>(r#"{"style":42}"#).is_err());
    assert!(serde_json::from_str::<GenerateCaptionPayload>(r#"{"imageBytes":[256]}"#).is_err());
}

#[tokio::test]
async fn test_destructive_both_image_sources_rejected() {
    let payload: GenerateCaptionPayload =
        serde_json::from_str(r#"{"imagePath":"a.png","imageBytes":[1]}"#).unwrap();

    assert!(payload.load_image().await.is_err());
}

#[tokio::test]
async fn test_destructive_blank_path_rejected() {
    let payload = GenerateCaptionPayload::from_path("   ");
    assert!(payload.load_image().await.is_err());
}

#[tokio::test]
async fn test_destructive_missing_file_is_io_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.jpg");
    let payload = GenerateCaptionPayload::from_path(&missing.to_string_lossy());

    let error = generate_caption(&state(), payload).await.unwrap_err();
    assert!(error.starts_with("IO error"));
}

#[tokio::test]
async fn test_destructive_empty_image_bytes() {
    let payload: GenerateCaptionPayload =
        serde_json::from_str(r#"{"imageBytes":[],"style":"Funny"}"#).unwrap();

    let error = generate_caption(&state(), payload).await.unwrap_err();
    assert!(error.starts_with("Invalid image input"));
}

#[tokio::test]
async fn test_destructive_empty_file_on_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.png");
    std::fs::write(&path, b"").unwrap();

    let payload = GenerateCaptionPayload::from_path(&path.to_string_lossy());
    let error = generate_caption(&state(), payload).await.unwrap_err();
    assert!(error.starts_with("Invalid image input"));
}

#[tokio::test]
async fn test_destructive_unknown_options_still_caption() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("photo.jpg");
    std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

    let mut payload = GenerateCaptionPayload::from_path(&path.to_string_lossy());
    payload.style = "NoSuchStyle".to_string();
    payload.font_style = "NoSuchFont".to_string();
    payload.language = "Klingon".to_string();

    let response = generate_caption(&state(), payload).await.unwrap();
    assert!(response.caption.starts_with("a quiet street "));
}
