//! Image Captioning Module
//!
//! The captioning model produces a plain-language base description of an
//! image. It is only consulted when the selected style has no phrase to offer.
//! Images are handled as opaque bytes; no decoding happens here.

mod huggingface;

pub use huggingface::HuggingFaceCaptioner;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::{CoreError, CoreResult};

// =============================================================================
// Image Input
// =============================================================================

/// Raw image handed to a caption model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInput {
    bytes: Vec<u8>,
    mime_type: Option<String>,
}

impl ImageInput {
    /// Wraps raw bytes. Empty input is rejected.
    pub fn from_bytes(bytes: Vec<u8>) -> CoreResult<Self> {
        if bytes.is_empty() {
            return Err(CoreError::InvalidImage("Image data is empty".to_string()));
        }
        Ok(Self {
            bytes,
            mime_type: None,
        })
    }

    /// Reads an image file, guessing the MIME type from its extension
    pub async fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let image = Self::from_bytes(bytes)?;

        Ok(match mime_from_extension(path) {
            Some(mime) => image.with_mime_type(mime),
            None => image,
        })
    }

    /// Sets the MIME type
    pub fn with_mime_type(mut self, mime_type: &str) -> Self {
        self.mime_type = Some(mime_type.to_string());
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

// =============================================================================
// Caption Model Trait
// =============================================================================

/// Trait for image-to-text models
#[async_trait]
pub trait CaptionModel: Send + Sync {
    /// Returns the model/provider name
    fn name(&self) -> &str;

    /// Describes the image in plain language
    async fn describe(&self, image: &ImageInput) -> CoreResult<String>;

    /// Checks if the model is available
    fn is_available(&self) -> bool {
        true
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Supported caption model backends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionerType {
    /// Hosted Hugging Face inference endpoint
    #[default]
    HuggingFace,
    /// Fixed description, no model call
    Static,
}

impl std::fmt::Display for CaptionerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionerType::HuggingFace => write!(f, "huggingface"),
            CaptionerType::Static => write!(f, "static"),
        }
    }
}

/// Configuration for creating a caption model
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionModelConfig {
    /// Backend type
    pub provider_type: CaptionerType,
    /// Base URL (for custom inference endpoints)
    pub base_url: Option<String>,
    /// Model identifier
    pub model: Option<String>,
    /// Access token
    pub api_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Description returned by the static backend
    pub description: Option<String>,
}

impl CaptionModelConfig {
    /// Creates a Hugging Face config for the default BLIP model
    pub fn huggingface(api_token: Option<&str>) -> Self {
        Self {
            provider_type: CaptionerType::HuggingFace,
            base_url: None,
            model: Some(HuggingFaceCaptioner::DEFAULT_MODEL.to_string()),
            api_token: api_token.map(|t| t.to_string()),
            timeout_secs: Some(60),
            description: None,
        }
    }

    /// Creates a static config
    pub fn fixed(description: &str) -> Self {
        Self {
            provider_type: CaptionerType::Static,
            base_url: None,
            model: None,
            api_token: None,
            timeout_secs: None,
            description: Some(description.to_string()),
        }
    }

    /// Sets the model
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Sets the base URL
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }
}

/// Creates a caption model from configuration
pub fn create_caption_model(config: CaptionModelConfig) -> CoreResult<Box<dyn CaptionModel>> {
    match config.provider_type {
        CaptionerType::HuggingFace => Ok(Box::new(HuggingFaceCaptioner::new(config)?)),
        CaptionerType::Static => {
            let description = config.description.unwrap_or_default();
            Ok(Box::new(StaticCaptioner::new(&description)?))
        }
    }
}

// =============================================================================
// Static Captioner
// =============================================================================

/// Returns the same description for every image
pub struct StaticCaptioner {
    description: String,
}

impl StaticCaptioner {
    pub fn new(description: &str) -> CoreResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::ValidationError(
                "Static caption description cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            description: description.to_string(),
        })
    }
}

#[async_trait]
impl CaptionModel for StaticCaptioner {
    fn name(&self) -> &str {
        "static"
    }

    async fn describe(&self, _image: &ImageInput) -> CoreResult<String> {
        Ok(self.description.clone())
    }
}

// =============================================================================
// Mock Caption Model (for testing)
// =============================================================================

/// Mock caption model for testing
pub struct MockCaptionModel {
    description: Option<String>,
    calls: AtomicUsize,
}

impl MockCaptionModel {
    /// Creates a mock returning `description`
    pub fn new(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a mock that always fails
    pub fn failing() -> Self {
        Self {
            description: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of describe calls received
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptionModel for MockCaptionModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn describe(&self, _image: &ImageInput) -> CoreResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.description
            .clone()
            .ok_or_else(|| CoreError::CaptioningFailed("Mock captioning failure".to_string()))
    }

    fn is_available(&self) -> bool {
        self.description.is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================
