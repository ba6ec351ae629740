//! Hugging Face Inference Captioner
//!
//! Posts raw image bytes to a hosted image-to-text model (BLIP by default)
//! and reads back `[{"generated_text": "..."}]`.

use async_trait::async_trait;
use serde::Deserialize;

use super::{CaptionModel, CaptionModelConfig, ImageInput};
use crate::core::{CoreError, CoreResult};

/// Hugging Face hosted inference captioner
pub struct HuggingFaceCaptioner {
    /// Base URL for model endpoints
    #[allow(dead_code)]
    base_url: String,
    /// Model identifier
    model: String,
    /// Optional access token
    #[allow(dead_code)]
    api_token: Option<String>,
    /// HTTP client
    #[cfg(feature = "ai-providers")]
    client: reqwest::Client,
}

impl HuggingFaceCaptioner {
    /// Default inference API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://api-inference.huggingface.co/models";

    /// Default image captioning model
    pub const DEFAULT_MODEL: &'static str = "Salesforce/blip-image-captioning-base";

    /// Creates a new captioner
    pub fn new(config: CaptionModelConfig) -> CoreResult<Self> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let model = config
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_MODEL.to_string());

        let api_token = config.api_token.filter(|t| !t.is_empty());

        #[cfg(feature = "ai-providers")]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.timeout_secs.unwrap_or(60),
            ))
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            model,
            api_token,
            #[cfg(feature = "ai-providers")]
            client,
        })
    }

    /// Endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }
}

// =============================================================================
// Inference API Types
// =============================================================================

#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
#[derive(Deserialize)]
struct ApiError {
    error: String,
}

#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
fn parse_response(body: &str) -> CoreResult<String> {
    let outputs: Vec<GeneratedText> = serde_json::from_str(body)
        .map_err(|e| CoreError::CaptioningFailed(format!("Failed to parse response: {}", e)))?;

    let text = outputs
        .into_iter()
        .map(|o| o.generated_text.trim().to_string())
        .find(|t| !t.is_empty())
        .ok_or_else(|| CoreError::CaptioningFailed("Model returned no caption".to_string()))?;

    Ok(text)
}

// =============================================================================
// CaptionModel Implementation
// =============================================================================

#[async_trait]
impl CaptionModel for HuggingFaceCaptioner {
    fn name(&self) -> &str {
        &self.model
    }

    #[cfg(feature = "ai-providers")]
    async fn describe(&self, image: &ImageInput) -> CoreResult<String> {
        let mut request = self
            .client
            .post(self.endpoint())
            .header(
                "Content-Type",
                image.mime_type().unwrap_or("application/octet-stream"),
            )
            .body(image.bytes().to_vec());

        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| CoreError::CaptioningFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CoreError::CaptioningFailed(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(CoreError::CaptioningFailed(format!(
                "Inference API error ({}): {}",
                status, message
            )));
        }

        parse_response(&body)
    }

    #[cfg(not(feature = "ai-providers"))]
    async fn describe(&self, _image: &ImageInput) -> CoreResult<String> {
        Err(CoreError::NotSupported(
            "AI providers feature not enabled. Build with --features ai-providers".to_string(),
        ))
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "ai-providers")
    }
}

// =============================================================================
// Tests
// =============================================================================
