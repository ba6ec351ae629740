//! Google Translate Provider Implementation
//!
//! Uses the public `translate_a/single` web endpoint (no API key). The
//! response is a nested JSON array whose first element lists the translated
//! segments.

use async_trait::async_trait;
use serde_json::Value;

use super::TranslationProviderConfig;
use crate::core::translation::provider::TranslationProvider;
use crate::core::{CoreError, CoreResult};

// =============================================================================
// Google Translate Provider
// =============================================================================

/// Google Translate web endpoint provider
pub struct GoogleTranslateProvider {
    /// Base URL for API requests
    #[allow(dead_code)]
    base_url: String,
    /// HTTP client
    #[cfg(feature = "ai-providers")]
    client: reqwest::Client,
}

impl GoogleTranslateProvider {
    /// Default endpoint host
    pub const DEFAULT_BASE_URL: &'static str = "https://translate.googleapis.com";

    /// Creates a new Google Translate provider
    pub fn new(config: TranslationProviderConfig) -> CoreResult<Self> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        #[cfg(feature = "ai-providers")]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.timeout_secs.unwrap_or(10),
            ))
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            #[cfg(feature = "ai-providers")]
            client,
        })
    }
}

/// Joins the translated segments of a `translate_a/single` response.
#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
fn parse_response(body: &str) -> CoreResult<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CoreError::TranslationFailed(format!("Failed to parse response: {}", e)))?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| CoreError::TranslationFailed("Response has no segments".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        return Err(CoreError::TranslationFailed(
            "Empty translation returned".to_string(),
        ));
    }

    Ok(text)
}

// =============================================================================
// TranslationProvider Implementation
// =============================================================================

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    fn name(&self) -> &str {
        "google"
    }

    #[cfg(feature = "ai-providers")]
    async fn translate(&self, text: &str, source: &str, target: &str) -> CoreResult<String> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| CoreError::TranslationFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CoreError::TranslationFailed(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(CoreError::TranslationFailed(format!(
                "Google Translate error ({}): {}",
                status, body
            )));
        }

        parse_response(&body)
    }

    #[cfg(not(feature = "ai-providers"))]
    async fn translate(&self, _text: &str, _source: &str, _target: &str) -> CoreResult<String> {
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
