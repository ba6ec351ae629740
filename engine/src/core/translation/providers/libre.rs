//! LibreTranslate Provider Implementation
//!
//! Implements the TranslationProvider trait for LibreTranslate instances.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::TranslationProviderConfig;
use crate::core::translation::provider::TranslationProvider;
use crate::core::{CoreError, CoreResult};

// =============================================================================
// LibreTranslate Provider
// =============================================================================

/// LibreTranslate API provider
pub struct LibreTranslateProvider {
    /// Base URL of the instance
    #[allow(dead_code)]
    base_url: String,
    /// Optional API key
    #[allow(dead_code)]
    api_key: Option<String>,
    /// HTTP client
    #[cfg(feature = "ai-providers")]
    client: reqwest::Client,
}

impl LibreTranslateProvider {
    /// Creates a new LibreTranslate provider
    pub fn new(config: TranslationProviderConfig) -> CoreResult<Self> {
        let base_url = config
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                CoreError::ValidationError("LibreTranslate base URL is required".to_string())
            })?
            .trim_end_matches('/')
            .to_string();

        let api_key = config.api_key.filter(|key| !key.is_empty());

        #[cfg(feature = "ai-providers")]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.timeout_secs.unwrap_or(10),
            ))
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            api_key,
            #[cfg(feature = "ai-providers")]
            client,
        })
    }
}

/// LibreTranslate only knows primary language subtags ("zh", not "zh-CN").
fn libre_code(code: &str) -> String {
    code.split('-').next().unwrap_or(code).to_ascii_lowercase()
}

// =============================================================================
// LibreTranslate API Types
// =============================================================================

#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: String,
    target: String,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
#[derive(Deserialize)]
struct ApiError {
    error: String,
}

#[cfg_attr(not(feature = "ai-providers"), allow(dead_code))]
fn parse_response(body: &str) -> CoreResult<String> {
    let response: TranslateResponse = serde_json::from_str(body)
        .map_err(|e| CoreError::TranslationFailed(format!("Failed to parse response: {}", e)))?;

    if response.translated_text.trim().is_empty() {
        return Err(CoreError::TranslationFailed(
            "Empty translation returned".to_string(),
        ));
    }

    Ok(response.translated_text)
}

// =============================================================================
// TranslationProvider Implementation
// =============================================================================

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn name(&self) -> &str {
        "libre"
    }

    #[cfg(feature = "ai-providers")]
    async fn translate(&self, text: &str, source: &str, target: &str) -> CoreResult<String> {
        let request = TranslateRequest {
            q: text,
            source: libre_code(source),
            target: libre_code(target),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CoreError::TranslationFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CoreError::TranslationFailed(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(CoreError::TranslationFailed(format!(
                "LibreTranslate error ({}): {}",
                status, message
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_libre_code_strips_region() {
        assert_eq!(libre_code("zh-CN"), "zh");
        assert_eq!(libre_code("fr"), "fr");
        assert_eq!(libre_code("auto"), "auto");
    }

    #[test]
    fn test_libre_provider_empty_key_is_ignored() {
        let config = TranslationProviderConfig::libre("http://localhost:5000/").with_api_key("");
        let provider = LibreTranslateProvider::new(config).unwrap();

        assert!(provider.api_key.is_none());
        assert_eq!(provider.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_libre_provider_blank_url_rejected() {
        let result = LibreTranslateProvider::new(TranslationProviderConfig::libre("  "));
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn test_parse_response() {
        assert_eq!(
            parse_response(r#"{"translatedText":"Hola"}"#).unwrap(),
            "Hola"
        );
        assert!(parse_response(r#"{"translatedText":""}"#).is_err());
        assert!(parse_response(r#"{"error":"bad"}"#).is_err());
    }

    #[test]
    fn test_request_serialization_skips_missing_key() {
        let request = TranslateRequest {
            q: "Hello",
            source: "auto".to_string(),
            target: "es".to_string(),
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["q"], "Hello");
        assert_eq!(json["target"], "es");
        assert!(json.get("api_key").is_none());
    }
}
