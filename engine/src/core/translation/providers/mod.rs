//! Translation Provider Implementations
//!
//! Concrete implementations of the TranslationProvider trait.

mod google;
mod libre;

pub use google::GoogleTranslateProvider;
pub use libre::LibreTranslateProvider;

use serde::{Deserialize, Serialize};

use super::provider::TranslationProvider;
use crate::core::CoreResult;

// =============================================================================
// Provider Configuration
// =============================================================================

/// Supported translation services
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorType {
    /// Public Google Translate web endpoint
    #[default]
    Google,
    /// Self-hosted or public LibreTranslate instance
    Libre,
}

impl std::fmt::Display for TranslatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslatorType::Google => write!(f, "google"),
            TranslatorType::Libre => write!(f, "libre"),
        }
    }
}

impl std::str::FromStr for TranslatorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(TranslatorType::Google),
            "libre" | "libretranslate" => Ok(TranslatorType::Libre),
            _ => Err(format!("Unknown translator type: {}", s)),
        }
    }
}

/// Configuration for creating a translation provider
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationProviderConfig {
    /// Provider type
    pub provider_type: TranslatorType,
    /// Base URL (for custom endpoints)
    pub base_url: Option<String>,
    /// API key (LibreTranslate instances that require one)
    pub api_key: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl TranslationProviderConfig {
    /// Creates a Google Translate config
    pub fn google() -> Self {
        Self {
            provider_type: TranslatorType::Google,
            base_url: None,
            api_key: None,
            timeout_secs: Some(10),
        }
    }

    /// Creates a LibreTranslate config
    pub fn libre(base_url: &str) -> Self {
        Self {
            provider_type: TranslatorType::Libre,
            base_url: Some(base_url.to_string()),
            api_key: None,
            timeout_secs: Some(10),
        }
    }

    /// Sets the API key
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Sets the base URL
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }
}

// =============================================================================
// Provider Factory
// =============================================================================

/// Creates a translation provider from configuration
pub fn create_translation_provider(
    config: TranslationProviderConfig,
) -> CoreResult<Box<dyn TranslationProvider>> {
    match config.provider_type {
        TranslatorType::Google => {
            let provider = GoogleTranslateProvider::new(config)?;
            Ok(Box::new(provider))
        }
        TranslatorType::Libre => {
            let provider = LibreTranslateProvider::new(config)?;
            Ok(Box::new(provider))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_type_parsing() {
        assert_eq!(
            "google".parse::<TranslatorType>().unwrap(),
            TranslatorType::Google
        );
        assert_eq!(
            "LibreTranslate".parse::<TranslatorType>().unwrap(),
            TranslatorType::Libre
        );
        assert!("deepl".parse::<TranslatorType>().is_err());
    }

    #[test]
    fn test_translator_type_display() {
        assert_eq!(TranslatorType::Google.to_string(), "google");
        assert_eq!(TranslatorType::Libre.to_string(), "libre");
    }

    #[test]
    fn test_create_google_provider() {
        let provider = create_translation_provider(TranslationProviderConfig::google()).unwrap();
        assert_eq!(provider.name(), "google");
    }

    #[test]
    fn test_create_libre_provider_requires_base_url() {
        let config = TranslationProviderConfig {
            provider_type: TranslatorType::Libre,
            base_url: None,
            api_key: None,
            timeout_secs: None,
        };
        assert!(create_translation_provider(config).is_err());

        let provider =
            create_translation_provider(TranslationProviderConfig::libre("http://localhost:5000"))
                .unwrap();
        assert_eq!(provider.name(), "libre");
    }
}
