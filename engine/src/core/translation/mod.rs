//! Translation Module
//!
//! Wraps an external translation service behind a soft-fail contract:
//! `Translator::translate` always returns a string. Provider errors and
//! timeouts are logged and the untranslated text is returned instead.

pub mod provider;
pub mod providers;

pub use provider::{MockTranslationProvider, TranslationProvider};
pub use providers::{
    create_translation_provider, GoogleTranslateProvider, LibreTranslateProvider,
    TranslationProviderConfig, TranslatorType,
};

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::languages::{LanguageTable, DEFAULT_LANGUAGE};
use crate::core::{CoreError, CoreResult};

/// Source code passed to providers; the service detects the input language.
pub const SOURCE_AUTO: &str = "auto";

/// Default upper bound on a single translation call
pub const DEFAULT_TRANSLATION_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Translator
// =============================================================================

/// Failure-tolerant translation wrapper
pub struct Translator {
    provider: Arc<dyn TranslationProvider>,
    languages: LanguageTable,
    default_language: String,
    timeout: Duration,
}

impl Translator {
    /// Creates a translator with English as the default language
    pub fn new(provider: Arc<dyn TranslationProvider>, languages: LanguageTable) -> Self {
        Self {
            provider,
            languages,
            default_language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TRANSLATION_TIMEOUT,
        }
    }

    /// Sets the language that is passed through untranslated
    pub fn with_default_language(mut self, language: &str) -> Self {
        self.default_language = language.trim().to_string();
        self
    }

    /// Sets the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns true if the underlying provider can serve requests
    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    /// Returns true if `language` needs no translation
    pub fn is_default_language(&self, language: &str) -> bool {
        language == self.default_language
    }

    /// Translates `text` into `target_language` (a display name such as "French").
    ///
    /// Never fails: the default language, unknown languages, provider errors,
    /// empty results and timeouts all yield `text` unchanged.
    pub async fn translate(&self, text: &str, target_language: &str) -> String {
        if self.is_default_language(target_language) {
            return text.to_string();
        }

        let Some(code) = self.languages.code_for(target_language) else {
            debug!(
                "Unknown language '{}', leaving caption untranslated",
                target_language
            );
            return text.to_string();
        };

        match self.request(text, code).await {
            Ok(translated) if !translated.trim().is_empty() => translated,
            Ok(_) => {
                warn!(
                    provider = self.provider.name(),
                    target = code,
                    "Translation returned empty text, using original"
                );
                text.to_string()
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    target = code,
                    "Translation failed, using original: {}",
                    e
                );
                text.to_string()
            }
        }
    }

    /// One bounded provider call for a resolved language code
    async fn request(&self, text: &str, code: &str) -> CoreResult<String> {
        let call = self.provider.translate(text, SOURCE_AUTO, code);
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                CoreError::Timeout(format!(
                    "No translation to '{}' within {:?}",
                    code, self.timeout
                ))
            })?
    }
}

// =============================================================================
// Tests
// =============================================================================
