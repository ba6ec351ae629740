//! Settings Loading
//!
//! Provides application settings with:
//! - Schema validation with defaults
//! - Tolerant normalization (bad values are corrected, never fatal)
//! - Migration support for schema changes
//!
//! Storage location: {config_dir}/captionista/settings.json (read-only)

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::captioning::{CaptionModelConfig, CaptionerType, HuggingFaceCaptioner};
use crate::core::languages::{BUILTIN_LANGUAGES, DEFAULT_LANGUAGE};
use crate::core::translation::{TranslationProviderConfig, TranslatorType};
use crate::core::CoreResult;

/// Settings schema version for migration support
pub const SETTINGS_VERSION: u32 = 1;

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "captionista";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSettings {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Language passed through without translation
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Translation service settings
    #[serde(default)]
    pub translation: TranslationSettings,

    /// Caption model settings
    #[serde(default)]
    pub captioning: CaptioningSettings,

    /// Extra styles (name -> phrases); a built-in name replaces its phrases
    #[serde(default)]
    pub custom_styles: BTreeMap<String, Vec<String>>,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for CaptionSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            default_language: default_language(),
            translation: TranslationSettings::default(),
            captioning: CaptioningSettings::default(),
            custom_styles: BTreeMap::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl CaptionSettings {
    /// Parses settings JSON and normalizes the result
    pub fn from_json(content: &str) -> CoreResult<Self> {
        let mut settings: CaptionSettings = serde_json::from_str(content)?;
        settings.normalize();
        Ok(settings)
    }

    /// Normalizes and clamps settings so the loaded state is always valid.
    ///
    /// This is intentionally tolerant: it corrects bad values instead of failing.
    pub fn normalize(&mut self) {
        self.version = SETTINGS_VERSION;

        let language = self.default_language.trim();
        match BUILTIN_LANGUAGES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(language))
        {
            Some((name, _)) => self.default_language = name.to_string(),
            None => {
                warn!(
                    "Unknown default language '{}', falling back to {}",
                    self.default_language, DEFAULT_LANGUAGE
                );
                self.default_language = default_language();
            }
        }

        self.translation.normalize();
        self.captioning.normalize();
        self.custom_styles = normalize_custom_styles(std::mem::take(&mut self.custom_styles));
        self.logging.normalize();
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_enum(value: &str, allowed: &[&str], fallback: String) -> String {
    if allowed.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        value.to_ascii_lowercase()
    } else {
        fallback
    }
}

/// Trims names and phrases, drops blanks and duplicates, and drops styles
/// left without phrases.
fn normalize_custom_styles(
    styles: BTreeMap<String, Vec<String>>,
) -> BTreeMap<String, Vec<String>> {
    let mut normalized = BTreeMap::new();

    for (name, phrases) in styles {
        let name = name.trim().to_string();
        if name.is_empty() {
            warn!("Ignoring custom style with empty name");
            continue;
        }

        let mut seen = HashSet::new();
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && seen.insert(p.clone()))
            .collect();

        if phrases.is_empty() {
            warn!("Ignoring custom style '{}' without phrases", name);
            continue;
        }

        normalized.insert(name, phrases);
    }

    normalized
}

// =============================================================================
// Translation Settings
// =============================================================================

/// Translation service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationSettings {
    /// Translation service
    #[serde(default)]
    pub provider: TranslatorType,

    /// Custom endpoint (required for LibreTranslate)
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key (LibreTranslate)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Upper bound for one translation call in seconds (1-120, default 10)
    #[serde(default = "default_translation_timeout")]
    pub timeout_secs: u64,
}

fn default_translation_timeout() -> u64 {
    10
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: TranslatorType::default(),
            base_url: None,
            api_key: None,
            timeout_secs: default_translation_timeout(),
        }
    }
}

impl TranslationSettings {
    pub fn normalize(&mut self) {
        self.base_url = normalize_optional(self.base_url.take());
        self.api_key = normalize_optional(self.api_key.take());
        self.timeout_secs = self.timeout_secs.clamp(1, 120);
    }

    /// Provider configuration derived from these settings
    pub fn to_provider_config(&self) -> TranslationProviderConfig {
        TranslationProviderConfig {
            provider_type: self.provider,
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: Some(self.timeout_secs),
        }
    }
}

// =============================================================================
// Captioning Settings
// =============================================================================

/// Caption model settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaptioningSettings {
    /// Caption model backend
    #[serde(default)]
    pub provider: CaptionerType,

    /// Custom inference endpoint
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model identifier
    #[serde(default = "default_caption_model")]
    pub model: String,

    /// Access token
    #[serde(default)]
    pub api_token: Option<String>,

    /// Request timeout in seconds (5-600, default 60)
    #[serde(default = "default_caption_timeout")]
    pub timeout_secs: u64,

    /// Description used by the static backend
    #[serde(default = "default_fallback_description")]
    pub fallback_description: String,
}

fn default_caption_model() -> String {
    HuggingFaceCaptioner::DEFAULT_MODEL.to_string()
}

fn default_caption_timeout() -> u64 {
    60
}

fn default_fallback_description() -> String {
    "a photo".to_string()
}

impl Default for CaptioningSettings {
    fn default() -> Self {
        Self {
            provider: CaptionerType::default(),
            base_url: None,
            model: default_caption_model(),
            api_token: None,
            timeout_secs: default_caption_timeout(),
            fallback_description: default_fallback_description(),
        }
    }
}

impl CaptioningSettings {
    pub fn normalize(&mut self) {
        self.base_url = normalize_optional(self.base_url.take());
        self.api_token = normalize_optional(self.api_token.take());

        if self.model.trim().is_empty() {
            self.model = default_caption_model();
        }
        self.timeout_secs = self.timeout_secs.clamp(5, 600);

        let description = self.fallback_description.trim();
        self.fallback_description = if description.is_empty() {
            default_fallback_description()
        } else {
            description.to_string()
        };
    }

    /// Caption model configuration derived from these settings
    pub fn to_model_config(&self) -> CaptionModelConfig {
        CaptionModelConfig {
            provider_type: self.provider,
            base_url: self.base_url.clone(),
            model: Some(self.model.clone()),
            api_token: self.api_token.clone(),
            timeout_secs: Some(self.timeout_secs),
            description: Some(self.fallback_description.clone()),
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files (None = stdout only)
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl LoggingSettings {
    pub fn normalize(&mut self) {
        self.level = normalize_enum(
            self.level.trim(),
            &["trace", "debug", "info", "warn", "error"],
            default_log_level(),
        );
        self.log_dir = normalize_optional(self.log_dir.take());
    }
}

// =============================================================================
// Settings Manager
// =============================================================================

/// Loads settings from disk
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Create a settings manager for `{config_dir}/settings.json`
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: config_dir.as_ref().join(SETTINGS_FILE),
        }
    }

    /// Settings manager for the platform config directory
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR_NAME)))
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from disk, returning defaults if the file is missing or invalid
    pub fn load(&self) -> CaptionSettings {
        if !self.settings_path.exists() {
            info!("Settings file not found, using defaults");
            return CaptionSettings::default();
        }

        let result = fs::read_to_string(&self.settings_path)
            .map_err(crate::core::CoreError::from)
            .and_then(|content| {
                let settings: CaptionSettings = serde_json::from_str(&content)?;
                Ok(settings)
            });

        match result {
            Ok(mut settings) => {
                if settings.version < SETTINGS_VERSION {
                    info!(
                        "Migrating settings from version {} to {}",
                        settings.version, SETTINGS_VERSION
                    );
                    settings = self.migrate(settings);
                }
                settings.normalize();
                info!("Settings loaded from {:?}", self.settings_path);
                settings
            }
            Err(e) => {
                warn!("Failed to load settings, using defaults: {}", e);
                CaptionSettings::default()
            }
        }
    }

    /// Migrate settings from older version
    fn migrate(&self, mut settings: CaptionSettings) -> CaptionSettings {
        settings.version = SETTINGS_VERSION;
        settings
    }
}
