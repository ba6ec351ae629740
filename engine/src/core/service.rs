//! Caption Service
//!
//! Binds the composer to a caption model. The model is consulted lazily:
//! only when the requested style has no phrase to offer.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::captioning::{create_caption_model, CaptionModel, ImageInput};
use crate::core::composer::CaptionComposer;
use crate::core::languages::LanguageTable;
use crate::core::settings::CaptionSettings;
use crate::core::styles::StyleCatalog;
use crate::core::translation::{create_translation_provider, Translator};
use crate::core::{CoreError, CoreResult};

/// Caption options chosen by the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    /// Style name (e.g. "Aesthetic")
    pub style: String,
    /// Font style name (e.g. "Bold")
    pub font_style: String,
    /// Language name (e.g. "French")
    pub language: String,
}

impl CaptionRequest {
    pub fn new(style: &str, font_style: &str, language: &str) -> Self {
        Self {
            style: style.to_string(),
            font_style: font_style.to_string(),
            language: language.to_string(),
        }
    }
}

/// Caption generation entry point
pub struct CaptionService {
    composer: CaptionComposer,
    caption_model: Arc<dyn CaptionModel>,
}

impl CaptionService {
    pub fn new(composer: CaptionComposer, caption_model: Arc<dyn CaptionModel>) -> Self {
        Self {
            composer,
            caption_model,
        }
    }

    /// Builds the service, its providers and catalogs from settings.
    ///
    /// Settings are normalized first, so hand-built values get the same
    /// clamping as a loaded file. Fails when a provider cannot be constructed.
    pub fn from_settings(settings: &CaptionSettings) -> CoreResult<Self> {
        let mut settings = settings.clone();
        settings.normalize();

        let mut styles = StyleCatalog::builtin();
        for (name, phrases) in &settings.custom_styles {
            styles = styles.with_custom_style(name, phrases.clone())?;
        }

        let provider = create_translation_provider(settings.translation.to_provider_config())?;
        let translator = Translator::new(Arc::from(provider), LanguageTable::builtin()?)
            .with_default_language(&settings.default_language)
            .with_timeout(Duration::from_secs(settings.translation.timeout_secs));

        let caption_model = create_caption_model(settings.captioning.to_model_config())?;

        if !translator.is_available() {
            warn!(
                translator = %settings.translation.provider,
                "Translation provider unavailable, captions stay untranslated"
            );
        }
        if !caption_model.is_available() {
            warn!(
                caption_model = caption_model.name(),
                "Caption model unavailable, unknown styles will fail"
            );
        }

        info!(
            translator = %settings.translation.provider,
            caption_model = %settings.captioning.provider,
            styles = styles.style_names().len(),
            "Caption service ready"
        );

        Ok(Self::new(
            CaptionComposer::new(styles, translator),
            Arc::from(caption_model),
        ))
    }

    pub fn composer(&self) -> &CaptionComposer {
        &self.composer
    }

    pub fn caption_model(&self) -> &dyn CaptionModel {
        self.caption_model.as_ref()
    }

    /// Composes a caption from an already-known base description.
    pub async fn compose<R: Rng + Send>(
        &self,
        base_description: &str,
        request: &CaptionRequest,
        rng: &mut R,
    ) -> String {
        self.composer
            .compose(
                base_description,
                &request.style,
                &request.font_style,
                &request.language,
                rng,
            )
            .await
    }

    /// Generates a caption for `image`.
    ///
    /// The caption model runs only when the style yields no phrase; its
    /// failure is the one error this returns.
    pub async fn generate<R: Rng + Send>(
        &self,
        request: &CaptionRequest,
        image: &ImageInput,
        rng: &mut R,
    ) -> CoreResult<String> {
        let styled = match self.composer.pick_phrase(&request.style, rng) {
            Some(phrase) => phrase,
            None => self.describe(image).await?,
        };

        Ok(self
            .composer
            .decorate(&styled, &request.font_style, &request.language, rng)
            .await)
    }

    async fn describe(&self, image: &ImageInput) -> CoreResult<String> {
        if !self.caption_model.is_available() {
            return Err(CoreError::CaptioningFailed(format!(
                "Caption model '{}' is not available",
                self.caption_model.name()
            )));
        }

        debug!(
            model = self.caption_model.name(),
            bytes = image.len(),
            "Requesting base description"
        );

        let description = self.caption_model.describe(image).await.map_err(|e| {
            warn!(model = self.caption_model.name(), "Captioning failed: {}", e);
            match e {
                CoreError::CaptioningFailed(_) => e,
                other => CoreError::CaptioningFailed(other.to_string()),
            }
        })?;

        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::CaptioningFailed(
                "Caption model returned an empty description".to_string(),
            ));
        }

        Ok(description.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
