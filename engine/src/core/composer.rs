//! Caption Composer
//!
//! Runs the caption pipeline in a fixed order:
//!
//! ```text
//! style phrase (or base description)
//!   -> + " " + emoji
//!   -> translate (soft-fail)
//!   -> font style
//! ```
//!
//! Composition never fails. Unknown styles fall back to the base description,
//! unknown font styles to identity and translation problems to the
//! untranslated text.

use rand::Rng;
use tracing::debug;

use crate::core::emoji::pick_emoji;
use crate::core::fonts::apply_font_style;
use crate::core::styles::StyleCatalog;
use crate::core::translation::Translator;

/// Orchestrates style, emoji, translation and font steps
pub struct CaptionComposer {
    styles: StyleCatalog,
    translator: Translator,
}

impl CaptionComposer {
    pub fn new(styles: StyleCatalog, translator: Translator) -> Self {
        Self { styles, translator }
    }

    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Picks a phrase for `style`, or `None` when the base description is needed
    pub fn pick_phrase(&self, style: &str, rng: &mut impl Rng) -> Option<String> {
        let phrase = self.styles.pick(style, rng).map(str::to_string);
        if phrase.is_none() {
            debug!("Style '{}' has no phrases, using base description", style);
        }
        phrase
    }

    /// Composes the final caption.
    pub async fn compose<R: Rng + Send>(
        &self,
        base_description: &str,
        style: &str,
        font_style: &str,
        language: &str,
        rng: &mut R,
    ) -> String {
        let styled = self
            .pick_phrase(style, rng)
            .unwrap_or_else(|| base_description.to_string());

        self.decorate(&styled, font_style, language, rng).await
    }

    /// Appends an emoji to already-resolved text, then translates and styles it.
    pub async fn decorate<R: Rng + Send>(
        &self,
        styled: &str,
        font_style: &str,
        language: &str,
        rng: &mut R,
    ) -> String {
        let emoji = pick_emoji(rng);
        let combined = format!("{} {}", styled, emoji);
        let translated = self.translator.translate(&combined, language).await;
        apply_font_style(font_style, &translated, rng)
    }
}

// =============================================================================
// Tests
// =============================================================================
