//! Destructive and Edge Case Tests for the Caption Pipeline
//!
//! These tests verify the robustness of the pipeline against hostile or
//! unusual inputs: empty strings, non-ASCII text, oversized captions and
//! malformed configuration.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::composer::CaptionComposer;
use crate::core::fonts::{apply_font_style, FontStyle};
use crate::core::languages::LanguageTable;
use crate::core::styles::StyleCatalog;
use crate::core::translation::{MockTranslationProvider, Translator};

fn rng() -> StdRng {
    StdRng::seed_from_u64(1234)
}

#[test]
fn test_destructive_empty_text_all_font_styles() {
    for style in FontStyle::ALL {
        let out = style.apply("", &mut rng());
        match style {
            FontStyle::Shadow => assert_eq!(out, "\u{0336}"),
            _ => assert_eq!(out, ""),
        }
    }
}

#[test]
fn test_destructive_already_styled_text_is_stable() {
    // Mathematical bold letters are outside A-Z/a-z and pass through.
    let bold = FontStyle::Bold.apply("Hello", &mut rng());
    assert_eq!(FontStyle::Bold.apply(&bold, &mut rng()), bold);
    assert_eq!(FontStyle::Italic.apply(&bold, &mut rng()), bold);
}

#[test]
fn test_destructive_multi_scalar_emoji_underline() {
    // "❤️" is U+2764 U+FE0F; each scalar gets its own mark.
    let out = FontStyle::Underline.apply("❤️", &mut rng());
    assert_eq!(out, "\u{2764}\u{0332}\u{FE0F}\u{0332}");
}

#[test]
fn test_destructive_circled_only_skips_ascii_space() {
    // Tabs and non-breaking spaces are not ' ' and get a mark.
    let out = FontStyle::Circled.apply("a\t\u{00A0}", &mut rng());
    assert_eq!(out, "a\u{20DD}\t\u{20DD}\u{00A0}\u{20DD}");
}

#[test]
fn test_destructive_funky_handles_expanding_case() {
    // 'ß' upper-cases to "SS"; output may grow but must not panic.
    let out = FontStyle::Funky.apply("ßßßß", &mut rng());
    assert!(out.chars().count() >= 4);
    assert!(out.chars().all(|c| c == 'ß' || c == 'S'));
}

#[test]
fn test_destructive_large_input_font_styles() {
    let text = "Finesse in every frame. ✨ ".repeat(2_000);
    let chars = text.chars().count();

    let underlined = apply_font_style("Underline", &text, &mut rng());
    assert_eq!(underlined.chars().count(), chars * 2);

    let bold = apply_font_style("Bold", &text, &mut rng());
    assert_eq!(bold.chars().count(), chars);
}

#[test]
fn test_destructive_font_style_name_variants() {
    assert_eq!(apply_font_style("", "abc", &mut rng()), "abc");
    assert_eq!(apply_font_style("Bold\u{0000}", "abc", &mut rng()), "abc");
    assert_eq!(apply_font_style(" Bold ", "a", &mut rng()), "a");
}

#[test]
fn test_destructive_style_names_are_not_patterns() {
    let catalog = StyleCatalog::builtin();
    let mut rng = rng();

    assert!(catalog.pick(".*", &mut rng).is_none());
    assert!(catalog.pick("Aesthetic\n", &mut rng).is_none());
    assert!(catalog.pick("Aes thetic", &mut rng).is_none());
}

#[test]
fn test_destructive_language_code_injection_rejected() {
    assert!(LanguageTable::new([("French", "fr&tl=de")]).is_err());
    assert!(LanguageTable::new([("French", "fr ")]).is_err());
    assert!(LanguageTable::new([("French", "../fr")]).is_err());
}

#[tokio::test]
async fn test_destructive_oversized_caption_with_failing_translator() {
    let translator = Translator::new(
        Arc::new(MockTranslationProvider::failing()),
        LanguageTable::builtin().unwrap(),
    );
    let composer = CaptionComposer::new(StyleCatalog::builtin(), translator);
    let base = "x".repeat(100_000);

    let caption = composer
        .compose(&base, "", "Normal", "Korean", &mut rng())
        .await;

    assert!(caption.starts_with(&base));
    assert!(caption.len() > base.len());
}
