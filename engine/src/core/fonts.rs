//! Font Style Transformations
//!
//! Decorative text styles built from Unicode combining marks and the
//! Mathematical Alphanumeric Symbols block. Every transform works on
//! Unicode scalar values; characters a rule does not cover pass through.

use rand::Rng;
use serde::{Deserialize, Serialize};

const COMBINING_LOW_LINE: char = '\u{0332}';
const COMBINING_LONG_STROKE: char = '\u{0336}';
const COMBINING_ENCLOSING_CIRCLE: char = '\u{20DD}';
const COMBINING_MILLIONS_SIGN: char = '\u{0489}';

const BOLD_UPPER_START: u32 = 0x1D400;
const BOLD_LOWER_START: u32 = 0x1D41A;
const ITALIC_UPPER_START: u32 = 0x1D434;
const ITALIC_LOWER_START: u32 = 0x1D44E;

// =============================================================================
// Font Style
// =============================================================================

/// Character-level visual styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Underline,
    Strikethrough,
    Circled,
    Glitch,
    Bold,
    Italic,
    Funky,
    Shadow,
}

impl FontStyle {
    /// All font styles in display order
    pub const ALL: [FontStyle; 9] = [
        FontStyle::Normal,
        FontStyle::Underline,
        FontStyle::Strikethrough,
        FontStyle::Circled,
        FontStyle::Glitch,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::Funky,
        FontStyle::Shadow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "Normal",
            FontStyle::Underline => "Underline",
            FontStyle::Strikethrough => "Strikethrough",
            FontStyle::Circled => "Circled",
            FontStyle::Glitch => "Glitch",
            FontStyle::Bold => "Bold",
            FontStyle::Italic => "Italic",
            FontStyle::Funky => "Funky",
            FontStyle::Shadow => "Shadow",
        }
    }

    /// Resolves a display name. Names are case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    /// Applies this style to `text`.
    ///
    /// Only `Funky` consumes randomness.
    pub fn apply(self, text: &str, rng: &mut impl Rng) -> String {
        match self {
            FontStyle::Normal => text.to_string(),
            FontStyle::Underline => append_mark(text, COMBINING_LOW_LINE),
            FontStyle::Strikethrough => append_mark(text, COMBINING_LONG_STROKE),
            FontStyle::Circled => circled(text),
            FontStyle::Glitch => append_mark(text, COMBINING_MILLIONS_SIGN),
            FontStyle::Bold => text
                .chars()
                .map(|c| offset_letter(c, BOLD_UPPER_START, BOLD_LOWER_START))
                .collect(),
            FontStyle::Italic => text
                .chars()
                .map(|c| offset_letter(c, ITALIC_UPPER_START, ITALIC_LOWER_START))
                .collect(),
            FontStyle::Funky => funky(text, rng),
            FontStyle::Shadow => {
                let mut out = String::with_capacity(text.len() + COMBINING_LONG_STROKE.len_utf8());
                out.push(COMBINING_LONG_STROKE);
                out.push_str(text);
                out
            }
        }
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies the font style named `font_style`; unknown names leave the text as is.
pub fn apply_font_style(font_style: &str, text: &str, rng: &mut impl Rng) -> String {
    match FontStyle::parse(font_style) {
        Some(style) => style.apply(text, rng),
        None => {
            tracing::debug!("Unknown font style '{}', leaving text unchanged", font_style);
            text.to_string()
        }
    }
}

// =============================================================================
// Transforms
// =============================================================================

fn append_mark(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len() * 2 + text.len() * mark.len_utf8());
    for c in text.chars() {
        out.push(c);
        out.push(mark);
    }
    out
}

fn circled(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        out.push(c);
        if c != ' ' {
            out.push(COMBINING_ENCLOSING_CIRCLE);
        }
    }
    out
}

/// Maps ASCII letters into a mathematical alphabet by fixed offset.
fn offset_letter(c: char, upper_start: u32, lower_start: u32) -> char {
    let mapped = match c {
        'A'..='Z' => char::from_u32(upper_start + (c as u32 - 'A' as u32)),
        'a'..='z' => char::from_u32(lower_start + (c as u32 - 'a' as u32)),
        _ => None,
    };
    mapped.unwrap_or(c)
}

fn funky(text: &str, rng: &mut impl Rng) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if rng.gen_bool(0.5) {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_normal_is_identity() {
        for text in ["", "hello", "A visual poetry. ✨", "日本語 123"] {
            assert_eq!(FontStyle::Normal.apply(text, &mut rng()), text);
        }
    }

    #[test]
    fn test_underline_appends_one_mark_per_char() {
        let text = "Hi ✨";
        let out = FontStyle::Underline.apply(text, &mut rng());
        let chars: Vec<char> = out.chars().collect();

        assert_eq!(chars.len(), text.chars().count() * 2);
        for (i, original) in text.chars().enumerate() {
            assert_eq!(chars[i * 2], original);
            assert_eq!(chars[i * 2 + 1], '\u{0332}');
        }
    }

    #[test]
    fn test_strikethrough_and_glitch_marks() {
        assert_eq!(
            FontStyle::Strikethrough.apply("ab", &mut rng()),
            "a\u{0336}b\u{0336}"
        );
        assert_eq!(FontStyle::Glitch.apply("a ", &mut rng()), "a\u{0489} \u{0489}");
    }

    #[test]
    fn test_circled_skips_spaces() {
        assert_eq!(
            FontStyle::Circled.apply("a b", &mut rng()),
            "a\u{20DD} b\u{20DD}"
        );
    }

    #[test]
    fn test_bold_maps_letters_only() {
        let out = FontStyle::Bold.apply("AbC 1", &mut rng());
        let expected: String = [
            char::from_u32(0x1D400).unwrap(),
            char::from_u32(0x1D41B).unwrap(),
            char::from_u32(0x1D402).unwrap(),
            ' ',
            '1',
        ]
        .iter()
        .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_italic_maps_letters_only() {
        let out = FontStyle::Italic.apply("Az!", &mut rng());
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(chars[0] as u32, 0x1D434);
        assert_eq!(chars[1] as u32, 0x1D467);
        assert_eq!(chars[2], '!');
    }

    #[test]
    fn test_bold_leaves_non_ascii_untouched() {
        assert_eq!(FontStyle::Bold.apply("é ✨ 42", &mut rng()), "é ✨ 42");
    }

    #[test]
    fn test_funky_only_changes_case() {
        let text = "Minimal and magical. 📸";
        let mut rng = rng();
        for _ in 0..20 {
            let out = FontStyle::Funky.apply(text, &mut rng);
            assert_eq!(out.to_lowercase(), text.to_lowercase());
        }
    }

    #[test]
    fn test_funky_produces_mixed_case() {
        let text = "a".repeat(64);
        let out = FontStyle::Funky.apply(&text, &mut rng());
        assert!(out.contains('a'));
        assert!(out.contains('A'));
    }

    #[test]
    fn test_shadow_prepends_single_mark() {
        assert_eq!(FontStyle::Shadow.apply("hi", &mut rng()), "\u{0336}hi");
        assert_eq!(FontStyle::Shadow.apply("", &mut rng()), "\u{0336}");
    }

    #[test]
    fn test_unknown_font_style_is_identity() {
        assert_eq!(apply_font_style("Sparkly", "hello", &mut rng()), "hello");
    }

    #[test]
    fn test_apply_font_style_by_name() {
        assert_eq!(apply_font_style("Shadow", "x", &mut rng()), "\u{0336}x");
        assert_eq!(apply_font_style("Bold", "a", &mut rng()), "\u{1D41A}");
        assert_eq!(apply_font_style("bold", "a", &mut rng()), "a");
        assert_eq!(apply_font_style("SHADOW", "x", &mut rng()), "x");
    }

    #[test]
    fn test_font_style_names_round_trip() {
        for style in FontStyle::ALL {
            assert_eq!(FontStyle::parse(style.as_str()), Some(style));
        }
    }
}
