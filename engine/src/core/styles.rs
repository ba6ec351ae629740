//! Caption Style Catalog
//!
//! Named tones (Emotional, Aesthetic, ...) each backed by a list of
//! pre-written phrases. A catalog is built once from the built-in data plus
//! any custom styles from settings and is read-only afterwards.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{CoreError, CoreResult};

// =============================================================================
// Style Name
// =============================================================================

/// Built-in caption styles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleName {
    Emotional,
    Aesthetic,
    Poetic,
    Funny,
    Dramatic,
    Inspirational,
    Romantic,
}

impl StyleName {
    /// All built-in styles in display order
    pub const ALL: [StyleName; 7] = [
        StyleName::Emotional,
        StyleName::Aesthetic,
        StyleName::Poetic,
        StyleName::Funny,
        StyleName::Dramatic,
        StyleName::Inspirational,
        StyleName::Romantic,
    ];

    /// Display name, also used as the lookup key
    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Emotional => "Emotional",
            StyleName::Aesthetic => "Aesthetic",
            StyleName::Poetic => "Poetic",
            StyleName::Funny => "Funny",
            StyleName::Dramatic => "Dramatic",
            StyleName::Inspirational => "Inspirational",
            StyleName::Romantic => "Romantic",
        }
    }

    /// Resolves a display name. Names are case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == name)
    }

    /// Built-in phrases for this style
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            StyleName::Emotional => EMOTIONAL,
            StyleName::Aesthetic => AESTHETIC,
            StyleName::Poetic => POETIC,
            StyleName::Funny => FUNNY,
            StyleName::Dramatic => DRAMATIC,
            StyleName::Inspirational => INSPIRATIONAL,
            StyleName::Romantic => ROMANTIC,
        }
    }
}

impl std::fmt::Display for StyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Built-in Phrases
// =============================================================================

const EMOTIONAL: &[&str] = &[
    "This moment touches the soul.",
    "Every pixel carries emotion.",
    "Overflowing with feeling.",
    "A heart whisper in every frame.",
    "Captured tears and smiles.",
    "Raw feelings, frozen.",
    "Echoes of the heart.",
    "Silent emotions scream beauty.",
    "A pulse in each pixel.",
    "Feeling speaks louder here.",
    "Waves of heartfelt memory.",
    "Love and longing collide.",
    "Tears and joy held still.",
    "Captured soul spark.",
    "Sentiment stitched in pixels.",
    "Hearts don't lie, pictures neither.",
    "Melancholy beauty lingers.",
    "An emotional echo.",
    "Memory wrapped in light.",
    "Touch of inner storm.",
];

const AESTHETIC: &[&str] = &[
    "A visual poetry.",
    "Elegance frozen in time.",
    "Stunning frame of beauty.",
    "Art in its purest form.",
    "Color and calm meet.",
    "A touch of visual grace.",
    "Minimal and magical.",
    "Where light meets soul.",
    "Refined in pixels.",
    "A painter's dream.",
    "Chic yet simple.",
    "Sleek serenity.",
    "Timeless charm.",
    "Visually therapeutic.",
    "Muted but meaningful.",
    "Delicately beautiful.",
    "Ethereal essence.",
    "Whispers of beauty.",
    "Elegance reborn.",
    "Finesse in every frame.",
];

const POETIC: &[&str] = &[
    "Whispers in pixel rain.",
    "A silent verse in color.",
    "The sky wrote a poem here.",
    "When light rhymes with shadow.",
    "A haiku in hues.",
    "Stilled like a sonnet.",
    "Pixel symphony of emotion.",
    "A stanza of solitude.",
    "Framed thoughts linger.",
    "Love letters in contrast.",
    "Verses trapped in light.",
    "Ink of dreams in pixels.",
    "A canvas of soft musings.",
    "Serenading silence.",
    "Echoes of metaphors.",
    "Fleeting time, frozen rhyme.",
    "Imagery as poetry.",
    "Dreams caught in frame.",
    "Soft stanzas in silence.",
    "The camera wrote a poem.",
];

const FUNNY: &[&str] = &[
    "Even the camera laughed!",
    "Caption loading... humor found!",
    "Pixel comedy show!",
    "LOL in HD.",
    "When pixels joke.",
    "Caught mid-laugh.",
    "This image cracks up!",
    "High-res humor.",
    "Say cheese... or pizza?",
    "Pixelated punchline incoming!",
    "Giggle-certified!",
    "100% comedy in frame.",
    "Lens has jokes too.",
    "Zoom in for more fun.",
    "Mood: Meme-worthy.",
    "Laughs in every pixel.",
    "Snap and giggle.",
    "This image has dad jokes.",
    "Certified funboi moment.",
    "Trolled by a camera.",
];

const DRAMATIC: &[&str] = &[
    "Lights. Camera. Emotions!",
    "Pixel power unleashed.",
    "Dramatic enough to win an Oscar!",
    "Cinematic chaos!",
    "Frame of tension.",
    "A storm in silence.",
    "So intense, it stares back.",
    "Zoom into drama.",
    "Still screams passion.",
    "Bold and brooding.",
    "A saga in still.",
    "Explosive calm.",
    "Edge of emotion.",
    "When frames fight feelings.",
    "Dark mode activated.",
    "Peak drama alert.",
    "Unfiltered tension.",
    "Frame of fate.",
    "The plot thickens here.",
    "Theatrical vibes only.",
];

const INSPIRATIONAL: &[&str] = &[
    "Dream big, capture the moment.",
    "Every image tells a story of hope.",
    "Inspire through visuals.",
    "Motivation in every pixel.",
    "Shine on, silently.",
    "Frame your future.",
    "Vision becomes reality here.",
    "Faith in focus.",
    "Pixel-powered dreams.",
    "Belief captured boldly.",
    "Hope glows quietly.",
    "You got this... and that frame!",
    "Rise, always rise.",
    "Stillness fuels strength.",
    "A spark to go on.",
    "Visual victory vibes.",
    "Shoot your shot – and dream.",
    "Picture says: 'Keep going!'",
    "Encouragement in high res.",
    "Courage framed beautifully.",
];

const ROMANTIC: &[&str] = &[
    "Love captured in every frame.",
    "Every pixel whispers 'I love you'.",
    "Love through the lens.",
    "Hearts aligned here.",
    "A kiss in color.",
    "Romance in resolution.",
    "Soft stares and warmth.",
    "You & me: framed forever.",
    "Light loves you too.",
    "A feeling, not a photo.",
    "Held by hues of affection.",
    "Cupid clicked this!",
    "Camera crush moment.",
    "Soft hearts, sharp focus.",
    "Shot through the heart.",
    "Forever in pixels.",
    "Blushing shadows.",
    "In love with this moment.",
    "Your eyes clicked this.",
    "A dreamy affection burst.",
];

// =============================================================================
// Style Catalog
// =============================================================================

/// A named style with its candidate phrases
#[derive(Clone, Debug, PartialEq, Eq)]
struct StyleEntry {
    name: String,
    phrases: Vec<String>,
}

/// Read-only mapping of style name to candidate phrases
#[derive(Clone, Debug)]
pub struct StyleCatalog {
    entries: Vec<StyleEntry>,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleCatalog {
    /// Catalog with the seven built-in styles
    pub fn builtin() -> Self {
        let entries = StyleName::ALL
            .iter()
            .map(|style| StyleEntry {
                name: style.as_str().to_string(),
                phrases: style.phrases().iter().map(|p| p.to_string()).collect(),
            })
            .collect();

        Self { entries }
    }

    /// Adds (or replaces) a named style.
    ///
    /// Phrases must be non-empty, non-blank and distinct.
    pub fn with_custom_style(mut self, name: &str, phrases: Vec<String>) -> CoreResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidStyleCatalog(
                "Style name cannot be empty".to_string(),
            ));
        }
        if phrases.is_empty() {
            return Err(CoreError::InvalidStyleCatalog(format!(
                "Style '{}' has no phrases",
                name
            )));
        }

        let mut seen = HashSet::new();
        for phrase in &phrases {
            if phrase.trim().is_empty() {
                return Err(CoreError::InvalidStyleCatalog(format!(
                    "Style '{}' contains a blank phrase",
                    name
                )));
            }
            if !seen.insert(phrase.as_str()) {
                return Err(CoreError::InvalidStyleCatalog(format!(
                    "Style '{}' contains duplicate phrase: {}",
                    name, phrase
                )));
            }
        }

        let entry = StyleEntry {
            name: name.to_string(),
            phrases,
        };
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }

        Ok(self)
    }

    /// Style names in display order
    pub fn style_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Returns true if the style is registered
    pub fn contains(&self, style: &str) -> bool {
        self.find(style).is_some()
    }

    /// Candidate phrases for a style (empty when unknown)
    pub fn phrases(&self, style: &str) -> &[String] {
        self.find(style).map(|e| e.phrases.as_slice()).unwrap_or(&[])
    }

    /// Picks one phrase uniformly at random.
    ///
    /// Returns `None` when the style is unknown or has no phrases, in which
    /// case the caller substitutes the base description.
    pub fn pick(&self, style: &str, rng: &mut impl Rng) -> Option<&str> {
        self.phrases(style).choose(rng).map(String::as_str)
    }

    fn find(&self, style: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|e| e.name == style)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_styles_have_twenty_distinct_phrases() {
        for style in StyleName::ALL {
            let phrases = style.phrases();
            assert_eq!(phrases.len(), 20, "style {}", style);

            let unique: HashSet<_> = phrases.iter().collect();
            assert_eq!(unique.len(), phrases.len(), "style {}", style);
        }
    }

    #[test]
    fn test_style_name_parsing() {
        assert_eq!(StyleName::parse("Aesthetic"), Some(StyleName::Aesthetic));
        assert_eq!(StyleName::parse("Romantic"), Some(StyleName::Romantic));
        assert_eq!(StyleName::parse("romantic"), None);
        assert_eq!(StyleName::parse(" Funny "), None);
        assert_eq!(StyleName::parse("UnknownTag"), None);
    }

    #[test]
    fn test_pick_returns_member_of_style() {
        let catalog = StyleCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for style in StyleName::ALL {
            for _ in 0..50 {
                let phrase = catalog.pick(style.as_str(), &mut rng).unwrap();
                assert!(style.phrases().contains(&phrase));
            }
        }
    }

    #[test]
    fn test_pick_unknown_style_signals_fallback() {
        let catalog = StyleCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(catalog.pick("UnknownTag", &mut rng).is_none());
        assert!(catalog.pick("", &mut rng).is_none());
    }

    #[test]
    fn test_pick_is_case_sensitive() {
        let catalog = StyleCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(catalog.pick("aesthetic", &mut rng).is_none());
        assert!(catalog.pick("AESTHETIC", &mut rng).is_none());
        assert!(catalog.pick(" Aesthetic", &mut rng).is_none());
        assert!(!catalog.contains("funny"));
    }

    #[test]
    fn test_pick_is_reproducible_with_same_seed() {
        let catalog = StyleCatalog::builtin();
        let first = catalog
            .pick("Poetic", &mut StdRng::seed_from_u64(42))
            .map(str::to_string);
        let second = catalog
            .pick("Poetic", &mut StdRng::seed_from_u64(42))
            .map(str::to_string);
        assert_eq!(first, second);
    }

    #[test]
    fn test_style_names_in_display_order() {
        let catalog = StyleCatalog::builtin();
        assert_eq!(
            catalog.style_names(),
            vec![
                "Emotional",
                "Aesthetic",
                "Poetic",
                "Funny",
                "Dramatic",
                "Inspirational",
                "Romantic"
            ]
        );
    }

    #[test]
    fn test_custom_style_added_and_picked() {
        let catalog = StyleCatalog::builtin()
            .with_custom_style("Spooky", vec!["Boo.".to_string(), "Eek.".to_string()])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(catalog.contains("Spooky"));
        assert_eq!(catalog.style_names().last(), Some(&"Spooky"));
        let phrase = catalog.pick("Spooky", &mut rng).unwrap();
        assert!(phrase == "Boo." || phrase == "Eek.");
    }

    #[test]
    fn test_custom_style_replaces_builtin() {
        let catalog = StyleCatalog::builtin()
            .with_custom_style("Funny", vec!["Only joke.".to_string()])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(catalog.style_names().len(), 7);
        assert_eq!(catalog.pick("Funny", &mut rng), Some("Only joke."));
    }

    #[test]
    fn test_custom_style_with_other_case_is_separate_style() {
        let catalog = StyleCatalog::builtin()
            .with_custom_style("funny", vec!["Lower joke.".to_string()])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let names = catalog.style_names();
        assert_eq!(names.len(), 8);
        assert_eq!(names.iter().filter(|n| **n == "Funny").count(), 1);
        assert_eq!(names.iter().filter(|n| **n == "funny").count(), 1);

        for _ in 0..20 {
            assert_eq!(catalog.pick("funny", &mut rng), Some("Lower joke."));
            let builtin = catalog.pick("Funny", &mut rng).unwrap();
            assert!(StyleName::Funny.phrases().contains(&builtin));
        }
        assert!(catalog.pick("FUNNY", &mut rng).is_none());
    }

    #[test]
    fn test_custom_style_validation() {
        assert!(StyleCatalog::builtin()
            .with_custom_style("Empty", Vec::new())
            .is_err());
        assert!(StyleCatalog::builtin()
            .with_custom_style("  ", vec!["x".to_string()])
            .is_err());
        assert!(StyleCatalog::builtin()
            .with_custom_style("Blank", vec!["   ".to_string()])
            .is_err());
        assert!(StyleCatalog::builtin()
            .with_custom_style("Dup", vec!["a".to_string(), "a".to_string()])
            .is_err());
    }
}
