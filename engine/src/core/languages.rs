//! Language Table
//!
//! Maps user-facing language names to translation language codes and back.
//! The table is validated once when it is built; lookups afterwards never fail
//! loudly, they just return `None`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::{CoreError, CoreResult};

/// Language that needs no translation
pub const DEFAULT_LANGUAGE: &str = "English";

/// Built-in languages in display order
pub const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Telugu", "te"),
    ("Hindi", "hi"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Chinese", "zh-CN"),
    ("Arabic", "ar"),
    ("Russian", "ru"),
    ("Bengali", "bn"),
    ("Gujarati", "gu"),
    ("Kannada", "kn"),
    ("Malayalam", "ml"),
    ("Marathi", "mr"),
    ("Punjabi", "pa"),
    ("Tamil", "ta"),
    ("Urdu", "ur"),
];

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,4})?$").expect("language code pattern is valid")
    })
}

/// A language name with its code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub code: String,
}

/// Validated language name/code table
#[derive(Clone, Debug)]
pub struct LanguageTable {
    languages: Vec<Language>,
}

impl LanguageTable {
    /// Builds a table, rejecting blank names, malformed codes and duplicates.
    pub fn new<I, N, C>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut languages = Vec::new();
        let mut names = HashSet::new();
        let mut codes = HashSet::new();

        for (name, code) in entries {
            let name: String = name.into();
            let code: String = code.into();

            if name.trim().is_empty() {
                return Err(CoreError::InvalidLanguageTable(
                    "Language name cannot be empty".to_string(),
                ));
            }
            if !code_pattern().is_match(&code) {
                return Err(CoreError::InvalidLanguageTable(format!(
                    "Invalid code '{}' for language '{}'",
                    code, name
                )));
            }
            if !names.insert(name.to_lowercase()) {
                return Err(CoreError::InvalidLanguageTable(format!(
                    "Duplicate language name: {}",
                    name
                )));
            }
            if !codes.insert(code.to_lowercase()) {
                return Err(CoreError::InvalidLanguageTable(format!(
                    "Duplicate language code: {}",
                    code
                )));
            }

            languages.push(Language { name, code });
        }

        if languages.is_empty() {
            return Err(CoreError::InvalidLanguageTable(
                "Language table is empty".to_string(),
            ));
        }

        Ok(Self { languages })
    }

    /// The built-in twenty-language table
    pub fn builtin() -> CoreResult<Self> {
        Self::new(BUILTIN_LANGUAGES.iter().copied())
    }

    /// Language names in display order
    pub fn names(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn contains(&self, name: &str) -> bool {
        self.code_for(name).is_some()
    }

    /// Resolves a language name to its code
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.code.as_str())
    }

    /// Resolves a language code to its name
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.name.as_str())
    }
}
