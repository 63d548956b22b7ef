//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is immutable data. It is built once on first access through
//! `OnceLock` and never changes afterwards; the *selected* language lives in
//! a per-request [`LanguageContext`](super::LanguageContext), not here.

use std::sync::OnceLock;

use super::strings::{LanguageStrings, ARABIC_STRINGS, ENGLISH_STRINGS, FRENCH_STRINGS};

/// Writing direction of a language, rendered as the `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_html(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "fr", "ar")
    pub code: &'static str,

    /// Native name of the language, shown in the language selector
    pub native_name: &'static str,

    /// Writing direction
    pub direction: TextDirection,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// The string dictionary rendered for this language
    pub strings: &'static LanguageStrings,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in selector order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// English (canonical), French and Arabic.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            native_name: "English",
            direction: TextDirection::LeftToRight,
            is_canonical: true,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "fr",
            native_name: "Français",
            direction: TextDirection::LeftToRight,
            is_canonical: false,
            enabled: true,
            strings: &FRENCH_STRINGS,
        },
        LanguageConfig {
            code: "ar",
            native_name: "العربية",
            direction: TextDirection::RightToLeft,
            is_canonical: false,
            enabled: true,
            strings: &ARABIC_STRINGS,
        },
    ]
}
