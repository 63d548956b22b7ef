//! Language type: validated language representation.

use thiserror::Error;

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings, TextDirection};

/// Reasons a language code cannot be selected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),

    #[error("Language '{0}' is not enabled")]
    Disabled(String),
}

/// A validated language.
///
/// Only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fr")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err(LanguageError)` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(LanguageError::Disabled(code.to_string())),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    /// Get the canonical (source) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// ISO 639-1 language code, also used as the cookie value.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for values built via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    /// The string dictionary for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert!(english.config().is_canonical);
    }

    #[test]
    fn test_french_constant() {
        let french = Language::FRENCH;
        assert_eq!(french.code(), "fr");
        assert!(!french.config().is_canonical);
    }

    #[test]
    fn test_arabic_constant() {
        let arabic = Language::ARABIC;
        assert_eq!(arabic.code(), "ar");
        assert_eq!(arabic.direction(), TextDirection::RightToLeft);
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_supported() {
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code("fr").unwrap(), Language::FRENCH);
        assert_eq!(Language::from_code("ar").unwrap(), Language::ARABIC);
    }

    #[test]
    fn test_from_code_unknown() {
        let err = Language::from_code("xx").unwrap_err();
        assert_eq!(err, LanguageError::Unknown("xx".to_string()));
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_strings_follow_language() {
        assert_eq!(Language::ENGLISH.strings().nav.home, "Home");
        assert_eq!(Language::FRENCH.strings().nav.home, "Accueil");
    }
}
