//! Per-request language context.
//!
//! A `LanguageContext` is created once per request, from the `lang` cookie or
//! the configured default, and passed by reference to every view. Its only
//! mutation is [`LanguageContext::set_language`].

use tracing::warn;

use super::{Language, LanguageError, LanguageStrings, TextDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Resolve the context from a stored code.
    ///
    /// A missing, unknown or disabled code falls back to `default`.
    pub fn resolve(stored: Option<&str>, default: Language) -> Self {
        let language = match stored {
            Some(code) => Language::from_code(code).unwrap_or_else(|e| {
                warn!("Ignoring stored language: {}", e);
                default
            }),
            None => default,
        };
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.language.strings()
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    /// Switch to the language with the given code.
    ///
    /// Unknown or disabled codes are rejected and the current language is kept.
    pub fn set_language(&mut self, code: &str) -> Result<(), LanguageError> {
        self.language = Language::from_code(code)?;
        Ok(())
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::canonical())
    }
}
