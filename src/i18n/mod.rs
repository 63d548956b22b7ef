//! Internationalization (i18n) module for multi-language support.
//!
//! All locale-related logic and localized page strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` handle resolved against the registry
//! - `strings`: One `LanguageStrings` dictionary per supported language
//! - `context`: The per-request `LanguageContext` handed to every view
//!
//! # Example
//!
//! ```rust,ignore
//! use circular_flow::i18n::{Language, LanguageContext};
//!
//! let mut ctx = LanguageContext::new(Language::canonical());
//! ctx.set_language("fr")?;
//! assert_eq!(ctx.strings().nav.home, "Accueil");
//! ```

mod context;
mod language;
mod registry;
mod strings;

pub use context::LanguageContext;
pub use language::{Language, LanguageError};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use strings::{
    CommonStrings, GreenPointsStrings, HomeStrings, IdeasStrings, LanguageStrings, MapStrings,
    MatchingStrings, NavStrings, NotFoundStrings, OnboardingStrings, ProfileStrings,
    ResourcesStrings, ServicesStrings, StoriesStrings, ARABIC_STRINGS, ENGLISH_STRINGS,
    FRENCH_STRINGS,
};
