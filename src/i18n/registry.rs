//! Language registry: the fixed set of languages offered in the UI.
//!
//! The registry is built once at startup and handed to the HTTP layer through
//! the application state. Nothing else validates language codes against it;
//! the translation provider is free to accept or reject any code.

use serde::Serialize;

/// A language offered in the selection UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageConfig {
    /// Short language code passed to the provider (e.g., "en", "hi")
    pub code: &'static str,

    /// English display name (e.g., "Hindi")
    pub name: &'static str,

    /// Name of the language in the language itself (e.g., "हिन्दी")
    pub native_name: &'static str,
}

/// Immutable list of supported languages, in display order.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

impl LanguageRegistry {
    /// Build the registry with the default language set.
    pub fn new() -> Self {
        Self {
            languages: default_languages(),
        }
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages in display order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
    }
}

/// Default language configurations.
///
/// English plus eleven Indian languages, then three European ones.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        lang("en", "English", "English"),
        lang("hi", "Hindi", "हिन्दी"),
        lang("te", "Telugu", "తెలుగు"),
        lang("ta", "Tamil", "தமிழ்"),
        lang("kn", "Kannada", "ಕನ್ನಡ"),
        lang("ml", "Malayalam", "മലയാളം"),
        lang("mr", "Marathi", "मराठी"),
        lang("gu", "Gujarati", "ગુજરાતી"),
        lang("bn", "Bengali", "বাংলা"),
        lang("pa", "Punjabi", "ਪੰਜਾਬੀ"),
        lang("or", "Odia", "ଓଡ଼ିଆ"),
        lang("as", "Assamese", "অসমীয়া"),
        lang("es", "Spanish", "Español"),
        lang("fr", "French", "Français"),
        lang("de", "German", "Deutsch"),
    ]
}
