use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, DEFAULT_STATIC_DIR};
use crate::i18n::LanguageRegistry;
use crate::translation::{GoogleTranslator, TranslationGateway, TranslationProvider};

/// Services shared by every request handler.
///
/// Everything in here is immutable; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub languages: Arc<LanguageRegistry>,
    pub translator: TranslationGateway,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Wire the production services described by `config`.
    pub fn new(config: &Config) -> Self {
        let provider = Arc::new(GoogleTranslator::new(config.translate_api_url.clone()));
        Self::with_provider(provider).with_static_dir(&config.static_dir)
    }

    /// Wire the services around an arbitrary translation provider.
    pub fn with_provider(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            languages: Arc::new(LanguageRegistry::new()),
            translator: TranslationGateway::new(provider),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Serve the browser client from `dir` instead of the default.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }
}
