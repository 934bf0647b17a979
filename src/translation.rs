//! Translation gateway: forwards text to an external provider.
//!
//! The gateway does no validation of its own. Empty text, identical source
//! and target codes, or codes the UI never offers are all passed through, and
//! the provider decides what to do with them.

mod google;

pub use google::GoogleTranslator;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Source language used when the request does not name one
pub const DEFAULT_SOURCE_LANG: &str = "auto";

/// Target language used when the request does not name one
pub const DEFAULT_TARGET_LANG: &str = "en";

/// Failure of a provider call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Failed to reach translation service: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation service error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response from translation service: {0}")]
    MalformedResponse(String),

    #[error("Text must be shorter than {max} characters, got {len}")]
    TextTooLong { len: usize, max: usize },
}

/// Anything that can translate text between two language codes.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl Default for TranslateRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub translated_text: String,
    pub original_text: String,
}

/// Payload returned by `/translate`: a translation or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslateResponse {
    Translated(Translation),
    Failed { error: String },
}

impl From<Result<Translation, ProviderError>> for TranslateResponse {
    fn from(result: Result<Translation, ProviderError>) -> Self {
        match result {
            Ok(translation) => TranslateResponse::Translated(translation),
            Err(e) => TranslateResponse::Failed {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Clone)]
pub struct TranslationGateway {
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationGateway {
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Translate `request.text` with the injected provider.
    ///
    /// Provider failures are logged and returned; the caller decides how to
    /// present them.
    pub async fn translate(&self, request: &TranslateRequest) -> Result<Translation, ProviderError> {
        debug!(
            "Translating {} chars from '{}' to '{}'",
            request.text.chars().count(),
            request.source_lang,
            request.target_lang
        );

        match self
            .provider
            .translate(&request.text, &request.source_lang, &request.target_lang)
            .await
        {
            Ok(translated_text) => Ok(Translation {
                translated_text,
                original_text: request.text.clone(),
            }),
            Err(e) => {
                warn!(
                    "Translation from '{}' to '{}' failed: {}",
                    request.source_lang, request.target_lang, e
                );
                Err(e)
            }
        }
    }
}
