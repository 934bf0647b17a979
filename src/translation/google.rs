use super::{ProviderError, TranslationProvider};
use crate::summary::is_word_separator;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Longest text (in characters, exclusive) the web endpoint accepts
pub const MAX_TEXT_CHARS: usize = 5000;

/// Client for Google's public web translation endpoint (`client=gtx`).
///
/// No API key is needed. The endpoint answers with a nested JSON array whose
/// first element holds one entry per translated sentence.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_a/single", self.base_url)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        // Limit applies to the text as sent, surrounding whitespace included
        let len = text.chars().count();
        if len >= MAX_TEXT_CHARS {
            return Err(ProviderError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        let text = text.trim_matches(is_word_separator);

        // Nothing to translate, skip the round trip
        if text.is_empty() || source_lang == target_lang {
            return Ok(text.to_string());
        }

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(ProviderError::Status { status, body });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        let translated = extract_translation(&payload)?;
        debug!(
            "Translated {} chars ({} -> {})",
            len, source_lang, target_lang
        );
        Ok(translated)
    }
}

/// Concatenate the translated sentence fragments of a `translate_a/single` payload.
///
/// Shape: `[[["Hola ", "Hello ", ...], ["mundo", "world", ...]], null, "en", ...]`
fn extract_translation(payload: &Value) -> Result<String, ProviderError> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::MalformedResponse("missing sentence list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "no translated text in response".to_string(),
        ));
    }

    Ok(translated)
}
