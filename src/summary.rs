use serde::{Deserialize, Serialize};

/// Number of words kept by [`summarize`]
pub const SUMMARY_WORD_LIMIT: usize = 50;

/// Appended when the input had more than [`SUMMARY_WORD_LIMIT`] words
pub const TRUNCATION_SUFFIX: &str = "...";

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary_text: String,
}

/// Whether `c` separates words.
///
/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (U+001C..=U+001F).
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Keep the first 50 words of `text`.
///
/// Words are re-joined with single spaces, and "..." is appended directly to
/// the last kept word when anything was cut off.
pub fn summarize(text: &str) -> String {
    let mut words = text.split(is_word_separator).filter(|w| !w.is_empty());
    let kept: Vec<&str> = words.by_ref().take(SUMMARY_WORD_LIMIT).collect();

    let mut summary = kept.join(" ");
    if words.next().is_some() {
        summary.push_str(TRUNCATION_SUFFIX);
    }
    summary
}

impl SummarizeRequest {
    pub fn summarize(&self) -> SummarizeResponse {
        SummarizeResponse {
            summary_text: summarize(&self.text),
        }
    }
}
