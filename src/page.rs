//! Index page with the language pickers and the speech client controls.
//!
//! Behavior lives in `static/main.js`; this module only renders the markup
//! and the language options.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use crate::translation::{DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Speech Translator</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <main>
    <h1>Speech Translator</h1>
    <div class="row">
      <label>From
        <select id="source_lang">
{{SOURCE_OPTIONS}}
        </select>
      </label>
      <label>To
        <select id="target_lang">
{{TARGET_OPTIONS}}
        </select>
      </label>
      <button id="startBtn" title="Start or stop listening">Mic</button>
      <button id="translateBtn">Translate</button>
    </div>
    <canvas id="visualizer" width="600" height="80"></canvas>
    <div class="boxes">
      <div id="original-box" class="text-box">
        <div class="text-actions">
          <button class="copy-action" title="Copy">Copy</button>
          <button class="listen-action" title="Listen">Listen</button>
        </div>
        <h3>Original</h3>
        <div id="originalText" class="box-text" contenteditable="true"></div>
      </div>
      <div id="translated-box" class="text-box">
        <div class="text-actions">
          <button class="copy-action" title="Copy">Copy</button>
          <button class="listen-action" title="Listen">Listen</button>
        </div>
        <h3>Translation</h3>
        <div id="translatedText" class="box-text"></div>
      </div>
    </div>
    <div id="summarize-container" class="row"></div>
    <div id="summary-container"></div>
  </main>
  <script src="/static/main.js"></script>
</body>
</html>
"#;

/// Render the index page listing every language in the registry.
///
/// The source picker also offers automatic detection.
pub fn render_index(registry: &LanguageRegistry) -> String {
    let mut source_options = vec![format!(
        r#"        <option value="{}" selected>Detect language</option>"#,
        DEFAULT_SOURCE_LANG
    )];
    source_options.extend(registry.list().iter().map(|lang| option(lang, None)));

    let target_options: Vec<String> = registry
        .list()
        .iter()
        .map(|lang| option(lang, Some(DEFAULT_TARGET_LANG)))
        .collect();

    PAGE_TEMPLATE
        .replace("{{SOURCE_OPTIONS}}", &source_options.join("\n"))
        .replace("{{TARGET_OPTIONS}}", &target_options.join("\n"))
}

fn option(lang: &LanguageConfig, selected: Option<&str>) -> String {
    let selected = if selected == Some(lang.code) { " selected" } else { "" };
    format!(
        r#"        <option value="{}"{}>{} ({})</option>"#,
        escape_html(lang.code),
        selected,
        escape_html(lang.name),
        escape_html(lang.native_name)
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
