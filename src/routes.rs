use axum::{
    body::Bytes,
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::warn;

use crate::i18n::LanguageConfig;
use crate::page::render_index;
use crate::state::AppState;
use crate::summary::{SummarizeRequest, SummarizeResponse};
use crate::translation::{TranslateRequest, TranslateResponse};

pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        // UI
        .route("/", get(index))
        .nest_service("/static", assets)

        // Text operations
        .route("/translate", post(translate_text))
        .route("/summarize", post(summarize_text))

        // Metadata
        .route("/api/languages", get(list_languages))
        .route("/health", get(health_check))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.languages))
}

/// Always answers 200; provider failures come back as `{"error": ...}`.
async fn translate_text(State(state): State<AppState>, body: Bytes) -> Json<TranslateResponse> {
    let request: TranslateRequest = parse_body("/translate", &body);
    let result = state.translator.translate(&request).await;
    Json(TranslateResponse::from(result))
}

async fn summarize_text(body: Bytes) -> Json<SummarizeResponse> {
    let request: SummarizeRequest = parse_body("/summarize", &body);
    Json(request.summarize())
}

async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageConfig>> {
    Json(state.languages.list().to_vec())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Decode a JSON request body, falling back to defaults instead of rejecting.
///
/// Missing fields take their defaults through serde. A field with the wrong
/// type is dropped on its own so it falls back to its default while the other
/// fields are kept. An empty, unparseable or non-object body is treated like
/// `{}`.
fn parse_body<T: DeserializeOwned + Default>(route: &str, body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }

    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            warn!("{}: ignoring non-object request body: {}", route, other);
            return T::default();
        }
        Err(e) => {
            warn!("{}: ignoring malformed request body: {}", route, e);
            return T::default();
        }
    };

    let mut accepted = Map::new();
    for (name, value) in fields {
        accepted.insert(name.clone(), value);
        if let Err(e) = serde_json::from_value::<T>(Value::Object(accepted.clone())) {
            warn!("{}: ignoring field '{}': {}", route, name, e);
            accepted.remove(&name);
        }
    }

    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}
