use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /translate`. Absent and `null` fields are treated alike.
#[derive(Debug, Default, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub src_lang: Option<String>,
    #[serde(default)]
    pub dest_lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate))
        .route("/api/health", get(health_check))
}

/// Full application: routes plus permissive CORS and request tracing
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let Json(request) = payload?;

    let defaults = &state.config.translation;
    let text = request.text.unwrap_or_default();
    let src_lang = request.src_lang.unwrap_or_else(|| defaults.default_src_lang.clone());
    let dest_lang = request.dest_lang.unwrap_or_else(|| defaults.default_dest_lang.clone());

    if text.is_empty() {
        return Err(ApiError::MissingText);
    }

    let translation = state
        .translator
        .translate(&text, &src_lang, &dest_lang)
        .await
        .map_err(|e| {
            warn!("Translation failed ({} -> {}): {}", src_lang, dest_lang, e);
            ApiError::from(e)
        })?;

    debug!("Translated {} -> {}", translation.src, translation.dest);
    Ok(Json(TranslationResponse {
        translated_text: translation.text,
    }))
}
