// server.rs
// HTTP boundary for the translation relay

use crate::config::{Settings, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, MAX_INPUT_CHARS};
use crate::translate::TranslationService;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TranslationService>,
    pub service_name: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/translate", post(translate_text).get(health))
        .with_state(state)
}

pub async fn run(settings: Settings) {
    let service = Arc::new(TranslationService::from_settings(&settings));
    let state = AppState {
        service,
        service_name: settings.service_name(),
    };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("Starting translation service on {}", addr);

    match TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Server error: {}", e);
            }
        }
        Err(e) => {
            tracing::error!("Failed to bind server to {}: {}", addr, e);
        }
    }
}

/// The body is validated by hand against the raw JSON value so malformed
/// shapes get a 400 with a message instead of a framework rejection.
async fn translate_text(State(state): State<AppState>, Json(body): Json<Value>) -> impl IntoResponse {
    let text = match body.get("text") {
        Some(Value::String(s)) => s.clone(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Text is required and must be a string" })),
            );
        }
    };

    if text.chars().count() > MAX_INPUT_CHARS {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Text exceeds 2000 character limit" })),
        );
    }

    if text.trim().is_empty() {
        return (StatusCode::OK, Json(json!({ "vi": "" })));
    }

    // The chain absorbs provider failures, so the only unexpected outcome is
    // a panic in dispatch. Running it in its own task turns that into a
    // degraded-but-successful response rather than a failing status.
    let service = state.service.clone();
    let dispatched =
        tokio::spawn(
            async move { service.translate(&text, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG).await },
        );

    match dispatched.await {
        Ok(translated) => (StatusCode::OK, Json(json!({ "vi": translated }))),
        Err(e) => {
            tracing::error!("Translation dispatch failed: {}", e);
            (
                StatusCode::OK,
                Json(json!({
                    "vi": "",
                    "error": "Translation service temporarily unavailable"
                })),
            )
        }
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": state.service_name,
        "ready": true
    }))
}
