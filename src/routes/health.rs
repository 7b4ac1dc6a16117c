//! Health check endpoint

use axum::http::StatusCode;

/// Liveness endpoint; never touches the DeepL API
pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
