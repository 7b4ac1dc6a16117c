//! HTTP routes for the DeepL exporter
//!
//! This module defines all HTTP endpoints exposed by the exporter.

pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .route("/healthz", get(health::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
