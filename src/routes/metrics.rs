//! Prometheus metrics endpoint
//!
//! Exposes the collector's samples in Prometheus text format. Each scrape
//! renders through its own recorder, so a series only appears when the
//! current collection produced it.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::debug;

use crate::{collector::Collector, AppState};

/// Content type of the Prometheus text exposition format
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Collect once and render the result in Prometheus text format
pub async fn render(collector: &dyn Collector) -> String {
    let samples = collector.collect().await;
    debug!(samples = samples.len(), "Collected DeepL usage samples");

    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    metrics::with_local_recorder(&recorder, || {
        for desc in collector.describe() {
            metrics::describe_gauge!(desc.name, desc.help);
        }
        for sample in &samples {
            metrics::gauge!(sample.name).set(sample.value);
        }
    });

    handle.render()
}

/// Prometheus metrics endpoint handler
///
/// Always answers 200; a failed upstream fetch only omits the series.
pub async fn prometheus_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = render(state.collector.as_ref()).await;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        body,
    )
}
