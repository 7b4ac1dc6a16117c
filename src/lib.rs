//! DeepL Exporter - Prometheus metrics for DeepL API character usage
//!
//! This library polls the DeepL `/v2/usage` endpoint on every scrape and
//! exposes the result as gauges.

pub mod collector;
pub mod config;
pub mod deepl;
pub mod error;
pub mod routes;

use std::sync::Arc;

pub use crate::collector::{Collector, DeepLCollector, MetricDesc, MetricSample};
pub use crate::config::Config;
pub use crate::deepl::{ApiTier, CollectorConfig, UsageClient, UsageSnapshot};
pub use crate::error::{FetchError, FetchResult};

/// Application state shared across all request handlers
pub struct AppState {
    /// Source of the samples rendered on `/metrics`
    pub collector: Arc<dyn Collector>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: &Config) -> Self {
        let mut collector_config = CollectorConfig::new(config.deepl_api_key.clone());
        if let Some(url) = &config.deepl_api_url {
            collector_config = collector_config.with_endpoint(url.clone());
        }

        let collector: Arc<dyn Collector> = Arc::new(DeepLCollector::from_config(collector_config));

        Self { collector }
    }

    /// Create an application state around an existing collector
    pub fn with_collector(collector: Arc<dyn Collector>) -> Self {
        Self { collector }
    }
}
