//! DeepL usage collector
//!
//! Turns one usage fetch into the three exported gauges. The exposition
//! layer calls [`Collector::collect`] once per scrape and renders whatever
//! comes back; nothing is kept between scrapes.

use async_trait::async_trait;
use tracing::error;

use crate::{
    deepl::{CollectorConfig, UsageClient, UsageSnapshot},
    error::{FetchError, FetchResult},
};

/// Metric names
pub mod names {
    /// Characters translated in the current billing period
    pub const CHARACTER_COUNT: &str = "deepl_character_count";
    /// Character limit of the current billing period
    pub const CHARACTER_LIMIT: &str = "deepl_character_limit";
    /// Share of the character limit used, in percent
    pub const CHARACTER_USAGE_PERCENT: &str = "deepl_character_usage_percent";
}

/// Static description of an exported gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDesc {
    pub name: &'static str,
    pub help: &'static str,
}

/// One gauge observation produced by a scrape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    pub name: &'static str,
    pub value: f64,
}

impl MetricSample {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

/// Source of metric samples for the exposition layer
#[async_trait]
pub trait Collector: Send + Sync {
    /// Descriptors of every series this collector can emit
    fn describe(&self) -> Vec<MetricDesc>;

    /// Gather the samples for one scrape, in a stable order
    ///
    /// An empty vector means the series are absent for this scrape.
    async fn collect(&self) -> Vec<MetricSample>;
}

const DESCRIPTORS: [MetricDesc; 3] = [
    MetricDesc {
        name: names::CHARACTER_COUNT,
        help: "Current number of characters translated in the current billing period",
    },
    MetricDesc {
        name: names::CHARACTER_LIMIT,
        help: "Maximum number of characters that can be translated in the current billing period",
    },
    MetricDesc {
        name: names::CHARACTER_USAGE_PERCENT,
        help: "Percentage of character limit used",
    },
];

/// Collector exporting DeepL character usage
pub struct DeepLCollector {
    client: UsageClient,
}

impl DeepLCollector {
    /// Create a collector for the given API key, choosing the endpoint by tier
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(CollectorConfig::new(api_key))
    }

    /// Create a collector from explicit settings
    pub fn from_config(config: CollectorConfig) -> Self {
        Self {
            client: UsageClient::new(config),
        }
    }

    /// Usage endpoint this collector polls
    pub fn endpoint(&self) -> &str {
        &self.client.config().endpoint
    }

    /// Fetch usage, giving up once the request timeout has elapsed
    pub async fn fetch_usage(&self) -> FetchResult<UsageSnapshot> {
        let timeout = self.client.config().request_timeout;
        tokio::time::timeout(timeout, self.client.fetch_usage())
            .await
            .map_err(|_| FetchError::Timeout(timeout))?
    }
}

/// Samples for a successful fetch: count, limit, percent
pub fn usage_samples(usage: &UsageSnapshot) -> Vec<MetricSample> {
    vec![
        MetricSample::new(names::CHARACTER_COUNT, usage.character_count as f64),
        MetricSample::new(names::CHARACTER_LIMIT, usage.character_limit as f64),
        MetricSample::new(names::CHARACTER_USAGE_PERCENT, usage.usage_percent()),
    ]
}

#[async_trait]
impl Collector for DeepLCollector {
    fn describe(&self) -> Vec<MetricDesc> {
        DESCRIPTORS.to_vec()
    }

    async fn collect(&self) -> Vec<MetricSample> {
        match self.fetch_usage().await {
            Ok(usage) => usage_samples(&usage),
            Err(e) => {
                error!(error = %e, "Error fetching DeepL usage");
                Vec::new()
            }
        }
    }
}
