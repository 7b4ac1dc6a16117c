//! DeepL usage API client
//!
//! HTTP client for the DeepL `/v2/usage` endpoint. The endpoint is chosen
//! once from the API key tier; every fetch is a single GET with no retry.

use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};

use crate::{
    deepl::models::UsageSnapshot,
    error::{FetchError, FetchResult},
};

/// Usage endpoint for DeepL API Pro keys
pub const PRO_API_URL: &str = "https://api.deepl.com/v2/usage";
/// Usage endpoint for DeepL API Free keys
pub const FREE_API_URL: &str = "https://api-free.deepl.com/v2/usage";
/// Upper bound on a single usage request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Suffix DeepL appends to every Free API key
const FREE_KEY_SUFFIX: &str = ":fx";
/// Scheme prefix of the Authorization header
const AUTH_KEY_PREFIX: &str = "DeepL-Auth-Key ";

/// DeepL API plan, as inferred from the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTier {
    Free,
    Pro,
}

impl ApiTier {
    /// Detect the tier from the key suffix (case-sensitive, untrimmed)
    pub fn from_api_key(api_key: &str) -> Self {
        if api_key.len() > FREE_KEY_SUFFIX.len() && api_key.ends_with(FREE_KEY_SUFFIX) {
            ApiTier::Free
        } else {
            ApiTier::Pro
        }
    }

    /// Usage endpoint serving this tier
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiTier::Free => FREE_API_URL,
            ApiTier::Pro => PRO_API_URL,
        }
    }
}

/// Settings for a usage collector, fixed at construction
#[derive(Clone)]
pub struct CollectorConfig {
    /// Raw DeepL API key, sent verbatim
    pub api_key: String,
    /// Resolved usage endpoint
    pub endpoint: String,
    /// Bound on each usage request
    pub request_timeout: Duration,
}

impl CollectorConfig {
    /// Resolve the endpoint from the key tier
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let tier = ApiTier::from_api_key(&api_key);
        match tier {
            ApiTier::Free => info!("Detected DeepL Free API key"),
            ApiTier::Pro => info!("Detected DeepL Pro API key"),
        }

        Self {
            api_key,
            endpoint: tier.endpoint().to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the tier-resolved endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

// The key never shows up in logs.
impl std::fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// DeepL usage API client
pub struct UsageClient {
    client: reqwest::Client,
    config: CollectorConfig,
}

impl UsageClient {
    /// Create a new usage client with its own timeout-bounded HTTP client
    pub fn new(config: CollectorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build HTTP client, using defaults");
                reqwest::Client::new()
            });

        Self { client, config }
    }

    /// Collector settings in use
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Fetch the current character usage
    ///
    /// Any status other than 200 fails with the status code and the raw
    /// response body.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    pub async fn fetch_usage(&self) -> FetchResult<UsageSnapshot> {
        let mut auth = HeaderValue::try_from(format!("{}{}", AUTH_KEY_PREFIX, self.config.api_key))?;
        auth.set_sensitive(true);

        debug!("Fetching usage from DeepL");

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "DeepL usage response status");

        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %text, "DeepL usage request failed");
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = response.text().await.map_err(FetchError::ReadBody)?;
        debug!(body = %body, "DeepL usage response body");

        let usage = UsageSnapshot::from_json(&body)?;

        debug!(
            character_count = usage.character_count,
            character_limit = usage.character_limit,
            "Successfully fetched usage"
        );
        Ok(usage)
    }
}
