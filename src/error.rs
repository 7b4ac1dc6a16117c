//! Error types for the DeepL exporter
//!
//! Every failure of a usage fetch maps onto one of these variants. None of
//! them escape a scrape: the collector logs them and skips the cycle.

use std::time::Duration;

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors raised while fetching usage from the DeepL API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create request: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("failed to fetch usage: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("usage request timed out after {0:?}")]
    Timeout(Duration),
}

impl FetchError {
    /// Whether the request was abandoned because it ran out of time
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Timeout(_) => true,
            FetchError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Result type alias for convenience
pub type FetchResult<T> = Result<T, FetchError>;
