//! DeepL usage response models

use serde::{Deserialize, Deserializer};

/// Character usage for the current billing period
///
/// Missing keys and `null` values decode as zero and unknown keys are
/// ignored, so any JSON object is accepted as a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UsageSnapshot {
    /// Characters translated so far in the billing period
    #[serde(deserialize_with = "null_as_zero")]
    pub character_count: i64,
    /// Characters allowed in the billing period
    #[serde(deserialize_with = "null_as_zero")]
    pub character_limit: i64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

impl UsageSnapshot {
    /// Create a new snapshot
    pub fn new(character_count: i64, character_limit: i64) -> Self {
        Self {
            character_count,
            character_limit,
        }
    }

    /// Decode a usage response body
    ///
    /// A literal `null` body yields an all-zero snapshot.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        Ok(serde_json::from_str::<Option<Self>>(body)?.unwrap_or_default())
    }

    /// Share of the limit consumed, in percent
    ///
    /// Zero when there is no positive limit. Not clamped: overage reports
    /// values above 100.
    pub fn usage_percent(&self) -> f64 {
        if self.character_limit <= 0 {
            return 0.0;
        }
        (self.character_count as f64 / self.character_limit as f64) * 100.0
    }
}
