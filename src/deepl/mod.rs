//! DeepL API integration module
//!
//! Provides the client for the DeepL `/v2/usage` endpoint.

pub mod client;
pub mod models;

pub use client::{ApiTier, CollectorConfig, UsageClient};
pub use models::*;
