//! Mock infrastructure for testing external services
//!
//! Provides a wiremock-based stand-in for the DeepL usage API.

pub mod deepl;

pub use deepl::*;
