//! Infrastructure layer for boxai
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer (vendor HTTP clients) plus configuration
//! file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use providers::{AnthropicAdapter, NO_RESPONSE_PLACEHOLDER, OpenAiAdapter, build_provider_set};
