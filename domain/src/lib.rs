//! Domain layer for boxai
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Comparison
//!
//! One prompt is sent to several models at once and every model's answer is
//! returned side by side:
//!
//! - **Model key**: the short, user-facing name of a model (`"claude"`)
//! - **Registry**: resolves keys to vendor-specific model identifiers
//! - **Model response**: one answer with latency and word count; a failure
//!   is carried inline as an `"Error: ..."` response, never as an error value

pub mod comparison;
pub mod config;
pub mod core;
pub mod providers;
pub mod registry;

// Re-export commonly used types
pub use comparison::{ComparisonResult, ModelListing, ModelResponse};
pub use config::{
    ConfigIssue, ConfigIssueCode, OutputFormat, RunMode, ServerConfig, Severity,
};
pub use core::{
    error::DomainError,
    model::{ModelDescriptor, Vendor},
    query::Query,
    string::{truncate, word_count},
};
pub use providers::{AnthropicProviderConfig, OpenAiProviderConfig, ProviderConfig};
pub use registry::{ModelRegistry, ModelRegistryBuilder};
