//! Application layer for boxai
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    progress::{ComparisonProgress, NoProgress},
    provider::{ProviderAdapter, ProviderError, ProviderSet},
};
pub use use_cases::compare_models::CompareModelsUseCase;
