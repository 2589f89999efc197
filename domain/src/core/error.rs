//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("At least one model must be requested")]
    NoModels,

    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),
}
