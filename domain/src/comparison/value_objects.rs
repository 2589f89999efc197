//! Comparison value objects - immutable result types for one prompt.
//!
//! - [`ModelResponse`] - One model's answer (or its inline failure)
//! - [`ModelListing`] - An advertised model as shown to clients
//! - [`ComparisonResult`] - A prompt together with every model's answer

use crate::core::string::word_count;
use serde::{Deserialize, Serialize};

/// Prefix carried by the text of every failed response
pub const ERROR_PREFIX: &str = "Error: ";

/// Response from a single model
///
/// Failures are data, not errors: a failed model still produces a response
/// whose text starts with [`ERROR_PREFIX`] and whose metrics are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelResponse {
    /// The requested model key (not the vendor model id)
    #[serde(rename = "model")]
    pub model_key: String,
    /// Generated text, or the error description on failure
    pub text: String,
    /// Wall-clock duration of the vendor call in milliseconds
    pub latency_ms: u64,
    /// Number of whitespace-delimited words in `text`
    pub word_count: usize,
    #[serde(skip)]
    failed: bool,
}

impl ModelResponse {
    /// Creates a successful response, deriving the word count from the text.
    ///
    /// # Arguments
    /// * `model_key` - The key the caller asked for
    /// * `text` - The model's answer, verbatim
    /// * `latency_ms` - How long the vendor call took
    pub fn success(model_key: impl Into<String>, text: impl Into<String>, latency_ms: u64) -> Self {
        let text = text.into();
        Self {
            model_key: model_key.into(),
            word_count: word_count(&text),
            text,
            latency_ms,
            failed: false,
        }
    }

    /// Creates a failed response with zeroed metrics.
    pub fn failure(model_key: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            model_key: model_key.into(),
            text: format!("{ERROR_PREFIX}{error}"),
            latency_ms: 0,
            word_count: 0,
            failed: true,
        }
    }

    /// Returns `true` if this response was generated successfully.
    pub fn is_success(&self) -> bool {
        !self.failed
    }
}

/// An advertised model as returned by `GET /models`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelListing {
    /// The model key to send back in requests
    pub id: String,
    /// Display name
    pub name: String,
}

impl ModelListing {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A prompt and the responses of every requested model, in request order
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub prompt: String,
    pub responses: Vec<ModelResponse>,
}

impl ComparisonResult {
    pub fn new(prompt: impl Into<String>, responses: Vec<ModelResponse>) -> Self {
        Self {
            prompt: prompt.into(),
            responses,
        }
    }

    /// Returns an iterator over only the successful model responses.
    pub fn successful_responses(&self) -> impl Iterator<Item = &ModelResponse> {
        self.responses.iter().filter(|r| r.is_success())
    }

    /// Returns an iterator over only the failed model responses.
    pub fn failed_responses(&self) -> impl Iterator<Item = &ModelResponse> {
        self.responses.iter().filter(|r| !r.is_success())
    }

    /// The successful response with the lowest latency, if any
    pub fn fastest(&self) -> Option<&ModelResponse> {
        self.successful_responses().min_by_key(|r| r.latency_ms)
    }
}
