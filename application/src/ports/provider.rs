//! Provider adapter port
//!
//! Defines the interface for generating text with one LLM vendor.

use async_trait::async_trait;
use boxai_domain::Vendor;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Failure of a single vendor call
///
/// Carries enough context to be shown inline to the user: which vendor
/// failed, why, and the HTTP status when the vendor answered at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to generate response: {message}")]
pub struct ProviderError {
    pub vendor: Vendor,
    pub message: String,
    pub status: Option<u16>,
}

impl ProviderError {
    pub fn new(vendor: Vendor, message: impl Into<String>) -> Self {
        Self {
            vendor,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Generates text with one vendor's completion API
///
/// Implementations (adapters) live in the infrastructure layer. They are
/// shared across concurrent requests, so they must be usable through `&self`
/// without per-request mutation.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// The vendor this adapter talks to
    fn vendor(&self) -> Vendor;

    /// Send `prompt` to `vendor_model_id` and return the first text fragment
    /// of the reply.
    ///
    /// A well-formed reply without any text yields a placeholder string
    /// rather than an error. The adapter does not retry.
    async fn generate(&self, prompt: &str, vendor_model_id: &str) -> Result<String, ProviderError>;
}

/// The adapters available to a comparison, at most one per vendor
#[derive(Clone, Default)]
pub struct ProviderSet {
    adapters: HashMap<Vendor, Arc<dyn ProviderAdapter>>,
}

impl ProviderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter, replacing any previous one for the same vendor
    pub fn with(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.insert(adapter);
        self
    }

    pub fn insert(&mut self, adapter: Arc<dyn ProviderAdapter>) {
        self.adapters.insert(adapter.vendor(), adapter);
    }

    pub fn get(&self, vendor: Vendor) -> Option<Arc<dyn ProviderAdapter>> {
        self.adapters.get(&vendor).cloned()
    }
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet")
            .field("vendors", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}
