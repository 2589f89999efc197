//! Model registry: the catalog of models that can be compared.
//!
//! The registry maps user-facing keys to [`ModelDescriptor`]s. It is built
//! once at startup and only read afterwards, so it can be shared behind an
//! `Arc` by every concurrent request without locking.
//!
//! Two views exist over the same catalog:
//!
//! - [`ModelRegistry::resolve`] accepts every key, including legacy aliases
//!   kept for backward compatibility (e.g. `"gpt-3.5-turbo"`).
//! - [`ModelRegistry::list_available`] returns only the curated keys meant
//!   to be advertised to clients, in curated order.

use crate::comparison::ModelListing;
use crate::core::error::DomainError;
use crate::core::model::{ModelDescriptor, Vendor};
use std::collections::HashMap;

/// Read-only model catalog
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelDescriptor>,
    advertised: Vec<String>,
}

impl ModelRegistry {
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    /// The built-in catalog
    ///
    /// `openai`, `claude` and `gpt4` are advertised; the raw vendor ids are
    /// accepted as aliases but never listed.
    pub fn builtin() -> Self {
        Self::builtin_builder().build()
    }

    /// Builder pre-filled with the built-in catalog, for extension from config
    pub fn builtin_builder() -> ModelRegistryBuilder {
        Self::builder()
            .advertised(ModelDescriptor::new(
                "openai",
                Vendor::OpenAi,
                "gpt-3.5-turbo",
                "GPT-3.5",
            ))
            .advertised(ModelDescriptor::new(
                "claude",
                Vendor::Anthropic,
                "claude-3-haiku-20240307",
                "Claude",
            ))
            .advertised(ModelDescriptor::new(
                "gpt4",
                Vendor::OpenAi,
                "gpt-4",
                "GPT-4",
            ))
            .alias(ModelDescriptor::new(
                "gpt-3.5-turbo",
                Vendor::OpenAi,
                "gpt-3.5-turbo",
                "GPT-3.5",
            ))
            .alias(ModelDescriptor::new(
                "gpt-4",
                Vendor::OpenAi,
                "gpt-4",
                "GPT-4",
            ))
            .alias(ModelDescriptor::new(
                "claude-3-haiku-20240307",
                Vendor::Anthropic,
                "claude-3-haiku-20240307",
                "Claude",
            ))
    }

    /// Look up a model by its user-facing key
    pub fn resolve(&self, key: &str) -> Result<&ModelDescriptor, DomainError> {
        self.models
            .get(key)
            .ok_or_else(|| DomainError::UnsupportedModel(key.to_string()))
    }

    /// Curated models meant for discovery, in curated order
    pub fn list_available(&self) -> Vec<ModelListing> {
        self.advertised
            .iter()
            .filter_map(|key| self.models.get(key))
            .map(|model| ModelListing::new(model.key(), model.display_name()))
            .collect()
    }

    /// Number of resolvable keys (advertised and aliases)
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Whether any model in the catalog is served by `vendor`
    pub fn uses_vendor(&self, vendor: Vendor) -> bool {
        self.models.values().any(|m| m.vendor() == vendor)
    }
}

/// Builder for [`ModelRegistry`]
///
/// Registering a key twice replaces the earlier descriptor. An advertised
/// key keeps its original listing position; re-registering it as an alias
/// removes it from the listing.
#[derive(Debug, Default)]
pub struct ModelRegistryBuilder {
    models: HashMap<String, ModelDescriptor>,
    advertised: Vec<String>,
}

impl ModelRegistryBuilder {
    /// Register a model that shows up in [`ModelRegistry::list_available`]
    pub fn advertised(mut self, model: ModelDescriptor) -> Self {
        let key = model.key().to_string();
        if !self.advertised.contains(&key) {
            self.advertised.push(key.clone());
        }
        self.models.insert(key, model);
        self
    }

    /// Register a resolvable but unlisted model
    pub fn alias(mut self, model: ModelDescriptor) -> Self {
        let key = model.key().to_string();
        self.advertised.retain(|k| k != &key);
        self.models.insert(key, model);
        self
    }

    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            models: self.models,
            advertised: self.advertised,
        }
    }
}
