//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.). Credentials are already
//! resolved here; looking them up in the environment is the loader's job.

use crate::core::model::Vendor;
use std::time::Duration;

/// Top-level provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Anthropic API settings.
    pub anthropic: AnthropicProviderConfig,
    /// OpenAI API settings.
    pub openai: OpenAiProviderConfig,
}

impl ProviderConfig {
    /// Whether a credential is available for `vendor`
    pub fn has_credential(&self, vendor: Vendor) -> bool {
        match vendor {
            Vendor::Anthropic => self.anthropic.api_key.is_some(),
            Vendor::OpenAi => self.openai.api_key.is_some(),
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone)]
pub struct AnthropicProviderConfig {
    /// Resolved API key, if any.
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for AnthropicProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    /// Resolved API key, if any.
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_credential() {
        let mut config = ProviderConfig::default();
        assert!(!config.has_credential(Vendor::Anthropic));
        config.anthropic.api_key = Some("sk-ant".to_string());
        assert!(config.has_credential(Vendor::Anthropic));
        assert!(!config.has_credential(Vendor::OpenAi));
    }
}
