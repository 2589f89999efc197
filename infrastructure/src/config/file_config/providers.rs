//! Provider configuration from TOML (`[providers]` section)

use boxai_domain::{AnthropicProviderConfig, OpenAiProviderConfig, ProviderConfig, Vendor};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_secs: 60,
        }
    }
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can be overridden for compatible servers).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
}

impl FileProvidersConfig {
    /// Environment variable consulted for `vendor`'s key
    pub fn api_key_env(&self, vendor: Vendor) -> &str {
        match vendor {
            Vendor::Anthropic => &self.anthropic.api_key_env,
            Vendor::OpenAi => &self.openai.api_key_env,
        }
    }

    /// Convert to the domain type, resolving credentials.
    ///
    /// A direct `api_key` wins over the environment variable; empty values
    /// count as missing.
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            anthropic: AnthropicProviderConfig {
                api_key: resolve_api_key(
                    self.anthropic.api_key.as_deref(),
                    &self.anthropic.api_key_env,
                ),
                base_url: self.anthropic.base_url.clone(),
                api_version: self.anthropic.api_version.clone(),
                timeout: Duration::from_secs(self.anthropic.timeout_secs),
            },
            openai: OpenAiProviderConfig {
                api_key: resolve_api_key(self.openai.api_key.as_deref(), &self.openai.api_key_env),
                base_url: self.openai.base_url.clone(),
                timeout: Duration::from_secs(self.openai.timeout_secs),
            },
        }
    }
}

fn resolve_api_key(direct: Option<&str>, env_var: &str) -> Option<String> {
    direct
        .map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BOXAI_TEST_OPENAI_KEY", "from-env");
            let config = FileProvidersConfig {
                openai: FileOpenAiConfig {
                    api_key_env: "BOXAI_TEST_OPENAI_KEY".to_string(),
                    api_key: Some("direct".to_string()),
                    ..FileOpenAiConfig::default()
                },
                ..FileProvidersConfig::default()
            };
            assert_eq!(
                config.to_provider_config().openai.api_key.as_deref(),
                Some("direct")
            );
            Ok(())
        });
    }

    #[test]
    fn test_key_from_custom_env_var() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MY_CLAUDE_KEY", "sk-ant-env");
            let config = FileProvidersConfig {
                anthropic: FileAnthropicConfig {
                    api_key_env: "MY_CLAUDE_KEY".to_string(),
                    ..FileAnthropicConfig::default()
                },
                ..FileProvidersConfig::default()
            };
            let resolved = config.to_provider_config();
            assert_eq!(resolved.anthropic.api_key.as_deref(), Some("sk-ant-env"));
            assert_eq!(resolved.anthropic.timeout, Duration::from_secs(60));
            Ok(())
        });
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BOXAI_TEST_BLANK_KEY", "  ");
            let config = FileProvidersConfig {
                openai: FileOpenAiConfig {
                    api_key_env: "BOXAI_TEST_BLANK_KEY".to_string(),
                    ..FileOpenAiConfig::default()
                },
                ..FileProvidersConfig::default()
            };
            assert!(config.to_provider_config().openai.api_key.is_none());
            Ok(())
        });
    }
}
