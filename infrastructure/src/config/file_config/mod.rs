//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod models;
mod providers;
mod server;

pub use models::{FileModelEntry, build_registry};
pub use providers::{FileAnthropicConfig, FileOpenAiConfig, FileProvidersConfig};
pub use server::FileServerConfig;

use boxai_domain::{
    ConfigIssue, ConfigIssueCode, ModelRegistry, ProviderConfig, ServerConfig, Vendor,
};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Vendor API settings
    pub providers: FileProvidersConfig,
    /// Extra catalog entries
    pub models: Vec<FileModelEntry>,
}

impl FileConfig {
    pub fn server_config(&self) -> ServerConfig {
        self.server.to_server_config()
    }

    pub fn provider_config(&self) -> ProviderConfig {
        self.providers.to_provider_config()
    }

    /// Built-in catalog plus valid `[[models]]` entries
    pub fn registry(&self) -> ModelRegistry {
        build_registry(&self.models).0
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `[[models]]` entries (empty fields, unknown vendors, duplicates)
    /// 2. `server.environment` value
    /// 3. Missing credentials for vendors the catalog actually uses
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let (registry, model_issues) = build_registry(&self.models);
        issues.extend(model_issues);

        issues.extend(self.server.parse_mode().1);

        let providers = self.provider_config();
        for vendor in Vendor::all() {
            if registry.uses_vendor(vendor) && !providers.has_credential(vendor) {
                let env_var = self.providers.api_key_env(vendor);
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::MissingApiKey {
                        vendor: vendor.to_string(),
                        env_var: env_var.to_string(),
                    },
                    format!(
                        "No {} API key found (set {} or providers.{}.api_key)",
                        vendor.display_name(),
                        env_var,
                        vendor.as_str()
                    ),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxai_domain::RunMode;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
port = 9000
allowed_origins = ["https://boxai.example.com"]
environment = "development"

[providers.anthropic]
api_key = "sk-ant-file"
timeout_secs = 30

[providers.openai]
base_url = "http://localhost:11434"

[[models]]
key = "sonnet"
vendor = "anthropic"
vendor_model_id = "claude-sonnet-4-20250514"
display_name = "Claude Sonnet 4"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let server = config.server_config();
        assert_eq!(server.port, 9000);
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.mode, RunMode::Development);
        assert_eq!(server.allowed_origins, vec!["https://boxai.example.com"]);

        assert_eq!(config.providers.anthropic.timeout_secs, 30);
        assert_eq!(config.providers.openai.base_url, "http://localhost:11434");
        assert_eq!(config.providers.openai.api_key_env, "OPENAI_API_KEY");

        let registry = config.registry();
        assert_eq!(
            registry.resolve("sonnet").unwrap().display_name(),
            "Claude Sonnet 4"
        );
        assert_eq!(registry.list_available().len(), 4);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.models.is_empty());
        assert_eq!(config.server_config(), ServerConfig::default());
    }

    #[test]
    fn test_validate_reports_missing_keys() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            let config = FileConfig {
                providers: FileProvidersConfig {
                    anthropic: FileAnthropicConfig {
                        api_key_env: "BOXAI_TEST_UNSET_ANTHROPIC".to_string(),
                        ..FileAnthropicConfig::default()
                    },
                    openai: FileOpenAiConfig {
                        api_key: Some("sk-direct".to_string()),
                        ..FileOpenAiConfig::default()
                    },
                },
                ..FileConfig::default()
            };

            let issues = config.validate();
            assert_eq!(issues.len(), 1);
            assert!(!issues[0].is_error());
            assert_eq!(
                issues[0].code,
                ConfigIssueCode::MissingApiKey {
                    vendor: "anthropic".to_string(),
                    env_var: "BOXAI_TEST_UNSET_ANTHROPIC".to_string(),
                }
            );
            Ok(())
        });
    }

    #[test]
    fn test_validate_collects_model_errors() {
        let config = FileConfig {
            providers: FileProvidersConfig {
                anthropic: FileAnthropicConfig {
                    api_key: Some("a".to_string()),
                    ..FileAnthropicConfig::default()
                },
                openai: FileOpenAiConfig {
                    api_key: Some("o".to_string()),
                    ..FileOpenAiConfig::default()
                },
            },
            models: vec![FileModelEntry {
                key: "gemini".to_string(),
                vendor: "google".to_string(),
                vendor_model_id: "gemini-pro".to_string(),
                display_name: None,
                advertised: true,
            }],
            ..FileConfig::default()
        };

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
