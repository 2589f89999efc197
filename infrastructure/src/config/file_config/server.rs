//! HTTP server configuration from TOML (`[server]` section)

use boxai_domain::{ConfigIssue, ConfigIssueCode, RunMode, ServerConfig};
use serde::{Deserialize, Serialize};

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Browser origins allowed to call the API
    pub allowed_origins: Vec<String>,
    /// "development" or "production"
    pub environment: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            host: defaults.host,
            port: defaults.port,
            allowed_origins: defaults.allowed_origins,
            environment: defaults.mode.to_string(),
        }
    }
}

impl FileServerConfig {
    /// Parse the run mode, falling back to production on unknown values
    pub fn parse_mode(&self) -> (RunMode, Vec<ConfigIssue>) {
        match self.environment.parse::<RunMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => (
                RunMode::Production,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "server.environment".to_string(),
                        value: self.environment.clone(),
                    },
                    format!(
                        "server.environment: unknown value '{}', falling back to 'production'",
                        self.environment
                    ),
                )],
            ),
        }
    }

    /// Convert to the domain type
    pub fn to_server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            allowed_origins: self
                .allowed_origins
                .iter()
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            mode: self.parse_mode().0,
        }
    }
}
