//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use boxai_domain::ConfigIssue;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["boxai.toml", ".boxai.toml"];

/// Errors produced while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `BOXAI_*` (`__` separates sections), `PORT`, `APP_ENV`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./boxai.toml` or `./.boxai.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/boxai/config.toml`
    /// 5. Default values
    ///
    /// `FRONTEND_URL`, when set, is appended to `server.allowed_origins`.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "Loading global config");
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            debug!(path = %path.display(), "Loading project config");
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(Self::with_env(figment))
    }

    /// Load only defaults plus environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::extract(Self::with_env(figment))
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::prefixed("BOXAI_").split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .merge(
                Env::raw()
                    .only(&["APP_ENV"])
                    .map(|_| "server.environment".into()),
            )
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigError> {
        let mut config: FileConfig = figment.extract().map_err(Box::new)?;

        if let Ok(frontend) = std::env::var("FRONTEND_URL") {
            let frontend = frontend.trim().trim_end_matches('/').to_string();
            if !frontend.is_empty() && !config.server.allowed_origins.contains(&frontend) {
                config.server.allowed_origins.push(frontend);
            }
        }

        Ok(config)
    }

    /// Load and fail on any error-severity issue; warnings are returned
    pub fn load_validated(
        config_path: Option<&PathBuf>,
        no_config: bool,
    ) -> Result<(FileConfig, Vec<ConfigIssue>), ConfigError> {
        let config = if no_config {
            Self::load_defaults()?
        } else {
            Self::load(config_path)?
        };

        let (errors, warnings): (Vec<_>, Vec<_>) =
            config.validate().into_iter().partition(ConfigIssue::is_error);

        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors));
        }
        Ok((config, warnings))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/boxai/config.toml if set,
    /// otherwise falls back to the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("boxai").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: BOXAI_*, PORT, APP_ENV, FRONTEND_URL");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./boxai.toml or ./.boxai.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
