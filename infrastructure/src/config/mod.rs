//! Configuration file loading for boxai
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`BOXAI_*`, `PORT`, `APP_ENV`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./boxai.toml` or `./.boxai.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/boxai/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnthropicConfig, FileConfig, FileModelEntry, FileOpenAiConfig, FileProvidersConfig,
    FileServerConfig, build_registry,
};
pub use loader::{ConfigError, ConfigLoader};
