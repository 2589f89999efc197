//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `boxai ask`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per model with latency and word count
    Full,
    /// JSON array, same shape as the HTTP API
    Json,
}

impl From<OutputFormat> for boxai_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => boxai_domain::OutputFormat::Full,
            OutputFormat::Json => boxai_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for boxai
#[derive(Parser, Debug)]
#[command(name = "boxai")]
#[command(author, version, about = "Ask several LLMs the same question and compare their answers")]
#[command(long_about = r#"
BoxAI sends one prompt to several language models at once and returns every
answer side by side, with latency and word count for each.

Run it as an HTTP service (`boxai serve`, the default) or ask directly from
the terminal (`boxai ask`).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./boxai.toml        Project-level config
3. ~/.config/boxai/config.toml   Global config

Environment variables override files: BOXAI_SERVER__PORT, PORT, APP_ENV,
FRONTEND_URL, OPENAI_API_KEY, ANTHROPIC_API_KEY.

Example:
  boxai serve --port 8000
  boxai ask -m openai -m claude "Explain ownership in Rust"
  boxai models
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask the models directly and print their answers
    Ask {
        /// The prompt to send
        prompt: String,

        /// Models to compare (can be specified multiple times; default: all advertised)
        #[arg(short, long, value_name = "MODEL")]
        model: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "full")]
        output: OutputFormat,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// List advertised models
    Models,
}
