//! Presentation layer for boxai
//!
//! This crate contains the HTTP API, CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{ApiError, AppState, router};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, ProgressStyleKind, SimpleProgress};
