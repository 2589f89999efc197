//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod environment;
mod output_format;
mod server;
mod validation;

pub use environment::RunMode;
pub use output_format::OutputFormat;
pub use server::ServerConfig;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
