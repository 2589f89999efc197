//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for comparison results printed by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block per model with metrics (default)
    #[default]
    Full,
    /// JSON array, same shape as the HTTP API
    Json,
}
