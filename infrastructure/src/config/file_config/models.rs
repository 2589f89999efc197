//! Model catalog entries from TOML (`[[models]]` array)
//!
//! Entries extend the built-in catalog. An entry reusing a built-in key
//! replaces that model.
//!
//! ```toml
//! [[models]]
//! key = "sonnet"
//! vendor = "anthropic"
//! vendor_model_id = "claude-sonnet-4-20250514"
//! display_name = "Claude Sonnet 4"
//! ```

use boxai_domain::{
    ConfigIssue, ConfigIssueCode, ModelDescriptor, ModelRegistry, Vendor,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One `[[models]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileModelEntry {
    /// User-facing key
    pub key: String,
    /// "anthropic" or "openai"
    pub vendor: String,
    /// Identifier sent to the vendor API
    pub vendor_model_id: String,
    /// Display name (defaults to the key)
    #[serde(default)]
    pub display_name: Option<String>,
    /// Whether `GET /models` lists this key (default: true)
    #[serde(default = "default_advertised")]
    pub advertised: bool,
}

fn default_advertised() -> bool {
    true
}

impl FileModelEntry {
    fn to_descriptor(&self) -> Result<ModelDescriptor, ConfigIssue> {
        for (field, value) in [("key", &self.key), ("vendor_model_id", &self.vendor_model_id)] {
            if value.trim().is_empty() {
                return Err(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelField {
                        field: field.to_string(),
                    },
                    format!("models: entry has an empty '{}'", field),
                ));
            }
        }

        let vendor: Vendor = self.vendor.parse().map_err(|_| {
            ConfigIssue::error(
                ConfigIssueCode::UnknownVendor {
                    key: self.key.clone(),
                    vendor: self.vendor.clone(),
                },
                format!(
                    "models.{}: unknown vendor '{}' (expected 'anthropic' or 'openai')",
                    self.key, self.vendor
                ),
            )
        })?;

        Ok(ModelDescriptor::new(
            self.key.trim(),
            vendor,
            self.vendor_model_id.trim(),
            self.display_name.as_deref().unwrap_or(self.key.trim()),
        ))
    }
}

/// Build the registry: built-in catalog plus configured entries.
///
/// Invalid entries are skipped and reported; they never abort the build.
pub fn build_registry(entries: &[FileModelEntry]) -> (ModelRegistry, Vec<ConfigIssue>) {
    let mut builder = ModelRegistry::builtin_builder();
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for entry in entries {
        let descriptor = match entry.to_descriptor() {
            Ok(d) => d,
            Err(issue) => {
                issues.push(issue);
                continue;
            }
        };

        if !seen.insert(descriptor.key().to_string()) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::DuplicateModelKey {
                    key: descriptor.key().to_string(),
                },
                format!("models: key '{}' is defined more than once", descriptor.key()),
            ));
            continue;
        }

        builder = if entry.advertised {
            builder.advertised(descriptor)
        } else {
            builder.alias(descriptor)
        };
    }

    (builder.build(), issues)
}
