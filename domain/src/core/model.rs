//! Model value objects: vendors and catalog entries

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM vendors a model can be served by (Value Object)
///
/// Each vendor has exactly one provider adapter in the infrastructure layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// Anthropic messages API (Claude models)
    Anthropic,
    /// OpenAI chat completions API (GPT models)
    OpenAi,
}

impl Vendor {
    /// Get the string identifier for this vendor
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Anthropic => "anthropic",
            Vendor::OpenAi => "openai",
        }
    }

    /// Human-readable vendor name
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Anthropic => "Anthropic",
            Vendor::OpenAi => "OpenAI",
        }
    }

    /// All supported vendors
    pub fn all() -> [Vendor; 2] {
        [Vendor::Anthropic, Vendor::OpenAi]
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Vendor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(Vendor::Anthropic),
            "openai" => Ok(Vendor::OpenAi),
            other => Err(DomainError::UnknownVendor(other.to_string())),
        }
    }
}

impl Serialize for Vendor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Vendor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry of the model catalog (Value Object)
///
/// Maps a user-facing key (e.g. `"claude"`) to the identifier the vendor
/// API expects. Several keys may point at the same vendor model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    key: String,
    vendor_model_id: String,
    vendor: Vendor,
    display_name: String,
}

impl ModelDescriptor {
    pub fn new(
        key: impl Into<String>,
        vendor: Vendor,
        vendor_model_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            vendor_model_id: vendor_model_id.into(),
            vendor,
            display_name: display_name.into(),
        }
    }

    /// User-facing identifier
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Identifier sent to the vendor API
    pub fn vendor_model_id(&self) -> &str {
        &self.vendor_model_id
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl std::fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.key, self.vendor, self.vendor_model_id)
    }
}
