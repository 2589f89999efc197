//! Vendor provider adapters
//!
//! One adapter per [`Vendor`], each wrapping a long-lived `reqwest::Client`.
//! Vendor request/response shapes never leave their adapter module; callers
//! only see text or a [`ProviderError`].

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicAdapter;
pub use openai::OpenAiAdapter;

use boxai_application::{GenerationParams, ProviderError, ProviderSet};
use boxai_domain::{ProviderConfig, Vendor};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Returned when a vendor answers without any text fragment
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response from model";

/// Build one adapter per vendor from resolved provider settings.
///
/// Adapters without a credential are still registered; their calls fail
/// with a [`ProviderError`] without reaching the network.
pub fn build_provider_set(
    config: &ProviderConfig,
    params: GenerationParams,
) -> Result<ProviderSet, ProviderError> {
    for vendor in Vendor::all() {
        if config.has_credential(vendor) {
            info!(vendor = %vendor, "Provider initialized");
        } else {
            warn!(
                vendor = %vendor,
                "No API key configured, requests to this provider will fail"
            );
        }
    }

    let anthropic = AnthropicAdapter::new(&config.anthropic, params)?;
    let openai = OpenAiAdapter::new(&config.openai, params)?;

    Ok(ProviderSet::new()
        .with(Arc::new(anthropic))
        .with(Arc::new(openai)))
}

/// Build the shared HTTP client for one vendor
pub(crate) fn http_client(vendor: Vendor, timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::new(vendor, format!("Failed to build HTTP client: {}", e)))
}

/// Map a transport-level failure (connect, timeout, body read)
pub(crate) fn transport_error(vendor: Vendor, error: reqwest::Error) -> ProviderError {
    let message = if error.is_timeout() {
        format!("{} request timed out", vendor.display_name())
    } else if error.is_connect() {
        format!("Could not connect to {}: {}", vendor.display_name(), error)
    } else {
        error.to_string()
    };

    match error.status() {
        Some(status) => ProviderError::new(vendor, message).with_status(status.as_u16()),
        None => ProviderError::new(vendor, message),
    }
}

/// Both vendors report API errors as `{"error": {"message": ...}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turn a non-success vendor response into a [`ProviderError`],
/// preferring the vendor's own error message over the raw body.
pub(crate) async fn api_error(vendor: Vendor, response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
        Err(_) => format!("HTTP {}: {}", status.as_u16(), body.trim()),
    };

    ProviderError::new(vendor, message).with_status(status.as_u16())
}

/// Keep the first fragment that actually carries text
pub(crate) fn first_text<I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    fragments
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string())
}
