//! Anthropic messages API adapter

use super::{api_error, first_text, http_client, transport_error};
use async_trait::async_trait;
use boxai_application::{GenerationParams, ProviderAdapter, ProviderError};
use boxai_domain::{AnthropicProviderConfig, Vendor};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct AnthropicAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    api_version: String,
    params: GenerationParams,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicAdapter {
    pub fn new(
        config: &AnthropicProviderConfig,
        params: GenerationParams,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client(Vendor::Anthropic, config.timeout)?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            params,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Anthropic
    }

    async fn generate(&self, prompt: &str, vendor_model_id: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::new(Vendor::Anthropic, "Anthropic API key is not configured")
        })?;

        let request = MessagesRequest {
            model: vendor_model_id,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = vendor_model_id, "Sending Anthropic messages request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(Vendor::Anthropic, e))?;

        if !response.status().is_success() {
            return Err(api_error(Vendor::Anthropic, response).await);
        }

        let body: MessagesResponse = response.json().await.map_err(|e| {
            ProviderError::new(
                Vendor::Anthropic,
                format!("Failed to parse response: {}", e),
            )
        })?;

        Ok(first_text(
            body.content
                .into_iter()
                .filter(|block| block.kind == "text")
                .map(|block| block.text),
        ))
    }
}
