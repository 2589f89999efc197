//! OpenAI chat completions adapter
//!
//! Also works with OpenAI-compatible endpoints when `base_url` is overridden.

use super::{api_error, first_text, http_client, transport_error};
use async_trait::async_trait;
use boxai_application::{GenerationParams, ProviderAdapter, ProviderError};
use boxai_domain::{OpenAiProviderConfig, Vendor};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    params: GenerationParams,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiAdapter {
    pub fn new(config: &OpenAiProviderConfig, params: GenerationParams) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client(Vendor::OpenAi, config.timeout)?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            params,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::OpenAi
    }

    async fn generate(&self, prompt: &str, vendor_model_id: &str) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::new(Vendor::OpenAi, "OpenAI API key is not configured"))?;

        let request = ChatRequest {
            model: vendor_model_id,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
        };

        debug!(model = vendor_model_id, "Sending OpenAI chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(Vendor::OpenAi, e))?;

        if !response.status().is_success() {
            return Err(api_error(Vendor::OpenAi, response).await);
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            ProviderError::new(Vendor::OpenAi, format!("Failed to parse response: {}", e))
        })?;

        // Only the first choice is considered, as with n = 1
        Ok(first_text(
            body.choices
                .into_iter()
                .take(1)
                .map(|choice| choice.message.and_then(|message| message.content)),
        ))
    }
}
