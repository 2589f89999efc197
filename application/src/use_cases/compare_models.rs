//! Compare Models use case
//!
//! Fans one prompt out to every requested model and collects the answers
//! side by side.
//!
//! Each requested key is resolved against the [`ModelRegistry`] and handed to
//! the adapter of its vendor. All vendor calls are spawned before any is
//! awaited, and results are slotted back by request index, so the output
//! order never depends on which vendor answered first.
//!
//! Failures never escape this use case: an unknown key, a missing adapter, a
//! vendor error or even a panicking task each turn into an inline
//! `"Error: ..."` [`ModelResponse`] for that key alone.

use crate::ports::progress::{ComparisonProgress, NoProgress};
use crate::ports::provider::{ProviderAdapter, ProviderSet};
use boxai_domain::{ModelDescriptor, ModelRegistry, ModelResponse, Query, truncate};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::{Id as TaskId, JoinSet};
use tracing::{debug, info, warn};

/// Use case for comparing several models on one prompt
pub struct CompareModelsUseCase {
    registry: Arc<ModelRegistry>,
    providers: ProviderSet,
}

impl CompareModelsUseCase {
    pub fn new(registry: Arc<ModelRegistry>, providers: ProviderSet) -> Self {
        Self {
            registry,
            providers,
        }
    }

    /// The catalog this use case resolves keys against
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, query: &Query) -> Vec<ModelResponse> {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Always returns exactly one response per requested key, in request order.
    pub async fn execute_with_progress(
        &self,
        query: &Query,
        progress: &dyn ComparisonProgress,
    ) -> Vec<ModelResponse> {
        let keys = query.model_keys();
        info!(
            models = keys.len(),
            prompt = %truncate(query.prompt(), 60),
            "Starting comparison"
        );
        progress.on_comparison_start(keys.len());

        let mut slots: Vec<Option<ModelResponse>> = vec![None; keys.len()];
        let mut task_slots: HashMap<TaskId, usize> = HashMap::new();
        let mut join_set = JoinSet::new();

        for (index, key) in keys.iter().enumerate() {
            let (model, adapter) = match self.resolve_target(key) {
                Ok(target) => target,
                Err(message) => {
                    warn!(model = %key, "{}", message);
                    progress.on_model_complete(key, false);
                    slots[index] = Some(ModelResponse::failure(key, message));
                    continue;
                }
            };

            let prompt = query.prompt().to_string();
            let key = key.clone();
            let handle = join_set
                .spawn(async move { Self::query_model(adapter, model, prompt, key).await });
            task_slots.insert(handle.id(), index);
        }

        while let Some(joined) = join_set.join_next_with_id().await {
            match joined {
                Ok((id, response)) => {
                    if let Some(&index) = task_slots.get(&id) {
                        progress.on_model_complete(&response.model_key, response.is_success());
                        slots[index] = Some(response);
                    }
                }
                Err(e) => {
                    if let Some(&index) = task_slots.get(&e.id()) {
                        let key = &keys[index];
                        warn!(model = %key, "Model task failed: {}", e);
                        progress.on_model_complete(key, false);
                        slots[index] =
                            Some(ModelResponse::failure(key, format!("Model task failed: {e}")));
                    }
                }
            }
        }

        progress.on_comparison_complete();

        slots
            .into_iter()
            .zip(keys)
            .map(|(slot, key)| {
                slot.unwrap_or_else(|| ModelResponse::failure(key, "No response collected"))
            })
            .collect()
    }

    /// Resolve a key to its descriptor and the adapter serving its vendor
    fn resolve_target(
        &self,
        key: &str,
    ) -> Result<(ModelDescriptor, Arc<dyn ProviderAdapter>), String> {
        let model = self.registry.resolve(key).map_err(|e| e.to_string())?;
        let adapter = self.providers.get(model.vendor()).ok_or_else(|| {
            format!(
                "No provider configured for {}",
                model.vendor().display_name()
            )
        })?;
        Ok((model.clone(), adapter))
    }

    /// Query a single model, converting any failure into a response
    async fn query_model(
        adapter: Arc<dyn ProviderAdapter>,
        model: ModelDescriptor,
        prompt: String,
        key: String,
    ) -> ModelResponse {
        debug!(
            model = %key,
            vendor = %model.vendor(),
            vendor_model = model.vendor_model_id(),
            "Querying model"
        );

        let start = Instant::now();
        match adapter.generate(&prompt, model.vendor_model_id()).await {
            Ok(text) => {
                let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let response = ModelResponse::success(key, text, latency_ms);
                info!(
                    model = %response.model_key,
                    latency_ms,
                    words = response.word_count,
                    "Model responded successfully"
                );
                response
            }
            Err(e) => {
                warn!(
                    model = %key,
                    vendor = %e.vendor,
                    status = ?e.status,
                    "Model failed: {}",
                    e.message
                );
                ModelResponse::failure(key, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::provider::ProviderError;
    use async_trait::async_trait;
    use boxai_domain::Vendor;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Mock Adapter ====================

    enum Reply {
        Text(&'static str),
        Fail(&'static str),
        Panic,
    }

    /// Answers per vendor model id after an optional delay
    struct MockAdapter {
        vendor: Vendor,
        replies: HashMap<&'static str, (u64, Reply)>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockAdapter {
        fn new(vendor: Vendor) -> Self {
            Self {
                vendor,
                replies: HashMap::new(),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn reply(mut self, model_id: &'static str, delay_ms: u64, reply: Reply) -> Self {
            self.replies.insert(model_id, (delay_ms, reply));
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockAdapter {
        fn vendor(&self) -> Vendor {
            self.vendor
        }

        async fn generate(
            &self,
            prompt: &str,
            vendor_model_id: &str,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            let (delay, reply) = self
                .replies
                .get(vendor_model_id)
                .expect("unexpected vendor model id");
            tokio::time::sleep(Duration::from_millis(*delay)).await;
            match reply {
                Reply::Text(text) => Ok(text.to_string()),
                Reply::Fail(message) => Err(ProviderError::new(self.vendor, *message)),
                Reply::Panic => panic!("adapter blew up"),
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        started: Mutex<Option<usize>>,
        completed: Mutex<Vec<(String, bool)>>,
        finished: AtomicUsize,
    }

    impl ComparisonProgress for RecordingProgress {
        fn on_comparison_start(&self, total_models: usize) {
            *self.started.lock().unwrap() = Some(total_models);
        }

        fn on_model_complete(&self, model_key: &str, success: bool) {
            self.completed
                .lock()
                .unwrap()
                .push((model_key.to_string(), success));
        }

        fn on_comparison_complete(&self) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }

    // ==================== Helpers ====================

    fn use_case(
        openai: Arc<MockAdapter>,
        anthropic: Arc<MockAdapter>,
    ) -> CompareModelsUseCase {
        let providers = ProviderSet::new().with(openai).with(anthropic);
        CompareModelsUseCase::new(Arc::new(ModelRegistry::builtin()), providers)
    }

    fn query(keys: &[&str]) -> Query {
        Query::try_new("ping", keys.iter().copied()).unwrap()
    }

    fn keys_of(responses: &[ModelResponse]) -> Vec<&str> {
        responses.iter().map(|r| r.model_key.as_str()).collect()
    }

    // ==================== Ordering ====================

    #[tokio::test(start_paused = true)]
    async fn test_output_follows_request_order_not_completion_order() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi)
                .reply("gpt-3.5-turbo", 300, Reply::Text("slow"))
                .reply("gpt-4", 10, Reply::Text("fast")),
        );
        let anthropic = Arc::new(
            MockAdapter::new(Vendor::Anthropic)
                .reply("claude-3-haiku-20240307", 100, Reply::Text("medium")),
        );
        let uc = use_case(openai, anthropic);

        let responses = uc.execute(&query(&["openai", "claude", "gpt4"])).await;

        assert_eq!(keys_of(&responses), vec!["openai", "claude", "gpt4"]);
        assert_eq!(responses[0].text, "slow");
        assert_eq!(responses[1].text, "medium");
        assert_eq!(responses[2].text, "fast");
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_run_concurrently() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi)
                .reply("gpt-3.5-turbo", 200, Reply::Text("a"))
                .reply("gpt-4", 200, Reply::Text("b")),
        );
        let anthropic = Arc::new(
            MockAdapter::new(Vendor::Anthropic)
                .reply("claude-3-haiku-20240307", 200, Reply::Text("c")),
        );
        let uc = use_case(openai, anthropic);

        let start = tokio::time::Instant::now();
        let responses = uc.execute(&query(&["openai", "claude", "gpt4"])).await;

        assert_eq!(responses.len(), 3);
        assert!(start.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_duplicate_keys_each_get_a_response() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi).reply("gpt-3.5-turbo", 0, Reply::Text("hi")),
        );
        let anthropic = Arc::new(MockAdapter::new(Vendor::Anthropic));
        let uc = use_case(openai.clone(), anthropic);

        let responses = uc.execute(&query(&["openai", "openai"])).await;

        assert_eq!(keys_of(&responses), vec!["openai", "openai"]);
        assert_eq!(openai.calls(), 2);
    }

    // ==================== Isolation ====================

    #[tokio::test]
    async fn test_unsupported_key_is_degraded_inline() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi).reply("gpt-3.5-turbo", 0, Reply::Text("Hello world")),
        );
        let anthropic = Arc::new(MockAdapter::new(Vendor::Anthropic));
        let uc = use_case(openai.clone(), anthropic.clone());

        let responses = uc.execute(&query(&["llama", "openai"])).await;

        assert_eq!(keys_of(&responses), vec!["llama", "openai"]);
        assert_eq!(responses[0].text, "Error: Unsupported model: llama");
        assert_eq!(responses[0].latency_ms, 0);
        assert_eq!(responses[0].word_count, 0);
        assert!(!responses[0].is_success());

        assert_eq!(responses[1].text, "Hello world");
        assert_eq!(responses[1].word_count, 2);
        assert!(responses[1].is_success());

        assert_eq!(openai.calls(), 1);
        assert_eq!(anthropic.calls(), 0);
    }

    #[tokio::test]
    async fn test_one_failing_provider_does_not_affect_siblings() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi).reply("gpt-3.5-turbo", 5, Reply::Text("pong")),
        );
        let anthropic = Arc::new(MockAdapter::new(Vendor::Anthropic).reply(
            "claude-3-haiku-20240307",
            0,
            Reply::Fail("overloaded"),
        ));
        let uc = use_case(openai, anthropic);

        let responses = uc.execute(&query(&["openai", "claude"])).await;

        assert_eq!(responses[0].text, "pong");
        assert!(responses[0].is_success());

        assert!(responses[1].text.starts_with("Error:"));
        assert_eq!(
            responses[1].text,
            "Error: Failed to generate response: overloaded"
        );
        assert_eq!(responses[1].latency_ms, 0);
        assert_eq!(responses[1].word_count, 0);
    }

    #[tokio::test]
    async fn test_all_providers_failing_still_returns_every_entry() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi)
                .reply("gpt-3.5-turbo", 0, Reply::Fail("down"))
                .reply("gpt-4", 0, Reply::Fail("down")),
        );
        let anthropic = Arc::new(MockAdapter::new(Vendor::Anthropic).reply(
            "claude-3-haiku-20240307",
            0,
            Reply::Fail("down"),
        ));
        let uc = use_case(openai, anthropic);

        let responses = uc.execute(&query(&["gpt4", "claude", "openai"])).await;

        assert_eq!(keys_of(&responses), vec!["gpt4", "claude", "openai"]);
        assert!(responses.iter().all(|r| !r.is_success()));
    }

    #[tokio::test]
    async fn test_panicking_adapter_is_isolated() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi)
                .reply("gpt-3.5-turbo", 0, Reply::Panic)
                .reply("gpt-4", 0, Reply::Text("still here")),
        );
        let anthropic = Arc::new(MockAdapter::new(Vendor::Anthropic));
        let uc = use_case(openai, anthropic);

        let responses = uc.execute(&query(&["openai", "gpt4"])).await;

        assert_eq!(keys_of(&responses), vec!["openai", "gpt4"]);
        assert!(responses[0].text.starts_with("Error: Model task failed"));
        assert_eq!(responses[0].latency_ms, 0);
        assert_eq!(responses[1].text, "still here");
    }

    #[tokio::test]
    async fn test_missing_vendor_adapter_is_degraded_inline() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi).reply("gpt-4", 0, Reply::Text("ok")),
        );
        let providers = ProviderSet::new().with(openai);
        let uc = CompareModelsUseCase::new(Arc::new(ModelRegistry::builtin()), providers);

        let responses = uc.execute(&query(&["claude", "gpt4"])).await;

        assert_eq!(
            responses[0].text,
            "Error: No provider configured for Anthropic"
        );
        assert_eq!(responses[1].text, "ok");
    }

    // ==================== Normalization ====================

    #[tokio::test]
    async fn test_success_metrics() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi).reply("gpt-4", 0, Reply::Text("  one  two\nthree ")),
        );
        let anthropic = Arc::new(
            MockAdapter::new(Vendor::Anthropic)
                .reply("claude-3-haiku-20240307", 0, Reply::Text("")),
        );
        let uc = use_case(openai, anthropic);

        let responses = uc.execute(&query(&["gpt4", "claude"])).await;

        assert_eq!(responses[0].text, "  one  two\nthree ");
        assert_eq!(responses[0].word_count, 3);
        assert_eq!(responses[1].text, "");
        assert_eq!(responses[1].word_count, 0);
        assert!(responses[1].is_success());
    }

    #[tokio::test]
    async fn test_alias_key_is_echoed_not_vendor_id() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi).reply("gpt-3.5-turbo", 0, Reply::Text("hi")),
        );
        let anthropic = Arc::new(MockAdapter::new(Vendor::Anthropic));
        let uc = use_case(openai.clone(), anthropic);

        let responses = uc.execute(&query(&["gpt-3.5-turbo", "openai"])).await;

        assert_eq!(keys_of(&responses), vec!["gpt-3.5-turbo", "openai"]);
        assert_eq!(openai.prompts.lock().unwrap().as_slice(), ["ping", "ping"]);
    }

    // ==================== Progress ====================

    #[tokio::test]
    async fn test_progress_reports_every_model() {
        let openai = Arc::new(
            MockAdapter::new(Vendor::OpenAi).reply("gpt-4", 0, Reply::Text("ok")),
        );
        let anthropic = Arc::new(MockAdapter::new(Vendor::Anthropic).reply(
            "claude-3-haiku-20240307",
            0,
            Reply::Fail("nope"),
        ));
        let uc = use_case(openai, anthropic);
        let progress = RecordingProgress::default();

        uc.execute_with_progress(&query(&["gpt4", "claude", "mystery"]), &progress)
            .await;

        assert_eq!(*progress.started.lock().unwrap(), Some(3));
        let mut completed = progress.completed.lock().unwrap().clone();
        completed.sort();
        assert_eq!(
            completed,
            vec![
                ("claude".to_string(), false),
                ("gpt4".to_string(), true),
                ("mystery".to_string(), false),
            ]
        );
        assert_eq!(progress.finished.load(Ordering::SeqCst), 1);
    }
}
