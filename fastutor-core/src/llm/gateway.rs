use super::provider::{LLMError, LLMProvider, LLMRequest, Message};
use super::providers::OpenAIProvider;
use crate::config::LlmConfig;
use crate::prompts::PromptPair;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{info, warn};

/// Turns a composed prompt into generated text.
///
/// One call is one request to the external service. Callers await it and the
/// current interaction waits with them. There is no retry and no timeout.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, LLMError>;
}

/// Gateway backed by a chat-completion provider
pub struct ProviderGateway {
    provider: Box<dyn LLMProvider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl ProviderGateway {
    pub fn new(provider: Box<dyn LLMProvider>, config: &LlmConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens_limit(),
        }
    }

    /// OpenAI-compatible gateway built from the `[llm]` settings
    pub fn openai(config: &LlmConfig, api_key: String) -> Self {
        let provider = OpenAIProvider::from_config(
            api_key,
            config.model.clone(),
            Some(config.base_url.clone()),
        );
        Self::new(Box::new(provider), config)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, prompt: &PromptPair) -> LLMRequest {
        LLMRequest {
            messages: vec![Message::user(prompt.task_instruction.clone())],
            system_prompt: Some(prompt.role_instruction.clone()),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }
}

#[async_trait]
impl LlmGateway for ProviderGateway {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, LLMError> {
        let request = self.build_request(prompt);
        let started = Instant::now();

        let result = self.provider.generate(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    model = %self.model,
                    elapsed_ms,
                    "generation failed: {err}"
                );
                return Err(err);
            }
        };

        info!(
            provider = self.provider.name(),
            model = %self.model,
            elapsed_ms,
            total_tokens = response.usage.map(|u| u.total_tokens),
            "generation completed"
        );

        response
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| LLMError::Provider("Response contained no text content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::{FinishReason, LLMResponse};
    use std::sync::{Arc, Mutex};

    struct RecordingProvider {
        seen: Arc<Mutex<Vec<LLMRequest>>>,
        content: Option<String>,
    }

    #[async_trait]
    impl LLMProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
            self.seen.lock().unwrap().push(request);
            Ok(LLMResponse {
                content: self.content.clone(),
                usage: None,
                finish_reason: FinishReason::Stop,
            })
        }
    }

    fn recording_gateway(content: Option<&str>) -> (ProviderGateway, Arc<Mutex<Vec<LLMRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let provider = RecordingProvider {
            seen: Arc::clone(&seen),
            content: content.map(str::to_string),
        };
        (
            ProviderGateway::new(Box::new(provider), &LlmConfig::default()),
            seen,
        )
    }

    fn prompt() -> PromptPair {
        PromptPair {
            role_instruction: "role".to_string(),
            task_instruction: "task".to_string(),
        }
    }

    #[tokio::test]
    async fn sends_role_as_system_prompt_and_task_as_user_message() {
        let (gateway, seen) = recording_gateway(Some("answer"));
        assert_eq!(gateway.generate(&prompt()).await.unwrap(), "answer");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].system_prompt.as_deref(), Some("role"));
        assert_eq!(seen[0].messages, vec![Message::user("task".to_string())]);
        assert_eq!(seen[0].model, "gpt-4");
        assert_eq!(seen[0].temperature, Some(0.5));
        assert_eq!(seen[0].max_tokens, None);
    }

    #[tokio::test]
    async fn missing_or_blank_content_is_a_provider_error() {
        for content in [None, Some("  \n")] {
            let (gateway, _) = recording_gateway(content);
            assert!(matches!(
                gateway.generate(&prompt()).await,
                Err(LLMError::Provider(_))
            ));
        }
    }

    #[test]
    fn openai_gateway_uses_configured_model() {
        let config = LlmConfig {
            model: "gpt-4o-mini".to_string(),
            ..LlmConfig::default()
        };
        let gateway = ProviderGateway::openai(&config, "key".to_string());
        assert_eq!(gateway.model(), "gpt-4o-mini");
    }
}
