//! Shared test doubles

use async_trait::async_trait;
use fastutor_core::llm::{LLMError, LlmGateway};
use fastutor_core::prompts::PromptPair;
use std::sync::{Arc, Mutex};

/// Gateway that records every prompt and answers with a fixed reply
#[derive(Clone)]
pub struct StubGateway {
    reply: Result<String, String>,
    pub prompts: Arc<Mutex<Vec<PromptPair>>>,
}

#[allow(dead_code)]
impl StubGateway {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn recorded(&self) -> Vec<PromptPair> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for StubGateway {
    async fn generate(&self, prompt: &PromptPair) -> Result<String, LLMError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone().map_err(LLMError::Network)
    }
}
