use crate::config::constants::{message_roles, models, urls};
use crate::llm::provider::{FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Usage};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::{Value, json};

pub struct OpenAIProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, models::openai::DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self::from_config(api_key, model, None)
    }

    pub fn from_config(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            // No request timeout: a generation call may take as long as the service needs.
            http_client: HttpClient::new(),
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| urls::OPENAI_API_BASE.to_string()),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.validate_request(&request)?;
        let openai_request = self.convert_to_openai_format(&request);

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &error_text));
        }

        let openai_response: Value = response
            .json()
            .await
            .map_err(|e| LLMError::Provider(format!("Failed to parse response: {e}")))?;

        parse_openai_response(openai_response)
    }
}

impl OpenAIProvider {
    fn convert_to_openai_format(&self, request: &LLMRequest) -> Value {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        if let Some(system_prompt) = &request.system_prompt {
            messages.push(json!({
                "role": message_roles::SYSTEM,
                "content": system_prompt
            }));
        }

        for msg in &request.messages {
            messages.push(json!({
                "role": msg.role.as_openai_str(),
                "content": msg.content
            }));
        }

        let mut openai_request = json!({
            "model": request.model,
            "messages": messages,
        });

        if let Some(max_tokens) = request.max_tokens {
            openai_request["max_tokens"] = json!(max_tokens);
        }

        if let Some(temperature) = request.temperature {
            openai_request["temperature"] = json!(temperature);
        }

        openai_request
    }
}

/// Map a non-success HTTP status to the matching error kind
pub(crate) fn map_status_error(status: StatusCode, body: &str) -> LLMError {
    let detail = extract_error_message(body).unwrap_or_else(|| body.trim().to_string());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LLMError::Authentication(format!("HTTP {status}: {detail}"))
        }
        StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimit,
        _ => LLMError::Provider(format!("HTTP {status}: {detail}")),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

pub(crate) fn parse_openai_response(response_json: Value) -> Result<LLMResponse, LLMError> {
    let choice = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| LLMError::Provider("Invalid response format: missing choices".to_string()))?
        .first()
        .ok_or_else(|| LLMError::Provider("No choices in response".to_string()))?;

    let message = choice.get("message").ok_or_else(|| {
        LLMError::Provider("Invalid response format: missing message".to_string())
    })?;

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string());

    let finish_reason = choice
        .get("finish_reason")
        .and_then(|fr| fr.as_str())
        .map(|fr| match fr {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            "content_filter" => FinishReason::ContentFilter,
            _ => FinishReason::Error(fr.to_string()),
        })
        .unwrap_or(FinishReason::Stop);

    let usage = response_json.get("usage").map(|u| {
        let count = |key: &str| u.get(key).and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        Usage {
            prompt_tokens: count("prompt_tokens"),
            completion_tokens: count("completion_tokens"),
            total_tokens: count("total_tokens"),
        }
    });

    Ok(LLMResponse {
        content,
        usage,
        finish_reason,
    })
}
