//! OpenAI API Provider
//!
//! LLM provider using OpenAI's Chat Completions API, or any server that
//! speaks the same protocol.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{
    LlmProvider, LlmResponse, ProviderConfig, ResponseMetadata, ResponseTiming, TokenUsage,
    validate_endpoint,
};
use crate::types::{DocError, Result};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI API Provider with secure API key handling
pub struct OpenAiProvider {
    /// Never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    max_new_tokens: u32,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_new_tokens", &self.max_new_tokens)
            .finish()
    }
}

impl OpenAiProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                DocError::Config(
                    "OpenAI API key not found. Set OPENAI_API_KEY env var or provide in config"
                        .to_string(),
                )
            })?;

        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = validate_endpoint("OpenAI", &api_base)?;

        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DocError::LlmApi(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key_str),
            api_base,
            model,
            max_new_tokens: config.max_new_tokens,
            client,
        })
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
            max_tokens: self.max_new_tokens,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse> {
        info!(
            "Generating with OpenAI (model: {}, max_tokens: {})",
            self.model, self.max_new_tokens
        );

        let start_time = Instant::now();
        let url = format!("{}/chat/completions", self.api_base);

        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| DocError::LlmApi(format!("OpenAI request failed: {}", e)))?;

        let elapsed = start_time.elapsed();

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DocError::LlmApi(format!(
                "OpenAI API error ({}): {}",
                status, body
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DocError::LlmApi(format!("Failed to parse OpenAI response: {}", e)))?;

        let usage = body
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DocError::LlmApi("No content in OpenAI response".to_string()))?;

        Ok(LlmResponse::with_metrics(
            content,
            usage,
            ResponseTiming::from_duration(elapsed),
            ResponseMetadata {
                model: self.model.clone(),
                provider: "openai".to_string(),
            },
        ))
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.api_base);

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                info!("OpenAI API is available");
                Ok(true)
            }
            Ok(resp) => {
                warn!("OpenAI API check failed: {}", resp.status());
                Ok(false)
            }
            Err(e) => {
                warn!("OpenAI API check failed: {}", e);
                Ok(false)
            }
        }
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenAiProvider {
        OpenAiProvider::new(ProviderConfig {
            provider: "openai".to_string(),
            api_key: Some("sk-test".to_string()),
            max_new_tokens: 1024,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_request_shape() {
        let provider = provider();
        let json = serde_json::to_value(provider.build_request("hello")).unwrap();

        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["max_tokens"], 1024);
    }

    #[test]
    fn test_response_first_choice() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r##"{"choices": [{"message": {"content": "# A"}}, {"message": {"content": "# B"}}], "usage": null}"##,
        )
        .unwrap();
        let content = body.choices.into_iter().next().and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("# A"));
    }

    #[test]
    fn test_debug_redacts_key() {
        assert!(!format!("{:?}", provider()).contains("sk-test"));
    }
}
