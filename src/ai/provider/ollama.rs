//! Ollama Local LLM Provider
//!
//! LLM provider for locally-running Ollama models.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{
    LlmProvider, LlmResponse, ProviderConfig, ResponseMetadata, ResponseTiming, TokenUsage,
    validate_endpoint,
};
use crate::types::{DocError, Result};

const DEFAULT_API_BASE: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "codellama:latest";

/// Ollama Local LLM Provider
pub struct OllamaProvider {
    api_base: String,
    model: String,
    max_new_tokens: u32,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = validate_endpoint("Ollama", &api_base)?;

        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DocError::LlmApi(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_base,
            model,
            max_new_tokens: config.max_new_tokens,
            client,
        })
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> OllamaRequest<'a> {
        OllamaRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: OllamaOptions {
                temperature: 0.0,
                num_predict: self.max_new_tokens,
            },
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse> {
        info!(
            "Generating with Ollama (model: {}, num_predict: {})",
            self.model, self.max_new_tokens
        );

        let start_time = Instant::now();
        let url = format!("{}/api/generate", self.api_base);

        debug!("Sending request to Ollama API");

        let response = self.client
            .post(&url)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    DocError::LlmApi(format!(
                        "Failed to connect to Ollama at {}. Is Ollama running? Start with: ollama serve",
                        self.api_base
                    ))
                } else {
                    DocError::LlmApi(format!("Ollama request failed: {}", e))
                }
            })?;

        let elapsed = start_time.elapsed();

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DocError::LlmApi(format!(
                "Ollama API error ({}): {}",
                status, body
            )));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| DocError::LlmApi(format!("Failed to parse Ollama response: {}", e)))?;

        let usage = TokenUsage::new(
            body.prompt_eval_count.unwrap_or(0),
            body.eval_count.unwrap_or(0),
        );

        Ok(LlmResponse::with_metrics(
            body.response,
            usage,
            ResponseTiming::from_duration(elapsed),
            ResponseMetadata {
                model: self.model.clone(),
                provider: "ollama".to_string(),
            },
        ))
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.api_base);

        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                if let Ok(tags) = resp.json::<OllamaTagsResponse>().await {
                    let model_available = tags.models.iter().any(|m| {
                        m.name == self.model
                            || m.name.starts_with(&self.model.replace(":latest", ""))
                    });

                    if model_available {
                        info!("Ollama is available with model: {}", self.model);
                        Ok(true)
                    } else {
                        warn!(
                            "Ollama is running but model '{}' not found. Pull with: ollama pull {}",
                            self.model, self.model
                        );
                        Ok(false)
                    }
                } else {
                    info!("Ollama is available");
                    Ok(true)
                }
            }
            Ok(resp) => {
                warn!("Ollama API check failed: {}", resp.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Ollama not available: {}. Start with: ollama serve", e);
                Ok(false)
            }
        }
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Debug, Deserialize)]
struct OllamaModel {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ollama_config() -> ProviderConfig {
        ProviderConfig {
            provider: "ollama".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let provider = OllamaProvider::new(ollama_config()).unwrap();
        assert_eq!(provider.api_base, DEFAULT_API_BASE);
        assert_eq!(provider.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_request_is_deterministic() {
        let provider = OllamaProvider::new(ProviderConfig {
            max_new_tokens: 512,
            ..ollama_config()
        })
        .unwrap();

        let json = serde_json::to_value(provider.build_request("p")).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.0);
        assert_eq!(json["options"]["num_predict"], 512);
        assert!(json.get("format").is_none());
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = OllamaProvider::new(ProviderConfig {
            api_base: Some("file:///tmp/socket".to_string()),
            ..ollama_config()
        });
        assert!(matches!(result, Err(DocError::Config(_))));
    }
}
