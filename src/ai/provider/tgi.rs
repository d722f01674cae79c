//! Text Generation Inference Provider
//!
//! Talks to a TGI-style `/generate` endpoint serving a code model. Greedy
//! decoding; the server returns the prompt followed by the completion and
//! the text is kept as-is.

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

const DEFAULT_API_BASE: &str = "http://localhost:8080";
const DEFAULT_MODEL: &str = "bigcode/starcoder";

/// TGI provider; the bearer token is optional for local servers
pub struct TgiProvider {
    api_key: Option<SecretString>,
    api_base: String,
    model: String,
    max_new_tokens: u32,
    client: reqwest::Client,
}

impl std::fmt::Debug for TgiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TgiProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_new_tokens", &self.max_new_tokens)
            .finish()
    }
}

impl TgiProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = validate_endpoint("TGI", &api_base)?;

        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DocError::LlmApi(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.map(SecretString::from),
            api_base,
            model,
            max_new_tokens: config.max_new_tokens,
            client,
        })
    }

    fn build_request<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters {
                max_new_tokens: self.max_new_tokens,
                do_sample: false,
                return_full_text: true,
            },
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(
                "Authorization",
                format!("Bearer {}", key.expose_secret()),
            ),
            None => request,
        }
    }
}

#[async_trait]
impl LlmProvider for TgiProvider {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse> {
        info!(
            "Generating with TGI (model: {}, max_new_tokens: {})",
            self.model, self.max_new_tokens
        );

        let start_time = Instant::now();
        let url = format!("{}/generate", self.api_base);

        debug!("Sending request to {}", url);

        let response = self
            .authorize(self.client.post(&url))
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    DocError::LlmApi(format!(
                        "Failed to connect to TGI at {}. Is the inference server running?",
                        self.api_base
                    ))
                } else {
                    DocError::LlmApi(format!("TGI request failed: {}", e))
                }
            })?;

        let elapsed = start_time.elapsed();

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DocError::LlmApi(format!(
                "TGI API error ({}): {}",
                status, body
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DocError::LlmApi(format!("Failed to parse TGI response: {}", e)))?;

        let candidate = body.into_first()?;
        let usage = candidate
            .details
            .as_ref()
            .map(|d| TokenUsage::new(0, d.generated_tokens))
            .unwrap_or_default();

        Ok(LlmResponse::with_metrics(
            candidate.generated_text,
            usage,
            ResponseTiming::from_duration(elapsed),
            ResponseMetadata {
                model: self.model.clone(),
                provider: "tgi".to_string(),
            },
        ))
    }

    fn name(&self) -> &str {
        "tgi"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.api_base);

        match self.authorize(self.client.get(&url)).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("TGI is available at {}", self.api_base);
                Ok(true)
            }
            Ok(resp) => {
                warn!("TGI health check failed: {}", resp.status());
                Ok(false)
            }
            Err(e) => {
                warn!("TGI not available: {}", e);
                Ok(false)
            }
        }
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    do_sample: bool,
    return_full_text: bool,
}

/// Servers answer with a single object or a list of candidates
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Single(Candidate),
    Batch(Vec<Candidate>),
}

impl GenerateResponse {
    fn into_first(self) -> Result<Candidate> {
        match self {
            Self::Single(candidate) => Ok(candidate),
            Self::Batch(candidates) => candidates
                .into_iter()
                .next()
                .ok_or_else(|| DocError::LlmApi("TGI returned no candidates".to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    generated_text: String,
    #[serde(default)]
    details: Option<CandidateDetails>,
}

#[derive(Debug, Deserialize)]
struct CandidateDetails {
    generated_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let provider = TgiProvider::new(ProviderConfig::default()).unwrap();
        assert_eq!(provider.api_base, DEFAULT_API_BASE);
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert!(provider.api_key.is_none());
    }

    #[test]
    fn test_request_shape() {
        let provider = TgiProvider::new(ProviderConfig {
            max_new_tokens: 256,
            ..Default::default()
        })
        .unwrap();

        let json = serde_json::to_value(provider.build_request("doc this")).unwrap();
        assert_eq!(json["inputs"], "doc this");
        assert_eq!(json["parameters"]["max_new_tokens"], 256);
        assert_eq!(json["parameters"]["do_sample"], false);
        assert_eq!(json["parameters"]["return_full_text"], true);
    }

    #[test]
    fn test_response_object_and_array() {
        let single: GenerateResponse =
            serde_json::from_str(r##"{"generated_text": "# Doc"}"##).unwrap();
        assert_eq!(single.into_first().unwrap().generated_text, "# Doc");

        let batch: GenerateResponse = serde_json::from_str(
            r#"[{"generated_text": "first", "details": {"generated_tokens": 3}}, {"generated_text": "second"}]"#,
        )
        .unwrap();
        let first = batch.into_first().unwrap();
        assert_eq!(first.generated_text, "first");
        assert_eq!(first.details.unwrap().generated_tokens, 3);
    }

    #[test]
    fn test_empty_candidates_is_error() {
        let empty: GenerateResponse = serde_json::from_str("[]").unwrap();
        assert!(matches!(empty.into_first(), Err(DocError::LlmApi(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let provider = TgiProvider::new(ProviderConfig {
            api_key: Some("hf_secret".to_string()),
            ..Default::default()
        })
        .unwrap();
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("hf_secret"));
    }
}
