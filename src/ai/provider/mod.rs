//! LLM Provider Abstraction
//!
//! Defines the LlmProvider trait for plain text generation. Every provider
//! decodes greedily (temperature 0) under a fixed `max_new_tokens` budget so
//! the same prompt yields the same document on every run.
//!
//! ## Backends
//!
//! - `tgi`: text-generation-inference style `/generate` endpoint (default)
//! - `ollama`: local Ollama server
//! - `openai`: OpenAI-compatible Chat Completions

mod ollama;
mod openai;
mod tgi;

#[cfg(test)]
pub mod stub;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use tgi::TgiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::constants::llm as defaults;
use crate::types::{DocError, Result};

// =============================================================================
// LLM Response with Usage Metrics
// =============================================================================

/// Generated text plus whatever metrics the backend reported
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// First candidate, verbatim
    pub content: String,
    pub usage: TokenUsage,
    pub timing: ResponseTiming,
    pub metadata: ResponseMetadata,
}

impl LlmResponse {
    /// Create response with content only (usage unknown)
    pub fn content_only(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: TokenUsage::default(),
            timing: ResponseTiming::default(),
            metadata: ResponseMetadata::default(),
        }
    }

    pub fn with_metrics(
        content: String,
        usage: TokenUsage,
        timing: ResponseTiming,
        metadata: ResponseMetadata,
    ) -> Self {
        Self {
            content,
            usage,
            timing,
            metadata,
        }
    }
}

/// Token usage metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (response)
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Response timing metrics
#[derive(Debug, Clone, Default)]
pub struct ResponseTiming {
    /// Wall clock time in milliseconds
    pub total_ms: u64,
}

impl ResponseTiming {
    pub fn from_duration(duration: std::time::Duration) -> Self {
        Self {
            total_ms: duration.as_millis() as u64,
        }
    }
}

/// Response metadata
#[derive(Debug, Clone, Default)]
pub struct ResponseMetadata {
    pub model: String,
    pub provider: String,
}

/// Shared LLM provider handle.
pub type SharedProvider = Arc<dyn LlmProvider + Send + Sync>;

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for LLM providers
///
/// Note: API keys are never serialized to output and are redacted in debug
/// output. Providers convert the key to SecretString internally.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider type: "tgi", "ollama", "openai"
    pub provider: String,
    /// Model name (provider-specific)
    #[serde(default)]
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Never serialized to output
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL (for custom endpoints)
    #[serde(default)]
    pub api_base: Option<String>,
    /// Generation budget per document
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("max_new_tokens", &self.max_new_tokens)
            .finish()
    }
}

fn default_max_new_tokens() -> u32 {
    defaults::MAX_NEW_TOKENS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: defaults::PROVIDER.to_string(),
            model: None,
            timeout_secs: defaults::TIMEOUT_SECS,
            api_key: None,
            api_base: None,
            max_new_tokens: defaults::MAX_NEW_TOKENS,
        }
    }
}

// =============================================================================
// LLM Provider Trait
// =============================================================================

/// Text-in, text-out generation backend
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for `prompt`, returning the first candidate.
    async fn generate(&self, prompt: &str) -> Result<LlmResponse>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is available
    async fn health_check(&self) -> Result<bool>;
}

/// Create a shared provider from configuration
pub fn create_provider(config: &ProviderConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "tgi" => Ok(Arc::new(TgiProvider::new(config.clone())?)),
        "ollama" => Ok(Arc::new(OllamaProvider::new(config.clone())?)),
        "openai" => Ok(Arc::new(OpenAiProvider::new(config.clone())?)),
        _ => Err(DocError::Config(format!(
            "Unknown provider: {}. Supported: tgi, ollama, openai",
            config.provider
        ))),
    }
}

/// Validate an endpoint URL, returning it without a trailing slash.
///
/// Only http/https are accepted; non-local hosts are allowed with a warning.
pub(crate) fn validate_endpoint(provider: &str, endpoint: &str) -> Result<String> {
    let url = url::Url::parse(endpoint).map_err(|e| {
        DocError::Config(format!(
            "Invalid {} endpoint URL '{}': {}",
            provider, endpoint, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(DocError::Config(format!(
            "{} endpoint must use http or https scheme, got: {}",
            provider,
            url.scheme()
        )));
    }

    if let Some(host) = url.host_str()
        && !matches!(host, "localhost" | "127.0.0.1" | "[::1]")
    {
        warn!(
            "{} endpoint is not localhost: {}. Ensure this is intentional.",
            provider, host
        );
    }

    let mut result = url.to_string();
    if result.ends_with('/') {
        result.pop();
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider() {
        let config = ProviderConfig {
            provider: "claude".to_string(),
            ..Default::default()
        };
        match create_provider(&config) {
            Err(DocError::Config(msg)) => assert!(msg.contains("Unknown provider")),
            _ => panic!("expected config error"),
        }
    }

    #[test]
    fn test_default_provider_is_tgi() {
        let provider = create_provider(&ProviderConfig::default()).unwrap();
        assert_eq!(provider.name(), "tgi");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ProviderConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = ProviderConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }

    #[test]
    fn test_validate_endpoint() {
        assert_eq!(
            validate_endpoint("tgi", "http://localhost:8080/").unwrap(),
            "http://localhost:8080"
        );
        assert!(matches!(
            validate_endpoint("tgi", "ftp://localhost"),
            Err(DocError::Config(_))
        ));
        assert!(validate_endpoint("tgi", "not a url").is_err());
    }

    #[test]
    fn test_token_usage_total() {
        assert_eq!(TokenUsage::new(100, 50).total(), 150);
    }
}
