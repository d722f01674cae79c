//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ai::ProviderConfig;
use crate::constants::{llm, paths};
use crate::types::{DocError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text-generation backend
    pub llm: LlmConfig,

    /// Template lookup
    pub templates: TemplatesConfig,

    /// Documentation output
    pub output: OutputConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.llm.timeout_secs == 0 {
            return Err(DocError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_new_tokens == 0 {
            return Err(DocError::Config(
                "LLM max_new_tokens must be greater than 0".to_string(),
            ));
        }

        if self.llm.provider.trim().is_empty() {
            return Err(DocError::Config("LLM provider must not be empty".to_string()));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name: tgi, ollama, openai
    pub provider: String,

    /// Model name; each provider has its own default
    pub model: Option<String>,

    /// Endpoint override
    pub api_base: Option<String>,

    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Generation budget per document
    pub max_new_tokens: u32,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_new_tokens", &self.max_new_tokens)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: llm::PROVIDER.to_string(),
            model: None,
            api_base: None,
            api_key: None,
            timeout_secs: llm::TIMEOUT_SECS,
            max_new_tokens: llm::MAX_NEW_TOKENS,
        }
    }
}

impl LlmConfig {
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
            api_key: self.api_key.clone(),
            api_base: self.api_base.clone(),
            max_new_tokens: self.max_new_tokens,
        }
    }
}

// =============================================================================
// Templates / Output
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Template directory; unset means exe-adjacent, then `./templates`
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(paths::OUTPUT_DIR),
        }
    }
}
