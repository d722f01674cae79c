//! Deterministic in-process provider for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{LlmProvider, LlmResponse};
use crate::types::{DocError, Result};

/// Echoes a fixed-format document derived from the prompt
#[derive(Debug, Default)]
pub struct StubProvider {
    prompts: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any prompt containing `needle`.
    pub fn failing_on(needle: impl Into<String>) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_on: Some(needle.into()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// The document produced for `prompt`.
    pub fn render(prompt: &str) -> String {
        let first_line = prompt.lines().next().unwrap_or_default();
        format!("# Generated\n\n{}\n\n({} bytes of prompt)\n", first_line, prompt.len())
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(needle) = &self.fail_on
            && prompt.contains(needle.as_str())
        {
            return Err(DocError::LlmApi(format!("stub refused prompt with '{}'", needle)));
        }

        Ok(LlmResponse::content_only(Self::render(prompt)))
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}
