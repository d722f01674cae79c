//! Generation Invoker
//!
//! Owns the only handle to the text-generation backend. The provider is
//! built on first use and reused for the rest of the process; callers see
//! `ensure_ready()` and `generate()` and nothing else.

use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info, warn};

use super::prompt::documentation_prompt;
use super::provider::{ProviderConfig, SharedProvider, create_provider};
use crate::types::{DocError, Result};

type ProviderFactory = Box<dyn Fn() -> Result<SharedProvider> + Send + Sync>;

pub struct GenerationInvoker {
    provider: OnceCell<SharedProvider>,
    factory: ProviderFactory,
    lock: Mutex<()>,
}

impl GenerationInvoker {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<SharedProvider> + Send + Sync + 'static,
    {
        Self {
            provider: OnceCell::new(),
            factory: Box::new(factory),
            lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: ProviderConfig) -> Self {
        Self::new(move || create_provider(&config))
    }

    /// Wrap an already-built provider.
    pub fn with_provider(provider: SharedProvider) -> Self {
        Self::new(move || Ok(provider.clone()))
    }

    pub fn is_ready(&self) -> bool {
        self.provider.initialized()
    }

    /// Initialize the backend if it has not been yet. Idempotent.
    ///
    /// A failed health check is only a warning; a failure to build the
    /// provider is returned and leaves the invoker uninitialized.
    pub async fn ensure_ready(&self) -> Result<()> {
        self.handle().await.map(|_| ())
    }

    /// Generate one document from a template and a declaration's source.
    ///
    /// Returns the first candidate verbatim.
    pub async fn generate(&self, source: &str, template: &str) -> Result<String> {
        let provider = self.handle().await?;
        let _guard = self.lock.lock().await;

        let prompt = documentation_prompt(template, source);
        let response = provider.generate(&prompt).await?;
        debug!(
            "{} ({}) returned {} chars ({} tokens, {}ms)",
            response.metadata.provider,
            response.metadata.model,
            response.content.len(),
            response.usage.total(),
            response.timing.total_ms
        );

        Ok(response.content)
    }

    async fn handle(&self) -> Result<&SharedProvider> {
        self.provider
            .get_or_try_init(|| async {
                let provider = (self.factory)()?;
                info!(
                    "Loading {} provider (model: {})",
                    provider.name(),
                    provider.model()
                );

                match provider.health_check().await {
                    Ok(true) => {}
                    Ok(false) => warn!(
                        "{} health check failed; generation requests may fail",
                        provider.name()
                    ),
                    Err(e) => warn!("{} health check errored: {}", provider.name(), e),
                }

                Ok::<_, DocError>(provider)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::stub::StubProvider;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_initializes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let invoker = GenerationInvoker::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubProvider::new()) as SharedProvider)
        });

        assert!(!invoker.is_ready());
        invoker.ensure_ready().await.unwrap();
        invoker.ensure_ready().await.unwrap();
        invoker.generate("export enum A { X }", "t").await.unwrap();

        assert!(invoker.is_ready());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_lazily_initializes() {
        let stub = Arc::new(StubProvider::new());
        let invoker = GenerationInvoker::with_provider(stub.clone());

        let text = invoker.generate("export enum A { X }", "Enum template").await.unwrap();

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("Enum template"));
        assert!(prompts[0].contains("export enum A { X }"));
        assert_eq!(text, StubProvider::render(&prompts[0]));
    }

    #[tokio::test]
    async fn test_factory_error_propagates() {
        let invoker =
            GenerationInvoker::new(|| Err(DocError::Config("no backend".to_string())));

        assert!(matches!(
            invoker.ensure_ready().await,
            Err(DocError::Config(_))
        ));
        assert!(!invoker.is_ready());
        assert!(invoker.generate("x", "y").await.is_err());
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let invoker = GenerationInvoker::with_provider(Arc::new(StubProvider::failing_on("Broken")));
        let result = invoker.generate("export class Broken {}", "t").await;
        assert!(matches!(result, Err(DocError::LlmApi(_))));
    }
}
