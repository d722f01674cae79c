//! AI Integration Layer
//!
//! Text-generation backends and the once-initialized invoker the pipeline
//! talks to.

pub mod invoker;
pub mod prompt;
pub mod provider;

pub use invoker::GenerationInvoker;
pub use prompt::{PromptBuilder, PromptSection, documentation_prompt};
pub use provider::{
    LlmProvider, LlmResponse, ProviderConfig, ResponseMetadata, ResponseTiming, SharedProvider,
    TokenUsage, create_provider,
};
