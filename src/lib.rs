//! weavedoc - Template-Driven Documentation for Angular/TypeScript
//!
//! Walks a TypeScript project, classifies each top-level declaration by its
//! Angular role, and asks a text-generation model to fill the matching
//! Markdown template, one document per declaration.
//!
//! ## Quick Start
//!
//! ```ignore
//! use weavedoc::{DocPipeline, GenerationInvoker, NoProgress, Project, TemplateStore};
//!
//! let project = Project::load(Path::new("tsconfig.json"))?;
//! let invoker = GenerationInvoker::from_config(ProviderConfig::default());
//! let pipeline = DocPipeline::new(&project, "docs", TemplateStore::locate(None), &invoker);
//! let stats = pipeline.run(&NoProgress).await?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: project loading, glob resolution, declaration extraction
//! - [`wiki`]: classification, job stream, templates, output
//! - [`ai`]: text-generation providers and the generation invoker
//! - [`config`]: layered tool configuration

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod types;
pub mod wiki;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use types::{Declaration, DeclarationKind, DocError, Job, Result, TemplateCategory};

pub use ai::{GenerationInvoker, LlmProvider, ProviderConfig, create_provider};
pub use analyzer::Project;
pub use analyzer::parser::{Language, Parser, TypeScriptParser};
pub use wiki::{DocPipeline, JobStream, NoProgress, RunStats, TemplateStore};
