//! Documentation Generation
//!
//! ## Pipeline
//!
//! ```text
//! Project → JobStream → TemplateStore → GenerationInvoker → OutputWriter
//!              ↑
//!          Classifier
//! ```
//!
//! Strictly sequential: one job is generated and written before the next
//! source file is parsed.

pub mod classifier;
pub mod jobs;
pub mod pipeline;
pub mod templates;
pub mod writer;

pub use classifier::{classify, classify_class, classify_decorator};
pub use jobs::{JobStream, build_jobs};
pub use pipeline::{DocPipeline, NoProgress, PlannedJob, ProgressEvent, ProgressSink, RunStats};
pub use templates::TemplateStore;
pub use writer::OutputWriter;
