//! Documentation Pipeline
//!
//! Driver loop over the job stream. Each job runs to completion
//! (template → generate → write) before the next one is pulled.
//!
//! Missing templates skip the job. Generation and write failures end the
//! run; documents already written stay on disk.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::jobs::JobStream;
use super::templates::TemplateStore;
use super::writer::OutputWriter;
use crate::ai::GenerationInvoker;
use crate::analyzer::Project;
use crate::types::{Job, Result, TemplateCategory};

// =============================================================================
// Progress
// =============================================================================

/// Per-job progress notifications
#[derive(Debug, Clone)]
pub enum ProgressEvent<'a> {
    Started {
        index: usize,
        job: &'a Job,
    },
    Completed {
        index: usize,
        job: &'a Job,
        path: &'a Path,
    },
    Skipped {
        index: usize,
        job: &'a Job,
        reason: String,
    },
}

pub trait ProgressSink {
    fn report(&self, event: ProgressEvent<'_>);
}

/// Discards all events
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _event: ProgressEvent<'_>) {}
}

// =============================================================================
// Pipeline
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub generated: usize,
    pub skipped: usize,
}

/// A job as listed by a dry run
#[derive(Debug, Clone)]
pub struct PlannedJob {
    pub job: Job,
    pub has_template: bool,
}

pub struct DocPipeline<'a> {
    project: &'a Project,
    output_root: PathBuf,
    templates: TemplateStore,
    invoker: &'a GenerationInvoker,
    writer: OutputWriter,
}

impl<'a> DocPipeline<'a> {
    pub fn new(
        project: &'a Project,
        output_root: impl Into<PathBuf>,
        templates: TemplateStore,
        invoker: &'a GenerationInvoker,
    ) -> Self {
        Self {
            project,
            output_root: output_root.into(),
            templates,
            invoker,
            writer: OutputWriter::new(),
        }
    }

    pub fn jobs(&self) -> Result<JobStream<'a>> {
        JobStream::new(self.project, &self.output_root)
    }

    /// Run every job in order.
    pub async fn run(&self, progress: &dyn ProgressSink) -> Result<RunStats> {
        let mut stats = RunStats::default();

        for (index, job) in self.jobs()?.enumerate() {
            let job = job?;
            progress.report(ProgressEvent::Started { index, job: &job });

            match self.execute(&job).await {
                Ok(path) => {
                    stats.generated += 1;
                    progress.report(ProgressEvent::Completed {
                        index,
                        job: &job,
                        path: &path,
                    });
                }
                Err(e) if e.is_recoverable() => {
                    warn!("Skipping {} ({}): {}", job.declaration_name, job.category, e);
                    stats.skipped += 1;
                    progress.report(ProgressEvent::Skipped {
                        index,
                        job: &job,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "{} documents generated, {} jobs skipped",
            stats.generated, stats.skipped
        );
        Ok(stats)
    }

    /// List every job without touching the model or the output directory.
    pub fn plan(&self) -> Result<Vec<PlannedJob>> {
        let available: Vec<TemplateCategory> = self.templates.available();

        self.jobs()?
            .map(|job| {
                job.map(|job| PlannedJob {
                    has_template: available.contains(&job.category),
                    job,
                })
            })
            .collect()
    }

    async fn execute(&self, job: &Job) -> Result<PathBuf> {
        let template = self.templates.resolve(job.category).await?;

        self.invoker.ensure_ready().await?;
        let text = self.invoker.generate(&job.raw_text, &template).await?;

        let path = self
            .writer
            .write(&job.output_dir, &job.output_file_name, &text)
            .await?;
        Ok(path)
    }
}
