//! Console Progress
//!
//! Renders pipeline progress as one start line and one completion line per
//! job.

use super::ui::Output;
use crate::wiki::{ProgressEvent, ProgressSink};

pub struct ConsoleRenderer {
    output: Output,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            output: Output::new(),
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleRenderer {
    fn report(&self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::Started { index, job } => self.output.job_line(index, job),
            ProgressEvent::Completed { path, .. } => self.output.written(path),
            ProgressEvent::Skipped { job, reason, .. } => self
                .output
                .warning(&format!("skipped {}: {}", job.declaration_name, reason)),
        }
    }
}
