//! Job Builder / Traverser
//!
//! Turns a project into a lazy stream of documentation jobs. A source file is
//! read and parsed only once every job from the previous file has been handed
//! out, so an error late in the project never costs the work already done.
//!
//! Order: project file order, then declaration group (classes, interfaces,
//! enums, type aliases, exported consts), then file order within the group,
//! then decorator order for classes with several recognized decorators.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::classifier::classify;
use crate::analyzer::Project;
use crate::analyzer::parser::create_parser_for_path;
use crate::types::{DocError, Job, Result, SourceUnit};

/// Jobs for one parsed source unit, in emission order.
pub fn build_jobs(unit: &SourceUnit, output_root: &Path) -> Vec<Job> {
    let output_dir = output_root.join(unit.relative_dir());
    let mut jobs = Vec::new();

    for declaration in &unit.declarations {
        let categories = classify(declaration);
        if categories.len() > 1 {
            debug!(
                "{} has {} recognized decorators; {} will be written {} times",
                declaration.name,
                categories.len(),
                output_dir.join(format!("{}.md", declaration.name)).display(),
                categories.len()
            );
        }

        for category in categories {
            jobs.push(Job {
                declaration_name: declaration.name.clone(),
                raw_text: declaration.raw_text.clone(),
                category,
                output_dir: output_dir.clone(),
                output_file_name: format!("{}.md", declaration.name),
                source_path: unit.path.clone(),
            });
        }
    }

    jobs
}

/// Lazy, finite, non-restartable sequence of jobs for a project.
pub struct JobStream<'a> {
    project: &'a Project,
    output_root: PathBuf,
    files: std::vec::IntoIter<PathBuf>,
    pending: VecDeque<Job>,
}

impl<'a> JobStream<'a> {
    /// Resolve the project's file list. No file is parsed yet.
    pub fn new(project: &'a Project, output_root: impl Into<PathBuf>) -> Result<Self> {
        let files = project.source_files()?;
        debug!("{} source files matched", files.len());

        Ok(Self {
            project,
            output_root: output_root.into(),
            files: files.into_iter(),
            pending: VecDeque::new(),
        })
    }

    fn load_unit(&self, path: &Path) -> Result<Option<SourceUnit>> {
        let display = path.to_string_lossy();
        let Some(parser) = create_parser_for_path(&display) else {
            return Ok(None);
        };

        let content = fs::read_to_string(path).map_err(|e| {
            DocError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let declarations = parser.parse(&display, &content)?;

        Ok(Some(SourceUnit {
            path: path.to_path_buf(),
            relative_path: self.project.relative_path(path),
            declarations,
        }))
    }
}

impl Iterator for JobStream<'_> {
    type Item = Result<Job>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(job) = self.pending.pop_front() {
                return Some(Ok(job));
            }

            let path = self.files.next()?;
            match self.load_unit(&path) {
                Ok(Some(unit)) => {
                    debug!(
                        "{}: {} declarations",
                        unit.relative_path.display(),
                        unit.declarations.len()
                    );
                    self.pending.extend(build_jobs(&unit, &self.output_root));
                }
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
