use console::style;
use std::path::Path;

use crate::types::Job;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    /// `[n] category  Name  (source)`
    pub fn job_line(&self, index: usize, job: &Job) {
        println!(
            "{} {:<12} {}  {}",
            style(format!("[{}]", index + 1)).dim(),
            style(job.category).cyan(),
            style(&job.declaration_name).bold(),
            style(job.source_path.display()).dim()
        );
    }

    /// `category  Name  →  path`, with a marker for missing templates
    pub fn plan_line(&self, job: &Job, has_template: bool) {
        let marker = if has_template {
            String::new()
        } else {
            format!("  {}", style("(no template)").yellow())
        };
        println!(
            "{:<12} {}  →  {}{}",
            style(job.category).cyan(),
            style(&job.declaration_name).bold(),
            job.output_path().display(),
            marker
        );
    }

    pub fn written(&self, path: &Path) {
        self.success(&format!("wrote {}", path.display()));
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
