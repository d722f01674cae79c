//! Run Command
//!
//! Loads configuration and the project, then either lists the jobs
//! (`--dry-run`) or generates every document.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::ai::GenerationInvoker;
use crate::analyzer::Project;
use crate::cli::ConsoleRenderer;
use crate::cli::ui::Output;
use crate::config::{Config, ConfigLoader};
use crate::constants::paths;
use crate::types::Result;
use crate::wiki::{DocPipeline, TemplateStore};

/// Run options (consolidated CLI parameters)
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Tool configuration file replacing `.weavedoc.toml`
    pub config: Option<PathBuf>,
    /// Project configuration (tsconfig.json)
    pub project: Option<PathBuf>,
    /// Output root
    pub output: Option<PathBuf>,
    /// Template directory
    pub templates: Option<PathBuf>,
    pub provider: Option<String>,
    pub model: Option<String>,
    /// List jobs without generating
    pub dry_run: bool,
}

impl RunOptions {
    /// CLI flags take precedence over every configuration layer.
    fn apply_to(&self, mut config: Config) -> Result<Config> {
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if let Some(templates) = &self.templates {
            config.templates.dir = Some(templates.clone());
        }
        if let Some(provider) = &self.provider {
            config.llm.provider = provider.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = Some(model.clone());
        }
        config.validate()?;
        Ok(config)
    }

    fn project_path(&self) -> PathBuf {
        self.project
            .clone()
            .unwrap_or_else(|| PathBuf::from(paths::PROJECT_FILE))
    }
}

pub fn run_with_options(options: RunOptions) -> Result<()> {
    let config = options.apply_to(ConfigLoader::load(options.config.as_deref())?)?;
    debug!("Effective configuration: {:?}", config);

    let project = Project::load(&options.project_path())?;
    let templates = TemplateStore::locate(config.templates.dir.as_deref());
    info!("Using templates from {}", templates.root().display());

    let invoker = GenerationInvoker::from_config(config.llm.to_provider_config());
    let pipeline = DocPipeline::new(&project, &config.output.dir, templates, &invoker);

    if options.dry_run {
        return dry_run(&pipeline);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(pipeline.run(&ConsoleRenderer::new()))?;

    Ok(())
}

fn dry_run(pipeline: &DocPipeline<'_>) -> Result<()> {
    let output = Output::new();
    let plan = pipeline.plan()?;

    if plan.is_empty() {
        output.info("No documentable declarations found");
        return Ok(());
    }

    output.header(&format!("{} jobs", plan.len()));
    for planned in &plan {
        output.plan_line(&planned.job, planned.has_template);
    }

    Ok(())
}
