use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weavedoc::cli::commands::run::{RunOptions, run_with_options};

#[derive(Parser)]
#[command(name = "weavedoc")]
#[command(
    version,
    about = "Generates Markdown documentation for Angular/TypeScript declarations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tool configuration file (replaces .weavedoc.toml)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one document per declaration in the project
    Run {
        #[arg(long, short, help = "Project configuration (default: tsconfig.json)")]
        project: Option<PathBuf>,
        #[arg(long, short, help = "Output directory (default: ./docs)")]
        output: Option<PathBuf>,
        #[arg(long, short, help = "Template directory")]
        templates: Option<PathBuf>,
        #[arg(long, help = "LLM provider (tgi, ollama, openai)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
        #[arg(long = "dry-run", help = "List jobs without generating")]
        dry_run: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mweavedoc encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Run {
            project,
            output,
            templates,
            provider,
            model,
            dry_run,
        } => {
            run_with_options(RunOptions {
                config: cli.config,
                project,
                output,
                templates,
                provider,
                model,
                dry_run,
            })?;
        }
    }

    Ok(())
}
