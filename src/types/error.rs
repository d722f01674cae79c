//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Classes
//!
//! - **Fatal/config**: missing project file, empty `include`, bad patterns.
//!   The run stops before any job executes.
//! - **Per-job**: a template missing for a resolved category. The job is
//!   logged and skipped; traversal continues.
//! - **Propagating**: provider and write failures. The run aborts, files
//!   already written stay in place.

use std::path::PathBuf;
use thiserror::Error;

use super::job::TemplateCategory;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Project configuration not found: {}", path.display())]
    ProjectNotFound { path: PathBuf },

    #[error("No include patterns in project configuration: {}", path.display())]
    EmptyInclude { path: PathBuf },

    #[error("Invalid include pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Template for '{category}' not found at {}", path.display())]
    TemplateNotFound {
        category: TemplateCategory,
        path: PathBuf,
    },

    // -------------------------------------------------------------------------
    // LLM Errors
    // -------------------------------------------------------------------------
    #[error("LLM API error: {0}")]
    LlmApi(String),
}

pub type Result<T> = std::result::Result<T, DocError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl DocError {
    /// Create a parse error for a source path
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Whether the error only affects the current job.
    ///
    /// Recoverable errors are logged and the job skipped; everything else
    /// aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| DocError::Config(format!("{}: {}", context.into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_is_recoverable() {
        let err = DocError::TemplateNotFound {
            category: TemplateCategory::Guard,
            path: PathBuf::from("templates/guard.md"),
        };
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Template for 'guard' not found at templates/guard.md"
        );
    }

    #[test]
    fn test_fatal_errors_not_recoverable() {
        assert!(
            !DocError::EmptyInclude {
                path: PathBuf::from("tsconfig.json")
            }
            .is_recoverable()
        );
        assert!(!DocError::LlmApi("boom".to_string()).is_recoverable());
        assert!(!DocError::Io(std::io::Error::other("disk full")).is_recoverable());
    }

    #[test]
    fn test_project_not_found_display() {
        let err = DocError::ProjectNotFound {
            path: PathBuf::from("missing/tsconfig.json"),
        };
        assert_eq!(
            err.to_string(),
            "Project configuration not found: missing/tsconfig.json"
        );
    }

    #[test]
    fn test_with_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("denied"));
        let err = result.with_context("Reading config").unwrap_err();
        assert_eq!(err.to_string(), "Config error: Reading config: denied");
    }
}
