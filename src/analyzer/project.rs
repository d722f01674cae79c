//! Project Configuration
//!
//! Loads a tsconfig-style project file and resolves the set of source files
//! it includes. Loaded once at startup and read-only afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::jsonc;
use super::scanner::FileScanner;
use crate::types::{DocError, Result, ResultExt};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectFile {
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    root_dir: Option<String>,
}

/// A loaded project configuration
#[derive(Debug, Clone)]
pub struct Project {
    /// Absolute path of the configuration file
    pub config_path: PathBuf,
    /// Directory patterns are resolved against
    pub root: PathBuf,
    /// Directory output paths are mirrored from
    pub source_root: PathBuf,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Project {
    /// Load and validate a project configuration file.
    ///
    /// Fails with `ProjectNotFound` when the file is absent and with
    /// `EmptyInclude` when it lists no include patterns.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DocError::ProjectNotFound {
                path: path.to_path_buf(),
            });
        }

        let config_path = path.canonicalize()?;
        let text = fs::read_to_string(&config_path)?;
        let file: ProjectFile = jsonc::from_str(&text).with_context(format!(
            "Invalid project configuration {}",
            config_path.display()
        ))?;

        if file.include.is_empty() {
            return Err(DocError::EmptyInclude {
                path: path.to_path_buf(),
            });
        }

        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let source_root = match file.compiler_options.root_dir {
            Some(dir) => normalize(&root.join(dir)),
            None => root.clone(),
        };

        info!(
            "Loaded project {} ({} include patterns)",
            config_path.display(),
            file.include.len()
        );
        debug!("Source root: {}", source_root.display());

        Ok(Self {
            config_path,
            root,
            source_root,
            include: file.include,
            exclude: file.exclude,
        })
    }

    /// All source files of the project, in traversal order.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        FileScanner::new(&self.root)
            .with_include(self.include.clone())
            .with_exclude(self.exclude.clone())
            .scan()
    }

    /// Path of `file` relative to the source root.
    ///
    /// Files outside the source root fall back to the project root, then to
    /// their bare file name.
    pub fn relative_path(&self, file: &Path) -> PathBuf {
        file.strip_prefix(&self.source_root)
            .or_else(|_| file.strip_prefix(&self.root))
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| file.file_name().map(PathBuf::from).unwrap_or_default())
    }
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
