//! Output Writer

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

/// Writes generated documents beneath their output directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter;

impl OutputWriter {
    pub fn new() -> Self {
        Self
    }

    /// Create `dir` as needed and write `text` to `dir/file_name`,
    /// replacing any existing file. Returns the written path.
    pub async fn write(&self, dir: &Path, file_name: &str, text: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(dir).await?;
        let path = dir.join(file_name);
        fs::write(&path, text).await?;
        debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }
}
