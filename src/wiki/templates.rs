//! Template Store
//!
//! Maps a template category to the text of `<root>/<category>.md`. Template
//! content is opaque: it is read verbatim and handed to the generator.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::paths;
use crate::types::{DocError, Result, TemplateCategory};

#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the template directory.
    ///
    /// An explicit directory (CLI flag, then config) wins. Otherwise a
    /// `templates/` directory next to the executable is used when present,
    /// then `./templates`.
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(dir) = explicit {
            return Self::new(dir);
        }

        let beside_exe = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(paths::TEMPLATES_DIR)))
            .filter(|dir| dir.is_dir());

        match beside_exe {
            Some(dir) => Self::new(dir),
            None => Self::new(paths::TEMPLATES_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, category: TemplateCategory) -> PathBuf {
        self.root.join(category.template_file_name())
    }

    /// Template text for `category`, read on every call.
    pub async fn resolve(&self, category: TemplateCategory) -> Result<String> {
        let path = self.path_for(category);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!("Template {} loaded from {}", category, path.display());
                Ok(text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DocError::TemplateNotFound { category, path })
            }
            Err(e) => Err(DocError::Io(e)),
        }
    }

    pub fn contains(&self, category: TemplateCategory) -> bool {
        self.path_for(category).is_file()
    }

    /// Categories that currently have a template file.
    pub fn available(&self) -> Vec<TemplateCategory> {
        TemplateCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.contains(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_resolve_reads_verbatim() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pipe.md"), "# Pipe {{name}}\n\n- transform\n").unwrap();

        let store = TemplateStore::new(temp.path());
        let text = store.resolve(TemplateCategory::Pipe).await.unwrap();
        assert_eq!(text, "# Pipe {{name}}\n\n- transform\n");
    }

    #[tokio::test]
    async fn test_missing_template() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::new(temp.path());

        match store.resolve(TemplateCategory::Guard).await {
            Err(DocError::TemplateNotFound { category, path }) => {
                assert_eq!(category, TemplateCategory::Guard);
                assert_eq!(path, temp.path().join("guard.md"));
            }
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_available() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("service.md"), "s").unwrap();
        fs::write(temp.path().join("component.md"), "c").unwrap();
        fs::write(temp.path().join("notes.md"), "n").unwrap();

        let store = TemplateStore::new(temp.path());
        assert_eq!(
            store.available(),
            vec![TemplateCategory::Component, TemplateCategory::Service]
        );
    }

    #[test]
    fn test_locate_explicit() {
        let store = TemplateStore::locate(Some(Path::new("/srv/templates")));
        assert_eq!(store.root(), Path::new("/srv/templates"));
    }

    #[test]
    fn test_shipped_templates_cover_every_category() {
        let store = TemplateStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"));
        assert_eq!(store.available(), TemplateCategory::ALL.to_vec());
    }
}
