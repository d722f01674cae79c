use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::analyzer::parser::Language;
use crate::types::{DocError, Result};

/// Directories never traversed, even when an include pattern reaches them
const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Resolves include/exclude glob patterns against a root directory.
///
/// Matches are returned in include-pattern order, lexicographically within
/// each pattern, with duplicates dropped at their first occurrence. Only
/// TypeScript sources survive the scan.
pub struct FileScanner {
    root: PathBuf,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            include: vec!["**/*".to_string()],
            exclude: vec![],
        }
    }

    pub fn with_include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let exclude = self.compile_excludes()?;
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for pattern in &self.include {
            let expanded = self.expand_pattern(pattern);
            let entries = glob::glob_with(&expanded, MATCH_OPTIONS).map_err(|e| DocError::Pattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;

            let mut matched: Vec<PathBuf> = entries
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!("Skipping unreadable path while matching '{}': {}", pattern, e);
                        None
                    }
                })
                .filter(|path| path.is_file())
                .collect();
            matched.sort();

            let before = files.len();
            for path in matched {
                if !self.is_candidate(&path, &exclude) {
                    continue;
                }
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
            debug!("Pattern '{}' contributed {} files", pattern, files.len() - before);
        }

        Ok(files)
    }

    /// Join a pattern onto the root; a wildcard-free pattern naming a
    /// directory expands to every file below it.
    ///
    /// The root is escaped so metacharacters in the project path match
    /// literally; the pattern itself is left as written.
    fn expand_pattern(&self, pattern: &str) -> String {
        if Path::new(pattern).is_absolute() {
            return pattern.to_string();
        }

        let root = Pattern::escape(&self.root.to_string_lossy());
        let root = root.trim_end_matches('/');
        let has_wildcard = pattern.contains(['*', '?', '[']);
        if !has_wildcard && self.root.join(pattern).is_dir() {
            format!("{}/{}/**/*", root, pattern.trim_end_matches('/'))
        } else {
            format!("{}/{}", root, pattern)
        }
    }

    fn compile_excludes(&self) -> Result<Vec<Pattern>> {
        let mut patterns = Vec::with_capacity(self.exclude.len() * 2);
        for raw in &self.exclude {
            let trimmed = raw.trim_end_matches('/');
            for candidate in [trimmed.to_string(), format!("{}/**", trimmed)] {
                let pattern = Pattern::new(&candidate).map_err(|e| DocError::Pattern {
                    pattern: raw.clone(),
                    message: e.to_string(),
                })?;
                patterns.push(pattern);
            }
        }
        Ok(patterns)
    }

    fn is_candidate(&self, path: &Path, exclude: &[Pattern]) -> bool {
        if Language::from_path(path).is_none() {
            return false;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let in_skipped_dir = relative.components().any(|c| match c {
            Component::Normal(name) => DEFAULT_SKIP_DIRS.iter().any(|d| name == *d),
            _ => false,
        });
        if in_skipped_dir {
            return false;
        }

        let relative_str = relative.to_string_lossy().replace('\\', "/");
        !exclude
            .iter()
            .any(|p| p.matches_with(&relative_str, MATCH_OPTIONS))
    }
}
