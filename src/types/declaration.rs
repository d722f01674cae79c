//! Declaration model
//!
//! Read-only views of the top-level constructs found in one source file.

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of a top-level declaration.
///
/// Variants are declared in traversal order: within one file every class is
/// visited before any interface, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    TypeAlias,
    ExportedConst,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::TypeAlias => "type alias",
            Self::ExportedConst => "exported const",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named construct in a source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// Verbatim source text, including decorators and `export` for exported
    /// declarations.
    pub raw_text: String,
    /// Decorator names in the order written. Classes only.
    pub decorators: Vec<String>,
    /// Implemented contracts as written (`Resolve<Hero>`). Classes only.
    pub implements: Vec<String>,
    /// 1-based line of the declaration start
    pub line: u32,
}

impl Declaration {
    pub fn new(
        name: impl Into<String>,
        kind: DeclarationKind,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            raw_text: raw_text.into(),
            decorators: Vec::new(),
            implements: Vec::new(),
            line: 1,
        }
    }

    /// Build a class declaration with its decorators and implemented contracts.
    pub fn class<D, I>(
        name: impl Into<String>,
        raw_text: impl Into<String>,
        decorators: D,
        implements: I,
    ) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            decorators: decorators.into_iter().map(Into::into).collect(),
            implements: implements.into_iter().map(Into::into).collect(),
            ..Self::new(name, DeclarationKind::Class, raw_text)
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

/// One parsed source file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Path relative to the project's source root
    pub relative_path: PathBuf,
    /// Declarations grouped in traversal order
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    /// Directory of the unit relative to the source root; empty at the root.
    pub fn relative_dir(&self) -> &Path {
        self.relative_path.parent().unwrap_or(Path::new(""))
    }
}
