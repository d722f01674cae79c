//! Language Detection Module
//!
//! Maps source paths to the TypeScript grammar dialect used to parse them.
//!
//! ```rust,ignore
//! use weavedoc::analyzer::parser::Language;
//!
//! assert_eq!(Language::from_path("src/app/app.component.ts"), Some(Language::TypeScript));
//! assert_eq!(Language::from_path("src/typings.d.ts"), None);
//! ```

use std::fmt;
use std::path::Path;

// =============================================================================
// Language Metadata Table
// =============================================================================

struct LanguageMeta {
    display_name: &'static str,
    extensions: &'static [&'static str],
}

/// TypeScript grammar dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    Tsx,
}

impl Language {
    fn meta(&self) -> LanguageMeta {
        match self {
            Language::TypeScript => LanguageMeta {
                display_name: "TypeScript",
                extensions: &["ts", "mts", "cts"],
            },
            Language::Tsx => LanguageMeta {
                display_name: "TSX",
                extensions: &["tsx"],
            },
        }
    }

    const ALL: [Language; 2] = [Language::TypeScript, Language::Tsx];

    /// Detect the dialect of a path.
    ///
    /// Returns `None` for non-TypeScript files and for `.d.ts` declaration
    /// files, which carry no implementations worth documenting.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let file_name = path.file_name()?.to_str()?;
        if is_declaration_file(file_name) {
            return None;
        }

        let ext = path.extension()?.to_str()?.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.meta().extensions.contains(&ext.as_str()))
    }

    /// Tree-sitter grammar for this dialect
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

fn is_declaration_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    [".d.ts", ".d.mts", ".d.cts"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.meta().display_name)
    }
}
