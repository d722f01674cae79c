//! Language Parser Module
//!
//! Tree-sitter based extraction of documentable declarations.
//!
//! ```rust,ignore
//! use weavedoc::analyzer::parser::create_parser_for_path;
//!
//! let parser = create_parser_for_path("src/app/hero.service.ts").unwrap();
//! let declarations = parser.parse("src/app/hero.service.ts", content)?;
//! ```

pub mod language;
pub mod traits;
pub mod typescript;

pub use language::Language;
pub use traits::{
    Parser, create_ts_parser, field_text, get_node_line, get_node_text, named_children_of_kind,
};
pub use typescript::TypeScriptParser;

use crate::types::Result;

/// Create a parser for the given language.
pub fn create_parser(language: Language) -> Result<Box<dyn Parser>> {
    Ok(Box::new(TypeScriptParser::new(language)?))
}

/// Try to create a parser for a file path.
///
/// Returns None if the path is not a parseable TypeScript source.
pub fn create_parser_for_path(path: &str) -> Option<Box<dyn Parser>> {
    Language::from_path(path).and_then(|language| create_parser(language).ok())
}
