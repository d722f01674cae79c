//! Code Analyzer Module
//!
//! - Project configuration loading (tsconfig dialect)
//! - Include/exclude pattern resolution
//! - Declaration extraction with tree-sitter

pub mod jsonc;
pub mod parser;
pub mod project;
pub mod scanner;

pub use project::Project;
