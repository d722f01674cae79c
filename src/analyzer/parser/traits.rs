use crate::types::{Declaration, DocError, Result};

pub trait Parser: Send + Sync {
    /// Extract the top-level declarations of one file, grouped in traversal
    /// order (classes, interfaces, enums, type aliases, exported consts) and
    /// in file order within each group.
    fn parse(&self, path: &str, content: &str) -> Result<Vec<Declaration>>;
    fn language(&self) -> super::Language;
}

/// Extract text content from a tree-sitter node.
/// Returns empty string if extraction fails (with debug logging).
#[inline]
pub fn get_node_text<'a>(node: tree_sitter::Node, content: &'a [u8]) -> &'a str {
    node.utf8_text(content).unwrap_or_else(|e| {
        tracing::debug!(
            "UTF-8 extraction failed at {}:{}-{}:{}: {}",
            node.start_position().row + 1,
            node.start_position().column,
            node.end_position().row + 1,
            node.end_position().column,
            e
        );
        ""
    })
}

/// 1-based start line of a tree-sitter node.
#[inline]
pub fn get_node_line(node: tree_sitter::Node) -> u32 {
    node.start_position().row as u32 + 1
}

/// Text of a named field, if the field is present and non-empty.
pub fn field_text<'a>(
    node: tree_sitter::Node,
    field: &str,
    content: &'a [u8],
) -> Option<&'a str> {
    node.child_by_field_name(field)
        .map(|n| get_node_text(n, content))
        .filter(|text| !text.is_empty())
}

/// Named children of `node` whose kind equals `kind`, in source order.
pub fn named_children_of_kind<'tree>(
    node: tree_sitter::Node<'tree>,
    kind: &str,
) -> Vec<tree_sitter::Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Create a tree-sitter parser for the given language.
pub fn create_ts_parser<L: Into<tree_sitter::Language>>(
    language: L,
    lang_name: &str,
) -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.into())
        .map_err(|e| DocError::Parse {
            message: format!("Failed to set {} language: {}", lang_name, e),
            path: String::new(),
        })?;
    Ok(parser)
}
