use tracing::debug;

use super::traits::{field_text, get_node_line, get_node_text, named_children_of_kind};
use super::{Language, Parser, create_ts_parser};
use crate::types::{Declaration, DeclarationKind, DocError, Result};

/// Extracts top-level declarations from TypeScript and TSX sources.
///
/// Only statements directly under the program root are considered, optionally
/// wrapped in `export` or `export default`, and ambient `declare` statements
/// are unwrapped the same way. Declarations nested in namespaces, functions or
/// `declare global`/`declare module` blocks are not documented.
pub struct TypeScriptParser {
    language: Language,
}

impl TypeScriptParser {
    pub fn new(language: Language) -> Result<Self> {
        // Fail early if the grammar cannot be loaded
        create_ts_parser(language.grammar(), &language.to_string())?;
        Ok(Self { language })
    }
}

impl Parser for TypeScriptParser {
    fn parse(&self, path: &str, content: &str) -> Result<Vec<Declaration>> {
        let mut parser = create_ts_parser(self.language.grammar(), &self.language.to_string())
            .map_err(|e| DocError::parse(path, e.to_string()))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| DocError::parse(path, "Failed to parse TypeScript file"))?;

        let root = tree.root_node();
        if root.has_error() {
            debug!("{}: syntax errors present, extracting what parsed", path);
        }

        let bytes = content.as_bytes();
        let mut declarations = Vec::new();

        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            if statement.kind() == "export_statement" {
                if let Some(inner) = statement.child_by_field_name("declaration") {
                    extract_declaration(inner, statement, true, bytes, &mut declarations);
                }
            } else {
                extract_declaration(statement, statement, false, bytes, &mut declarations);
            }
        }

        // Stable: file order is preserved within each kind
        declarations.sort_by_key(|d| d.kind);
        Ok(declarations)
    }

    fn language(&self) -> Language {
        self.language
    }
}

/// `outer` is the top-level statement holding `node`. Its text (decorators,
/// `export` and `declare` keywords included) becomes the declaration's raw
/// text.
fn extract_declaration(
    node: tree_sitter::Node,
    outer: tree_sitter::Node,
    exported: bool,
    content: &[u8],
    out: &mut Vec<Declaration>,
) {
    if node.kind() == "ambient_declaration" {
        let mut cursor = node.walk();
        if let Some(inner) = node.named_children(&mut cursor).next() {
            extract_declaration(inner, outer, exported, content, out);
        }
        return;
    }

    let raw_text = get_node_text(outer, content);
    let line = get_node_line(outer);

    let simple = |kind: DeclarationKind| {
        field_text(node, "name", content)
            .map(|name| Declaration::new(name, kind, raw_text).at_line(line))
    };

    match node.kind() {
        "class_declaration" | "abstract_class_declaration" => {
            let Some(name) = field_text(node, "name", content) else {
                debug!("Skipping anonymous class at line {}", line);
                return;
            };
            let decorators = Some(outer)
                .filter(|outer| outer.id() != node.id())
                .into_iter()
                .chain(Some(node))
                .flat_map(|n| named_children_of_kind(n, "decorator"))
                .filter_map(|d| decorator_name(d, content))
                .map(str::to_string)
                .collect::<Vec<_>>();
            let implements = implemented_contracts(node, content);

            out.push(Declaration::class(name, raw_text, decorators, implements).at_line(line));
        }
        "interface_declaration" => out.extend(simple(DeclarationKind::Interface)),
        "enum_declaration" => out.extend(simple(DeclarationKind::Enum)),
        "type_alias_declaration" => out.extend(simple(DeclarationKind::TypeAlias)),
        "lexical_declaration" => {
            if !exported || !is_const(node) {
                return;
            }
            for declarator in named_children_of_kind(node, "variable_declarator") {
                match declarator.child_by_field_name("name") {
                    Some(name) if name.kind() == "identifier" => {
                        let name = get_node_text(name, content);
                        out.push(
                            Declaration::new(name, DeclarationKind::ExportedConst, raw_text)
                                .at_line(line),
                        );
                    }
                    _ => debug!("Skipping const binding without a simple name at line {}", line),
                }
            }
        }
        _ => {}
    }
}

/// Whether a lexical declaration uses `const` rather than `let`.
fn is_const(node: tree_sitter::Node) -> bool {
    node.child_by_field_name("kind")
        .or_else(|| node.child(0))
        .is_some_and(|keyword| keyword.kind() == "const")
}

/// Name of a decorator as written at the call site.
///
/// `@Component({...})` and `@Component` yield `Component`; a qualified
/// `@core.Component()` yields the trailing `Component`.
fn decorator_name<'a>(decorator: tree_sitter::Node, content: &'a [u8]) -> Option<&'a str> {
    let expression = decorator.named_child(0)?;
    expression_name(expression, content)
}

fn expression_name<'a>(expression: tree_sitter::Node, content: &'a [u8]) -> Option<&'a str> {
    let name = match expression.kind() {
        "identifier" => Some(get_node_text(expression, content)),
        "member_expression" => field_text(expression, "property", content),
        "call_expression" => expression_name(expression.child_by_field_name("function")?, content),
        _ => None,
    };
    name.filter(|name| !name.is_empty())
}

/// Written text of every type in the class's `implements` clause.
fn implemented_contracts(class: tree_sitter::Node, content: &[u8]) -> Vec<String> {
    named_children_of_kind(class, "class_heritage")
        .into_iter()
        .flat_map(|heritage| named_children_of_kind(heritage, "implements_clause"))
        .flat_map(|clause| {
            let mut cursor = clause.walk();
            clause
                .named_children(&mut cursor)
                .filter(|n| n.kind() != "comment")
                .map(|n| get_node_text(n, content).to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}
