//! Python parser backed by tree-sitter.

use std::path::Path;

use tree_sitter::{Language, Parser};

use super::{ParsedSource, SourceParser};

/// Parser for Python source files.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory for registry registration.
pub fn new_parser() -> Box<dyn SourceParser> {
    Box::new(PythonParser::new())
}

impl SourceParser for PythonParser {
    fn parse(&self, path: &Path, source: &[u8]) -> anyhow::Result<ParsedSource> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse Python source: {}", path.display()))?;

        Ok(ParsedSource {
            tree,
            source: source.to_vec(),
            path: path.to_string_lossy().to_string(),
        })
    }

    fn language(&self) -> &str {
        "python"
    }
}

/// Whether a node is a plain (non-async) function definition.
///
/// The grammar keeps `async def` as a `function_definition` whose first
/// token is `async`; only the `def`-first form counts as plain. Decorated
/// definitions never reach this check as direct children, since the
/// grammar wraps them in a `decorated_definition` node.
pub fn is_plain_function(node: tree_sitter::Node) -> bool {
    node.kind() == "function_definition"
        && node.child(0).map(|c| c.kind() == "def").unwrap_or(false)
}

/// Whether a node is a plain (undecorated) class definition.
///
/// A decorated class still contains a `class_definition` node inside
/// its `decorated_definition` wrapper, so a full-tree walk would reach
/// it; the wrapper check excludes that form. This is a grammar-shape
/// test, unlike scope classification, which goes through `ParentIndex`.
pub fn is_plain_class(node: tree_sitter::Node) -> bool {
    node.kind() == "class_definition"
        && node
            .parent()
            .map(|p| p.kind() != "decorated_definition")
            .unwrap_or(true)
}
