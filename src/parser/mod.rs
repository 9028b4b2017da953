//! Parsing interface for producing annotated syntax trees.
//!
//! This module provides:
//! - `SourceParser` trait: abstract "source text -> syntax tree" contract
//! - `Registry`: factory-based parser lookup by file extension
//! - `ParsedSource`: a parse tree plus the source bytes it was built from
//! - `ParentIndex`: a read-only node-id -> parent-id map for scope checks

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

pub mod python;

/// Holds a parsed tree-sitter tree and associated metadata.
///
/// The source bytes are retained because tree-sitter nodes reference
/// text by byte range rather than owning it.
pub struct ParsedSource {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source code (kept for node text extraction).
    pub source: Vec<u8>,
    /// The file path (for error reporting and the summary record).
    pub path: String,
}

impl ParsedSource {
    /// Get the root node of the parse tree.
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}

/// Parser trait for turning source text into a syntax tree.
///
/// Implementations bind to a host grammar; classification code never
/// parses text itself.
pub trait SourceParser: Send + Sync {
    /// Parse source text into a tree.
    ///
    /// Returns an error only if parsing fails completely (e.g., the
    /// grammar cannot be loaded). Ungrammatical text still yields a
    /// tree containing ERROR nodes; callers decide whether that is fatal.
    fn parse(&self, path: &Path, source: &[u8]) -> anyhow::Result<ParsedSource>;

    /// Return the language this parser handles (e.g., "python").
    fn language(&self) -> &str;
}

/// Factory function type for creating parser instances.
pub type ParserFactory = fn() -> Box<dyn SourceParser>;

lazy_static::lazy_static! {
    /// Global parser registry mapping file extensions to parser factories.
    static ref REGISTRY: RwLock<HashMap<String, ParserFactory>> = RwLock::new(HashMap::new());
}

/// Register a parser factory for a file extension (without the dot).
pub fn register(ext: &str, factory: ParserFactory) {
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(ext.to_string(), factory);
}

/// Get a parser for the given file extension.
/// Returns None if no parser is registered for the extension.
pub fn for_extension(ext: &str) -> Option<Box<dyn SourceParser>> {
    let registry = REGISTRY.read().unwrap();
    registry.get(ext).map(|factory| factory())
}

/// Return all registered file extensions.
pub fn supported_extensions() -> Vec<String> {
    let registry = REGISTRY.read().unwrap();
    registry.keys().cloned().collect()
}

/// Initialize the parser registry with all available language parsers.
/// Call this once at startup before using parsers. Idempotent.
pub fn init() {
    register("py", python::new_parser);
}

/// Parent links for every node in a tree.
///
/// tree-sitter trees are immutable, so instead of annotating nodes in
/// place the index owns a separate node-id -> parent-id map, built once
/// in a single top-down traversal and read-only afterward. Every node
/// except the root has exactly one entry.
pub struct ParentIndex {
    parents: HashMap<usize, usize>,
    root_id: usize,
}

impl ParentIndex {
    /// Build the index by visiting every node in the tree exactly once.
    pub fn build(tree: &tree_sitter::Tree) -> Self {
        let root = tree.root_node();
        let mut parents = HashMap::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                parents.insert(child.id(), node.id());
                stack.push(child);
            }
        }

        Self {
            parents,
            root_id: root.id(),
        }
    }

    /// The id of the tree root.
    pub fn root_id(&self) -> usize {
        self.root_id
    }

    /// The parent id of a node, or None for the root.
    pub fn parent_id(&self, node: tree_sitter::Node) -> Option<usize> {
        self.parents.get(&node.id()).copied()
    }

    /// Whether the node's immediate parent is the tree root.
    ///
    /// This is a strict-equality check: a node nested inside any block,
    /// however shallow, is not a root child.
    pub fn is_root_child(&self, node: tree_sitter::Node) -> bool {
        self.parent_id(node) == Some(self.root_id)
    }
}
