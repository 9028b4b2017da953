//! Classification passes over the annotated syntax tree.
//!
//! `analyze_file` reads one source file, parses it, and runs three
//! independent passes over a depth-first pre-order walk of the tree:
//! imports, classes with their methods, and top-level functions. The
//! passes write disjoint summary fields, so their relative order does
//! not affect the result.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::parser::python::{is_plain_class, is_plain_function};
use crate::parser::{self, ParentIndex, ParsedSource};
use crate::summary::{ClassSummary, FileSummary};

/// Failure kinds recognized by the analyzer.
///
/// A missing input file is not among them: the reporter checks for that
/// before analysis begins and treats it as a diagnostic, not an error.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("invalid UTF-8 in {path}: {source}")]
    Encoding {
        path: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The source text does not conform to the grammar.
    #[error("syntax error in {path}")]
    Syntax { path: String },

    /// No parser is registered for the file's extension.
    #[error("no parser registered for extension {ext:?}")]
    UnsupportedExtension { ext: String },

    /// The parser itself failed (grammar load, no tree produced).
    #[error(transparent)]
    Parser(#[from] anyhow::Error),
}

/// Analyze a single source file and extract its structural summary.
///
/// Requires `parser::init()` to have been called. Malformed source is a
/// hard error: tree-sitter recovers from ungrammatical text by emitting
/// ERROR nodes, and any such node fails the analysis.
pub fn analyze_file(path: &Path) -> Result<FileSummary, AnalyzeError> {
    let source = fs::read(path).map_err(|e| AnalyzeError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    // Node text extraction assumes valid UTF-8; reject bad encodings up
    // front rather than emitting summaries with empty names.
    std::str::from_utf8(&source).map_err(|e| AnalyzeError::Encoding {
        path: path.display().to_string(),
        source: e,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parser = parser::for_extension(ext).ok_or_else(|| AnalyzeError::UnsupportedExtension {
        ext: ext.to_string(),
    })?;

    let parsed = parser.parse(path, &source)?;
    if parsed.root().has_error() {
        return Err(AnalyzeError::Syntax {
            path: parsed.path.clone(),
        });
    }

    Ok(summarize(&parsed))
}

/// Run the three classification passes over an already-parsed file.
pub fn summarize(parsed: &ParsedSource) -> FileSummary {
    let parents = ParentIndex::build(&parsed.tree);
    let nodes = preorder(parsed.root());

    let mut summary = FileSummary::empty(&parsed.path);
    collect_imports(parsed, &nodes, &mut summary.imports);
    collect_classes(parsed, &nodes, &mut summary.classes);
    collect_functions(parsed, &nodes, &parents, &mut summary.functions);
    summary
}

/// All nodes of the tree in depth-first pre-order, which for a parse
/// tree equals source declaration order.
fn preorder(root: tree_sitter::Node) -> Vec<tree_sitter::Node> {
    let mut nodes = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        nodes.push(node);
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    nodes
}

/// Pass 1: imported module names, in order of appearance.
///
/// `import a, b` appends one entry per name; `import x as y` appends the
/// module name `x`, not the alias. `from X import ...` appends `X` once
/// per statement, or None when the statement has no module name at all
/// (`from . import y`). Leading relative-import dots are never part of
/// the recorded name, so `from .pkg import x` appends `"pkg"`. A
/// `from __future__ import ...` statement appends `"__future__"`.
/// Re-imports are not deduplicated.
fn collect_imports(parsed: &ParsedSource, nodes: &[tree_sitter::Node], out: &mut Vec<Option<String>>) {
    for node in nodes {
        match node.kind() {
            "import_statement" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    match child.kind() {
                        "dotted_name" => {
                            out.push(Some(parsed.node_text(child).to_string()));
                        }
                        "aliased_import" => {
                            if let Some(name) = child.child_by_field_name("name") {
                                out.push(Some(parsed.node_text(name).to_string()));
                            }
                        }
                        _ => {}
                    }
                }
            }
            // `from __future__ import ...` is a distinct node kind in the
            // grammar, but it is still a from-import with module __future__.
            "future_import_statement" => {
                out.push(Some("__future__".to_string()));
            }
            "import_from_statement" => {
                let module = node.child_by_field_name("module_name");
                match module {
                    Some(m) if m.kind() == "relative_import" => {
                        let mut cursor = m.walk();
                        let dotted = m
                            .named_children(&mut cursor)
                            .find(|c| c.kind() == "dotted_name");
                        out.push(dotted.map(|d| parsed.node_text(d).to_string()));
                    }
                    Some(m) => out.push(Some(parsed.node_text(m).to_string())),
                    None => out.push(None),
                }
            }
            _ => {}
        }
    }
}

/// Pass 2: class definitions with the methods declared directly in
/// their bodies.
///
/// Classes are recorded in full-tree walk order, so a class nested in
/// another class (or a function) still appears. Only direct statements
/// of the body block are scanned for methods; anything deeper belongs
/// to a narrower scope.
fn collect_classes(parsed: &ParsedSource, nodes: &[tree_sitter::Node], out: &mut Vec<ClassSummary>) {
    for node in nodes {
        if !is_plain_class(*node) {
            continue;
        }
        let Some(name) = node.child_by_field_name("name") else {
            continue;
        };

        let mut methods = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for stmt in body.named_children(&mut cursor) {
                if is_plain_function(stmt) {
                    if let Some(method_name) = stmt.child_by_field_name("name") {
                        methods.push(parsed.node_text(method_name).to_string());
                    }
                }
            }
        }

        out.push(ClassSummary {
            name: parsed.node_text(name).to_string(),
            methods,
        });
    }
}

/// Pass 3: functions whose immediate parent is the tree root.
///
/// Strict equality by design: a function defined inside an `if` block
/// at module level has the block as its parent, not the root, and is
/// excluded even though it ends up at module scope when the block runs.
fn collect_functions(
    parsed: &ParsedSource,
    nodes: &[tree_sitter::Node],
    parents: &ParentIndex,
    out: &mut Vec<String>,
) {
    for node in nodes {
        if is_plain_function(*node) && parents.is_root_child(*node) {
            if let Some(name) = node.child_by_field_name("name") {
                out.push(parsed.node_text(name).to_string());
            }
        }
    }
}
