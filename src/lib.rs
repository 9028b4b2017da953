//! pysummary - structural summaries of Python source files.
//!
//! pysummary parses a single Python file with tree-sitter and extracts
//! a flat summary record: imported module names, classes with their
//! methods, and top-level functions. The record is serialized as JSON
//! with a fixed key order.
//!
//! # Architecture
//!
//! Three strictly sequential components:
//!
//! - `parser`: tree-sitter parsing behind a `SourceParser` trait, plus
//!   `ParentIndex`, a read-only node-to-parent map built in one pass
//! - `analyze`: three independent classification passes over the tree
//!   (imports, classes and methods, top-level functions)
//! - `report`: JSON serialization and the missing-file diagnostic
//!
//! Scope classification is parent-based: a function counts as top-level
//! only when its immediate parent is the tree root, and a function
//! counts as a method only when it is a direct statement of a class
//! body. Only plain definition forms are classified; async and
//! decorated definitions are silently excluded.

pub mod analyze;
pub mod cli;
pub mod parser;
pub mod report;
pub mod summary;

pub use analyze::{analyze_file, summarize, AnalyzeError};
pub use parser::{for_extension, init as init_parsers, ParentIndex, ParsedSource, SourceParser};
pub use summary::{ClassSummary, FileSummary};
