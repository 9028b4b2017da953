//! Summary record structures.
//!
//! Field declaration order is the JSON key order, so these structs pin
//! the output format: `path`, `classes`, `functions`, `imports` at the
//! top level and `name`, `methods` inside each class.

use serde::{Deserialize, Serialize};

/// Structural summary of a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    /// The analyzed file's path, set at construction.
    pub path: String,
    /// Classes in full-tree walk order (nested classes included).
    pub classes: Vec<ClassSummary>,
    /// Names of functions declared directly at module scope.
    pub functions: Vec<String>,
    /// Imported module names in order of appearance. Duplicates are
    /// preserved; a relative import with no module name is None.
    pub imports: Vec<Option<String>>,
}

impl FileSummary {
    /// Create an empty summary for a file.
    pub fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            classes: Vec::new(),
            functions: Vec::new(),
            imports: Vec::new(),
        }
    }
}

/// A class and the methods declared directly in its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// The class name.
    pub name: String,
    /// Names of plain function definitions in the class body. Functions
    /// nested inside a method are not methods of the class.
    pub methods: Vec<String>,
}
