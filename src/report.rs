//! Output formatting for file summaries.
//!
//! The summary is emitted as a JSON document with a fixed key order
//! (`path`, `classes`, `functions`, `imports`; `name`, `methods` inside
//! each class), 4-space indentation, and a trailing newline. A missing
//! input file is a reported condition, not an error: the diagnostic
//! line goes to the same stream as normal output and the run still
//! counts as a success.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::analyze;
use crate::summary::FileSummary;

/// Serialize a summary to the writer as indented JSON plus a newline.
pub fn write_summary<W: Write>(mut writer: W, summary: &FileSummary) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    summary.serialize(&mut ser)?;
    buf.push(b'\n');
    writer.write_all(&buf)?;
    Ok(())
}

/// Analyze a file and write the result to the writer.
///
/// If the path does not exist, writes the not-found diagnostic and
/// returns Ok; syntax and IO failures from the analyzer propagate.
pub fn run<W: Write>(path: &Path, mut writer: W) -> anyhow::Result<()> {
    if !path.exists() {
        writeln!(writer, "Error: File '{}' not found.", path.display())?;
        return Ok(());
    }

    let summary = analyze::analyze_file(path)?;
    write_summary(writer, &summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::ClassSummary;

    fn sample_summary() -> FileSummary {
        FileSummary {
            path: "sample.py".to_string(),
            classes: vec![ClassSummary {
                name: "Widget".to_string(),
                methods: vec!["render".to_string(), "resize".to_string()],
            }],
            functions: vec!["main".to_string()],
            imports: vec![Some("os".to_string()), None],
        }
    }

    #[test]
    fn test_key_order_is_fixed() {
        let mut out = Vec::new();
        write_summary(&mut out, &sample_summary()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let path_pos = text.find("\"path\"").unwrap();
        let classes_pos = text.find("\"classes\"").unwrap();
        let functions_pos = text.find("\"functions\"").unwrap();
        let imports_pos = text.find("\"imports\"").unwrap();
        assert!(path_pos < classes_pos);
        assert!(classes_pos < functions_pos);
        assert!(functions_pos < imports_pos);

        let name_pos = text.find("\"name\"").unwrap();
        let methods_pos = text.find("\"methods\"").unwrap();
        assert!(name_pos < methods_pos);
    }

    #[test]
    fn test_four_space_indent_and_trailing_newline() {
        let mut out = Vec::new();
        write_summary(&mut out, &sample_summary()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("{\n    \"path\": \"sample.py\","));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_round_trip() {
        let summary = sample_summary();
        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();

        let parsed: FileSummary = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_missing_file_diagnostic() {
        let mut out = Vec::new();
        run(Path::new("no/such/file.py"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Error: File 'no/such/file.py' not found.\n");
    }
}
