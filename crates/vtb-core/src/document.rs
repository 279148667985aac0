//! Document value types for the audit pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Fixed delimiter sequence separating sheets in an assembled document.
const SHEET_DELIMITER: &str = "---";

/// An input spreadsheet file: an opaque byte blob plus its display name.
///
/// Never mutated after construction. Owned transiently by the audit session
/// for the duration of one audit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetFile {
    /// Display name used in headers and error messages (usually the base
    /// file name, not the full path).
    pub file_name: String,
    /// Raw file contents. Format validation happens in the normalizer,
    /// not here.
    pub bytes: Vec<u8>,
}

impl SpreadsheetFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk. The stored name is the path's final component.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }
}

/// One sheet of a workbook rendered to delimiter-separated text.
///
/// `table` holds the RFC-4180-quoted CSV rendering of the sheet's used range,
/// without a trailing newline (the assembler owns inter-sheet spacing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTable {
    pub name: String,
    pub table: String,
}

impl SheetTable {
    #[must_use]
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
        }
    }
}

/// The canonical textual form of one spreadsheet file: its sheets in
/// file-declared order, each rendered to tabular text.
///
/// Assembly is deterministic — identical sheet sequences always produce
/// byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    /// Name of the source file this document was normalized from.
    pub file_name: String,
    sheets: Vec<SheetTable>,
}

impl NormalizedDocument {
    #[must_use]
    pub fn new(file_name: impl Into<String>, sheets: Vec<SheetTable>) -> Self {
        Self {
            file_name: file_name.into(),
            sheets,
        }
    }

    /// Sheets in file-declared order.
    #[must_use]
    pub fn sheets(&self) -> &[SheetTable] {
        &self.sheets
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Assemble the document into one text blob.
    ///
    /// Per-sheet layout: a header line naming the sheet, a blank line, the
    /// tabular text, a blank line, then the fixed sheet delimiter.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for sheet in &self.sheets {
            out.push_str(&format!(
                "Sheet: {}\n\n{}\n\n{SHEET_DELIMITER}\n\n",
                sheet.name, sheet.table
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn assembled_text_preserves_sheet_order_and_headers() {
        let doc = NormalizedDocument::new(
            "book.xlsx",
            vec![
                SheetTable::new("Orders", "id,name\n1,A"),
                SheetTable::new("Refunds", "id\n9"),
            ],
        );

        let text = doc.to_text();
        assert_eq!(
            text,
            "Sheet: Orders\n\nid,name\n1,A\n\n---\n\n\
             Sheet: Refunds\n\nid\n9\n\n---\n\n"
        );

        let orders_at = text.find("Sheet: Orders").expect("orders header");
        let refunds_at = text.find("Sheet: Refunds").expect("refunds header");
        assert!(orders_at < refunds_at);
    }

    #[test]
    fn assembly_is_deterministic() {
        let doc = NormalizedDocument::new(
            "book.xlsx",
            vec![SheetTable::new("S1", "a,b\n1,2")],
        );
        assert_eq!(doc.to_text(), doc.clone().to_text());
    }

    #[test]
    fn spreadsheet_file_stores_name_and_bytes() {
        let file = SpreadsheetFile::new("master.xlsx", vec![1, 2, 3]);
        assert_eq!(file.file_name, "master.xlsx");
        assert_eq!(file.bytes, vec![1, 2, 3]);
    }
}
