//! Narrow typed access to spreadsheet containers.
//!
//! calamine is the only crate that knows what a workbook actually looks like
//! on disk. Everything downstream sees sheet names and string grids.

use std::io::Cursor;

use calamine::{Data, Reader, Sheets, open_workbook_auto_from_rs};
use vtb_core::SpreadsheetFile;

use crate::error::IngestError;

/// Minimal workbook interface: declared sheet names, and one cell grid per
/// sheet with every value coerced to text.
pub trait WorkbookSource {
    /// Sheet names in file-declared order.
    fn sheet_names(&self) -> Vec<String>;

    /// The used-range cell grid of one sheet, rows outermost. Rows are not
    /// padded beyond the used range.
    fn sheet_grid(&mut self, name: &str) -> Result<Vec<Vec<String>>, IngestError>;
}

/// [`WorkbookSource`] backed by calamine's auto-detecting reader
/// (xlsx, xls, xlsb, ods).
pub struct CalamineWorkbook {
    inner: Sheets<Cursor<Vec<u8>>>,
}

impl std::fmt::Debug for CalamineWorkbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalamineWorkbook").finish_non_exhaustive()
    }
}

impl CalamineWorkbook {
    /// Open a workbook from an in-memory file blob.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Parse`] with the underlying calamine message if
    /// the bytes are not a valid spreadsheet container, and
    /// [`IngestError::EmptyWorkbook`] if the container declares no sheets.
    pub fn from_file(file: &SpreadsheetFile) -> Result<Self, IngestError> {
        let inner = open_workbook_auto_from_rs(Cursor::new(file.bytes.clone())).map_err(|e| {
            IngestError::Parse {
                file: file.file_name.clone(),
                message: e.to_string(),
            }
        })?;

        let workbook = Self { inner };
        if workbook.sheet_names().is_empty() {
            return Err(IngestError::EmptyWorkbook {
                file: file.file_name.clone(),
            });
        }
        Ok(workbook)
    }
}

impl WorkbookSource for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    fn sheet_grid(&mut self, name: &str) -> Result<Vec<Vec<String>>, IngestError> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| IngestError::Sheet {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(range
            .rows()
            .map(|row| row.iter().map(cell_to_text).collect())
            .collect())
    }
}

/// Coerce one cell value to text.
///
/// Numeric and date cells are rendered from the raw values calamine extracts,
/// not from the workbook's display formats — date cells come through as Excel
/// serial numbers. See DESIGN.md for the formatting tradeoff.
fn cell_to_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cell_coercion_covers_scalar_types() {
        assert_eq!(cell_to_text(&Data::Empty), "");
        assert_eq!(cell_to_text(&Data::String("hello".into())), "hello");
        assert_eq!(cell_to_text(&Data::Float(10.0)), "10");
        assert_eq!(cell_to_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_text(&Data::Int(42)), "42");
        assert_eq!(cell_to_text(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_to_text(&Data::Bool(false)), "FALSE");
    }

    #[test]
    fn garbage_bytes_fail_with_parse_error() {
        let file = SpreadsheetFile::new("broken.xlsx", vec![0xde, 0xad, 0xbe, 0xef]);
        let error = CalamineWorkbook::from_file(&file).expect_err("should not parse");
        match error {
            IngestError::Parse { file, .. } => assert_eq!(file, "broken.xlsx"),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
