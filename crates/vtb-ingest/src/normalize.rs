//! Sheet-grid-to-CSV normalization and per-file document construction.

use vtb_core::{NormalizedDocument, SheetTable, SpreadsheetFile};

use crate::error::IngestError;
use crate::workbook::{CalamineWorkbook, WorkbookSource};

/// Normalize one spreadsheet file into its canonical textual document.
///
/// Purely CPU-bound; see the crate docs for async usage.
///
/// # Errors
///
/// Returns [`IngestError::Parse`] for unreadable containers,
/// [`IngestError::EmptyWorkbook`] for zero-sheet files, and sheet-level
/// errors from [`normalize_source`].
pub fn normalize_file(file: &SpreadsheetFile) -> Result<NormalizedDocument, IngestError> {
    let mut workbook = CalamineWorkbook::from_file(file)?;
    tracing::debug!(file = %file.file_name, "normalizing workbook");
    normalize_source(&file.file_name, &mut workbook)
}

/// Normalize any [`WorkbookSource`] into a document, sheets in declared order.
///
/// # Errors
///
/// Returns [`IngestError::EmptyWorkbook`] if the source declares no sheets,
/// otherwise propagates sheet read and serialization errors.
pub fn normalize_source(
    file_name: &str,
    source: &mut impl WorkbookSource,
) -> Result<NormalizedDocument, IngestError> {
    let names = source.sheet_names();
    if names.is_empty() {
        return Err(IngestError::EmptyWorkbook {
            file: file_name.to_string(),
        });
    }

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let grid = source.sheet_grid(&name)?;
        let table = grid_to_csv(&name, &grid)?;
        sheets.push(SheetTable::new(name, table));
    }

    Ok(NormalizedDocument::new(file_name, sheets))
}

/// Serialize a cell grid to CSV text without a trailing newline.
///
/// The `csv` crate applies standard RFC-4180 quoting, so embedded commas,
/// quotes, and newlines stay unambiguous with the row/field delimiters.
fn grid_to_csv(sheet_name: &str, grid: &[Vec<String>]) -> Result<String, IngestError> {
    let serialize_error = |message: String| IngestError::Serialize {
        sheet: sheet_name.to_string(),
        message,
    };

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in grid {
        writer
            .write_record(row)
            .map_err(|e| serialize_error(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| serialize_error(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| serialize_error(e.to_string()))?;

    // The writer terminates every record; the assembler owns trailing spacing.
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    Ok(text)
}
