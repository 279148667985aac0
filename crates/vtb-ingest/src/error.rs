//! Ingestion error types.

use thiserror::Error;

/// Errors that can occur while reading or normalizing a spreadsheet file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file's bytes could not be interpreted as a spreadsheet container.
    #[error("Failed to parse '{file}': {message}")]
    Parse { file: String, message: String },

    /// The workbook parsed but declares no sheets.
    #[error("'{file}' contains no sheets")]
    EmptyWorkbook { file: String },

    /// A declared sheet could not be read.
    #[error("Failed to read sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },

    /// CSV serialization of a sheet grid failed.
    #[error("Failed to serialize sheet '{sheet}' to tabular text: {message}")]
    Serialize { sheet: String, message: String },
}
