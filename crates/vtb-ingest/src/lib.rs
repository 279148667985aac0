//! # vtb-ingest
//!
//! Spreadsheet ingestion for Veritab: workbook access and tabular text
//! normalization.
//!
//! The parsing library (calamine) is wrapped behind the narrow
//! [`WorkbookSource`] trait — sheet names and cell grids are the only shape
//! the rest of the system sees. Each sheet's used range is serialized to
//! RFC-4180-quoted CSV via the `csv` crate, so cell values containing the
//! field delimiter, quote characters, or newlines survive round-tripping
//! through any standard CSV parser.
//!
//! Normalization is synchronous and CPU-bound. Callers in async code should
//! wrap [`normalize_file`] in [`tokio::task::spawn_blocking`]:
//!
//! ```ignore
//! let doc = tokio::task::spawn_blocking(move || normalize_file(&file)).await??;
//! ```

pub mod error;
pub mod normalize;
pub mod workbook;

pub use error::IngestError;
pub use normalize::{normalize_file, normalize_source};
pub use workbook::{CalamineWorkbook, WorkbookSource};
