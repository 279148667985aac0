//! # vtb-core
//!
//! Core document types for Veritab.
//!
//! This crate provides the value types shared across the pipeline crates:
//! - [`SpreadsheetFile`] — an input file as an opaque blob plus its name
//! - [`SheetTable`] — one sheet rendered to delimiter-separated text
//! - [`NormalizedDocument`] — the ordered, assembled textual form of one file
//!
//! Domain-specific errors (`IngestError`, `BackendError`, `ConfigError`) live
//! in their respective crates; the unified `AuditError` is deferred to
//! `vtb-audit` where all pipeline errors converge.

pub mod document;

pub use document::{NormalizedDocument, SheetTable, SpreadsheetFile};
