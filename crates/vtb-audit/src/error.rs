//! Unified audit error taxonomy.
//!
//! All pipeline errors converge here, at the orchestrator. Exactly one of
//! {result, error} is populated on the session after a completed attempt.

use thiserror::Error;
use vtb_backend::BackendError;
use vtb_ingest::IngestError;

#[derive(Debug, Error)]
pub enum AuditError {
    /// A required input file is missing. No backend call is attempted.
    /// Recoverable by supplying the file.
    #[error("Missing input: {0}")]
    Validation(String),

    /// A file's bytes could not be interpreted as a valid spreadsheet.
    /// Carries the file name and the underlying parser message.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The reasoning backend call failed (network, auth, quota, malformed
    /// or empty response). Not automatically retried.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Anything not matching the above. Never silently swallowed.
    #[error("Unexpected audit failure: {0}")]
    Unknown(String),
}
