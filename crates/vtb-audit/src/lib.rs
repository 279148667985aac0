//! # vtb-audit
//!
//! Audit orchestration: the session state machine that drives one audit from
//! file validation through normalization, request construction, and backend
//! dispatch, and surfaces the result or a display-ready error.
//!
//! This is the convergence point for the pipeline's error types — ingestion
//! and backend errors are translated into the unified [`AuditError`] taxonomy
//! here, nowhere below performs partial recovery or silent defaulting.

mod error;
mod session;

pub use error::AuditError;
pub use session::{AuditPhase, AuditSession};
