//! # vtb-backend
//!
//! Reasoning backend interface for Veritab.
//!
//! The backend is an opaque text-completion service: one prompt in, one full
//! text out. Non-streaming, no partial results, no retries at this layer.
//! [`CompletionBackend`] is the seam the orchestrator depends on;
//! [`GeminiBackend`] is the production implementation against the Gemini
//! `generateContent` REST endpoint.

use std::future::Future;

mod error;
mod gemini;

pub use error::BackendError;
pub use gemini::GeminiBackend;

/// A single-shot text-completion service.
///
/// The contract is at-most-once-in-flight from the caller's side: the
/// orchestrator issues exactly one outstanding call per audit and awaits it
/// to completion or failure.
pub trait CompletionBackend {
    /// Send one prompt and await the full text result.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}
