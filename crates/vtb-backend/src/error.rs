//! Backend error types.

use thiserror::Error;

/// Errors from the reasoning backend call. None of these are retried here —
/// retries, if any, are the caller's responsibility.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No API key configured. A startup precondition failure.
    #[error("No Gemini API key configured — set VERITAB_GEMINI__API_KEY or [gemini].api_key")]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Transport-level failure (connection, DNS, timeout).
    #[error("Request to the audit backend failed: {0}")]
    Http(String),

    /// The API answered with a non-success status (auth, quota, oversized
    /// input).
    #[error("Audit backend returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Malformed response from the audit backend: {0}")]
    MalformedResponse(String),

    /// The API succeeded but returned no usable text.
    #[error("Empty response from the audit backend")]
    EmptyResponse,
}
