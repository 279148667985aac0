//! The audit session state machine.

use vtb_backend::CompletionBackend;
use vtb_core::{NormalizedDocument, SpreadsheetFile};
use vtb_ingest::normalize_file;
use vtb_prompt::AuditRequest;

use crate::AuditError;

/// Lifecycle of one audit operation.
///
/// `Idle → Validating → Normalizing → Dispatching → Awaiting → Completed | Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditPhase {
    Idle,
    Validating,
    Normalizing,
    Dispatching,
    Awaiting,
    Completed,
    Failed,
}

/// One user session's audit state: the two file slots, the current phase,
/// and the observable signals (`is_running`, `result`, `error_message`).
///
/// At most one logical audit is ever in flight — `start_audit` takes
/// `&mut self`, so re-entry while a call is outstanding is impossible from
/// safe code. Each new invocation resets the prior result and error before
/// any work starts, so a stale result is never displayed alongside a new
/// error.
pub struct AuditSession<B> {
    backend: B,
    master: Option<SpreadsheetFile>,
    candidate: Option<SpreadsheetFile>,
    phase: AuditPhase,
    result: String,
    error_message: String,
}

impl<B: CompletionBackend> AuditSession<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master: None,
            candidate: None,
            phase: AuditPhase::Idle,
            result: String::new(),
            error_message: String::new(),
        }
    }

    /// Set the master (source-of-truth) file slot.
    pub fn set_master(&mut self, file: SpreadsheetFile) {
        self.master = Some(file);
    }

    /// Set the candidate (to-audit) file slot.
    pub fn set_candidate(&mut self, file: SpreadsheetFile) {
        self.candidate = Some(file);
    }

    #[must_use]
    pub fn phase(&self) -> AuditPhase {
        self.phase
    }

    /// True while an audit is between start and completion/failure.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            AuditPhase::Validating
                | AuditPhase::Normalizing
                | AuditPhase::Dispatching
                | AuditPhase::Awaiting
        )
    }

    /// The verbatim backend report, empty unless the last attempt completed.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Display-ready error message, empty unless the last attempt failed.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Run one audit to completion or failure.
    ///
    /// Both file slots must be set; otherwise the session fails immediately
    /// with a validation message and no backend call is attempted. Master and
    /// candidate are normalized concurrently on blocking threads, joined,
    /// assembled into one request, and dispatched in a single backend call.
    pub async fn start_audit(&mut self) -> AuditPhase {
        self.result.clear();
        self.error_message.clear();
        self.phase = AuditPhase::Validating;

        match self.run_pipeline().await {
            Ok(report) => {
                self.result = report;
                self.phase = AuditPhase::Completed;
            }
            Err(error) => {
                tracing::error!(%error, "audit failed");
                self.error_message = error.to_string();
                self.phase = AuditPhase::Failed;
            }
        }
        self.phase
    }

    async fn run_pipeline(&mut self) -> Result<String, AuditError> {
        let master = self
            .master
            .clone()
            .ok_or_else(|| AuditError::Validation("no master document selected".to_string()))?;
        let candidate = self
            .candidate
            .clone()
            .ok_or_else(|| AuditError::Validation("no document to audit selected".to_string()))?;

        self.phase = AuditPhase::Normalizing;
        let (master_doc, candidate_doc) = normalize_pair(master, candidate).await?;

        self.phase = AuditPhase::Dispatching;
        let request = AuditRequest::new(&master_doc, &candidate_doc);
        let prompt = request.prompt();

        self.phase = AuditPhase::Awaiting;
        let report = self.backend.complete(&prompt).await?;
        Ok(report)
    }
}

/// Normalize both files concurrently and join before request construction.
///
/// Parsing is CPU-bound, so each file gets its own blocking thread; the
/// `try_join!` is the barrier — both documents must exist before the builder
/// proceeds.
async fn normalize_pair(
    master: SpreadsheetFile,
    candidate: SpreadsheetFile,
) -> Result<(NormalizedDocument, NormalizedDocument), AuditError> {
    let master_task = tokio::task::spawn_blocking(move || normalize_file(&master));
    let candidate_task = tokio::task::spawn_blocking(move || normalize_file(&candidate));

    let (master_result, candidate_result) = tokio::try_join!(master_task, candidate_task)
        .map_err(|e| AuditError::Unknown(format!("normalization task panicked: {e}")))?;

    Ok((master_result?, candidate_result?))
}
