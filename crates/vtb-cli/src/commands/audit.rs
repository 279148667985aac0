//! Handle `vtb audit`.

use anyhow::Context;
use vtb_audit::{AuditPhase, AuditSession};
use vtb_backend::GeminiBackend;
use vtb_config::VeritabConfig;
use vtb_core::SpreadsheetFile;

use crate::cli::AuditArgs;
use crate::output;
use crate::progress::Progress;

pub async fn handle(args: &AuditArgs, quiet: bool) -> anyhow::Result<()> {
    let mut config = VeritabConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(model) = &args.model {
        config.gemini.model.clone_from(model);
    }
    tracing::debug!(model = %config.gemini.model, "configuration loaded");

    // Startup precondition: the key must exist before any pipeline work.
    let backend = GeminiBackend::new(&config.gemini)?;

    let master = SpreadsheetFile::from_path(&args.master)
        .with_context(|| format!("failed to read master file '{}'", args.master.display()))?;
    let candidate = SpreadsheetFile::from_path(&args.candidate)
        .with_context(|| format!("failed to read candidate file '{}'", args.candidate.display()))?;
    tracing::debug!(
        master_bytes = master.bytes.len(),
        candidate_bytes = candidate.bytes.len(),
        "input files read"
    );

    let mut session = AuditSession::new(backend);
    session.set_master(master);
    session.set_candidate(candidate);

    let spinner = Progress::spinner("Auditing documents...", quiet);
    let phase = session.start_audit().await;
    spinner.finish_and_clear();
    tracing::debug!(?phase, "audit finished");

    match phase {
        AuditPhase::Completed => {
            output::print_report(session.result());
            Ok(())
        }
        _ => anyhow::bail!("{}", session.error_message()),
    }
}
