//! Handle `vtb prompt` — build the backend request without dispatching it.
//!
//! Useful for inspecting exactly what the backend would receive, and for
//! verifying request construction against files in hand.

use anyhow::Context;
use vtb_core::SpreadsheetFile;
use vtb_ingest::normalize_file;
use vtb_prompt::AuditRequest;

use crate::cli::PromptArgs;

pub fn handle(args: &PromptArgs) -> anyhow::Result<()> {
    let master = SpreadsheetFile::from_path(&args.master)
        .with_context(|| format!("failed to read master file '{}'", args.master.display()))?;
    let candidate = SpreadsheetFile::from_path(&args.candidate)
        .with_context(|| format!("failed to read candidate file '{}'", args.candidate.display()))?;

    let master_doc = normalize_file(&master)?;
    let candidate_doc = normalize_file(&candidate)?;

    let request = AuditRequest::new(&master_doc, &candidate_doc);
    println!("{}", request.prompt());
    Ok(())
}
