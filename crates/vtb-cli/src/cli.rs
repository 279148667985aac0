use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `vtb` binary.
#[derive(Debug, Parser)]
#[command(name = "vtb", version, about = "Veritab - AI-assisted spreadsheet discrepancy auditor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit a candidate spreadsheet against a master and report discrepancies
    Audit(AuditArgs),
    /// Build and print the backend request text without dispatching it
    Prompt(PromptArgs),
}

#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Master spreadsheet (source of truth)
    pub master: PathBuf,

    /// Candidate spreadsheet to audit against the master
    pub candidate: PathBuf,

    /// Override the configured model identifier
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Master spreadsheet (source of truth)
    pub master: PathBuf,

    /// Candidate spreadsheet to audit against the master
    pub candidate: PathBuf,
}
