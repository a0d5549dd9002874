//! CLI error types using miette for readable diagnostics.
//!
//! Tool failures carry the command line and the captured stderr so a failing
//! `git push` or `msgfmt` is shown verbatim.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use miette::Diagnostic;
use po_sync_toml::PoSyncConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// An external program ran and exited unsuccessfully.
#[derive(Debug, Diagnostic, Error)]
#[error("`{command}` failed in {dir} ({status})")]
#[diagnostic(code(po_sync::tool::failed))]
pub struct ToolFailedError {
    /// The command line, program first.
    pub command: String,

    /// Working directory the program ran in.
    pub dir: PathBuf,

    /// Exit status as reported by the OS.
    pub status: String,

    /// Captured stderr, if any.
    #[help]
    pub stderr: Option<String>,
}

/// An external program could not be started at all.
#[derive(Debug, Diagnostic, Error)]
#[error("could not run `{program}`")]
#[diagnostic(
    code(po_sync::tool::spawn),
    help("Make sure `{program}` is installed and on PATH, or point the MSGFMT / GIT environment variables at it")
)]
pub struct ToolSpawnError {
    /// The program name or path.
    pub program: String,

    #[source]
    pub source: std::io::Error,
}

/// The catalog compiler reported success but produced no usable output.
#[derive(Debug, Diagnostic, Error)]
#[error("compiled catalog is missing or empty: {path}")]
#[diagnostic(
    code(po_sync::mo::empty),
    help("Check that the translation file for '{language}' contains messages")
)]
pub struct EmptyCatalogError {
    /// The language being compiled.
    pub language: String,

    /// The expected `.mo` path.
    pub path: PathBuf,
}

/// A translation file rejected by the format check.
#[derive(Debug, Diagnostic, Error)]
#[error("translation file for '{language}' failed the format check: {path}")]
#[diagnostic(code(po_sync::validate::invalid_po), severity(Error))]
pub struct InvalidTranslationError {
    /// The language of the file.
    pub language: String,

    /// The checked file.
    pub path: PathBuf,

    /// What the checker printed.
    #[help]
    pub help: String,
}

/// Aggregated validation report for one `update-pos` run.
#[derive(Debug, Diagnostic, Error)]
#[error("{error_count} translation file(s) failed validation, see {log}")]
#[diagnostic(
    code(po_sync::validate::report),
    help("Fix the listed files in the localization repository and run update-pos again")
)]
pub struct ValidationReport {
    /// Number of files that failed.
    pub error_count: usize,

    /// The validation log that collected the checker output.
    pub log: PathBuf,

    #[related]
    pub issues: Vec<InvalidTranslationError>,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(po_sync::config))]
    Config(#[from] PoSyncConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ToolFailed(#[from] ToolFailedError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ToolSpawn(#[from] ToolSpawnError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    EmptyCatalog(#[from] EmptyCatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ValidationFailed(#[from] ValidationReport),

    #[error("IO error: {0}")]
    #[diagnostic(code(po_sync::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(po_sync::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}
