//! Update-pos command copying checked translations into the primary repository.
//!
//! Every language is checked before the run can fail:
//! - a file that passes the format check is cleaned and copied
//! - a file that fails has the checker's stderr appended to the log and is not copied
//! - a non-empty log after the loop fails the run before anything is committed

use crate::commands::{LanguageArgs, RepoArgs, commit_if_changed};
use crate::core::{
    CatalogLayout, CliError, CommitOutcome, CopyResult, InvalidTranslationError, ValidationOutcome,
    ValidationReport,
};
use crate::tools::{Git, Msgfmt};
use crate::utils::{copy_cleaned, ui};
use anyhow::Context as _;
use clap::Parser;
use fs_err as fs;
use po_sync_toml::{Language, PoSyncConfig};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Arguments for the update-pos command.
#[derive(Debug, Parser)]
pub struct UpdatePosArgs {
    #[command(flatten)]
    pub repos: RepoArgs,

    /// Commit message for translation updates.
    #[arg(long, env = "PO_COMMIT_MSG")]
    pub commit_message: String,

    /// Log file collecting the output of failed format checks.
    #[arg(long, env = "MSGFMT_LOG")]
    pub log_file: PathBuf,

    #[command(flatten)]
    pub languages: LanguageArgs,
}

/// Run the update-pos command.
pub fn run_update_pos(args: UpdatePosArgs, config: &PoSyncConfig) -> Result<CommitOutcome, CliError> {
    let languages = config.select_languages(&args.languages.languages)?;
    let repos = args.repos.resolve()?;

    ui::print_header("Updating translation files");
    repos.refresh(config)?;

    let source = CatalogLayout::new(&repos.localize_repo, &config.catalog);
    let target = CatalogLayout::new(config.locale_dir_in(&repos.repo), &config.catalog);
    let mut log = ValidationLog::create(&args.log_file)?;
    let msgfmt = Msgfmt::new(&config.msgfmt);

    let mut issues = Vec::new();
    for language in &languages {
        let po = source.po_path(language);

        match msgfmt.check(&po, source.root())? {
            ValidationOutcome::Valid => {
                let copied = copy_language(language, &po, &target, config)?;
                ui::print_copied(
                    &copied.language,
                    &copied.destination,
                    copied.stripped_lines,
                    copied.changed,
                );
            },
            ValidationOutcome::Invalid { stderr } => {
                ui::print_invalid(language.code(), &po);
                log.append(language, &po, &stderr)?;
                issues.push(InvalidTranslationError {
                    language: language.code().to_string(),
                    path: po,
                    help: stderr.trim_end().to_string(),
                });
            },
        }
    }

    if log.has_errors()? || !issues.is_empty() {
        ui::print_validation_failed(issues.len(), log.path());
        return Err(ValidationReport {
            error_count: issues.len(),
            log: log.path().to_path_buf(),
            issues,
        }
        .into());
    }

    let git = Git::new(&config.git, &repos.repo);
    commit_if_changed(&git, &args.commit_message, repos.dry_run)
}

fn copy_language(
    language: &Language,
    po: &Path,
    target: &CatalogLayout,
    config: &PoSyncConfig,
) -> Result<CopyResult, CliError> {
    let destination = target.po_path(language);
    let cleaned = copy_cleaned(po, &destination, &config.strip_prefixes)?;

    Ok(CopyResult {
        language: language.code().to_string(),
        destination,
        stripped_lines: cleaned.stripped_lines,
        changed: cleaned.changed,
    })
}

/// The validation log, truncated at the start of each run.
struct ValidationLog {
    path: PathBuf,
}

impl ValidationLog {
    fn create(path: &Path) -> Result<Self, CliError> {
        fs::write(path, "").with_context(|| format!("Failed to reset {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn append(&mut self, language: &Language, po: &Path, stderr: &str) -> Result<(), CliError> {
        let mut file = fs::OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "## {}: {}", language.code(), po.display())?;
        file.write_all(stderr.as_bytes())?;
        if !stderr.ends_with('\n') {
            writeln!(file)?;
        }
        Ok(())
    }

    fn has_errors(&self) -> Result<bool, CliError> {
        Ok(fs::metadata(&self.path)?.len() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_log_truncates_and_appends() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("msgfmt.log");
        std::fs::write(&path, "stale output from the previous run\n").unwrap();

        let mut log = ValidationLog::create(&path).unwrap();
        assert!(!log.has_errors().unwrap());

        let fr = Language::parse("fr").unwrap();
        log.append(&fr, Path::new("fr/LC_MESSAGES/multisite.po"), "line 3: syntax error")
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "## fr: fr/LC_MESSAGES/multisite.po\nline 3: syntax error\n"
        );
        assert!(log.has_errors().unwrap());
    }
}
