use crate::core::{CliError, CommitOutcome};
use crate::tools::Git;
use crate::utils::ui;
use clap::Args;
use po_sync_toml::PoSyncConfig;
use std::path::PathBuf;

/// The two clones a sync operation works on.
#[derive(Debug, Clone, Args)]
pub struct RepoArgs {
    /// Clone of the primary repository.
    #[arg(long, env = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Clone of the localization repository.
    #[arg(long, env = "LOCALIZE_REPO_PATH")]
    pub localize_repo_path: PathBuf,

    /// Do not run `git pull --rebase` before starting.
    #[arg(long)]
    pub no_pull: bool,

    /// Dry run - do everything except commit and push.
    #[arg(long)]
    pub dry_run: bool,
}

/// Restrict a per-language loop to some of the configured languages.
#[derive(Debug, Clone, Default, Args)]
pub struct LanguageArgs {
    /// Language(s) to process. Can be specified multiple times
    /// (e.g., -l de -l fr) or comma-separated (e.g., -l de,fr).
    /// Defaults to every configured language.
    #[arg(short, long = "language", value_delimiter = ',')]
    pub languages: Vec<String>,
}

/// Repository paths made absolute, so tools can run in either clone.
#[derive(Debug, Clone)]
pub struct Repos {
    pub repo: PathBuf,
    pub localize_repo: PathBuf,
    pub no_pull: bool,
    pub dry_run: bool,
}

impl RepoArgs {
    pub fn resolve(self) -> Result<Repos, CliError> {
        Ok(Repos {
            repo: std::path::absolute(&self.repo_path)?,
            localize_repo: std::path::absolute(&self.localize_repo_path)?,
            no_pull: self.no_pull,
            dry_run: self.dry_run,
        })
    }
}

impl Repos {
    /// Pull the primary clone, then the localization clone.
    pub fn refresh(&self, config: &PoSyncConfig) -> Result<(), CliError> {
        if self.no_pull {
            ui::print_skip_pull();
            return Ok(());
        }

        for repo in [&self.repo, &self.localize_repo] {
            let pb = ui::create_spinner(&format!("Pulling {}", repo.display()));
            let result = Git::new(&config.git, repo).pull_rebase();
            pb.finish_and_clear();
            result?;
            ui::print_pulled(repo);
        }

        Ok(())
    }
}

/// Commit every tracked change and push, unless `git diff` is empty.
pub fn commit_if_changed(
    git: &Git<'_>,
    message: &str,
    dry_run: bool,
) -> Result<CommitOutcome, CliError> {
    if git.diff()?.trim().is_empty() {
        tracing::debug!(repo = %git.repo().display(), "empty diff, skipping commit");
        ui::print_no_changes(git.repo());
        return Ok(CommitOutcome::Unchanged);
    }

    if dry_run {
        let stat = git.diff_stat()?;
        ui::print_would_commit(git.repo(), &stat);
        return Ok(CommitOutcome::DryRun { stat });
    }

    git.commit_all(message)?;
    git.push()?;
    ui::print_pushed(git.repo(), message);
    Ok(CommitOutcome::Pushed)
}
