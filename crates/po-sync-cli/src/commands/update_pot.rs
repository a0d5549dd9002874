//! Update-pot command regenerating the translation template.

use crate::commands::{RepoArgs, commit_if_changed};
use crate::core::{CatalogLayout, CliError, CommitOutcome};
use crate::tools::{Git, extract_template};
use crate::utils::ui;
use anyhow::Context as _;
use clap::Parser;
use fs_err as fs;
use po_sync_toml::PoSyncConfig;

/// Arguments for the update-pot command.
#[derive(Debug, Parser)]
pub struct UpdatePotArgs {
    #[command(flatten)]
    pub repos: RepoArgs,
}

/// Run the update-pot command.
pub fn run_update_pot(args: UpdatePotArgs, config: &PoSyncConfig) -> Result<CommitOutcome, CliError> {
    let repos = args.repos.resolve()?;

    ui::print_header("Updating translation template");
    repos.refresh(config)?;

    let pb = ui::create_spinner("Extracting translatable strings...");
    let template = extract_template(&config.extractor, &repos.repo);
    pb.finish_and_clear();
    let template = template?;

    let pot = CatalogLayout::new(&repos.localize_repo, &config.catalog).pot_path();
    let previous = if repos.dry_run {
        fs::read(&pot).ok()
    } else {
        None
    };

    fs::write(&pot, &template).with_context(|| format!("Failed to write {}", pot.display()))?;
    ui::print_template_written(&pot, template.len());

    let git = Git::new(&config.git, &repos.localize_repo);
    let outcome = commit_if_changed(&git, &config.pot_commit_message, repos.dry_run)?;

    if matches!(outcome, CommitOutcome::DryRun { .. }) {
        let old = previous.unwrap_or_default();
        ui::print_diff(
            &String::from_utf8_lossy(&old),
            &String::from_utf8_lossy(&template),
        );
    }

    Ok(outcome)
}
