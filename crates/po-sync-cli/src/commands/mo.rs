//! Mo command compiling translation files into binary catalogs.
//!
//! The first language that fails to compile stops the run; catalogs compiled
//! before it are left in place.

use crate::commands::LanguageArgs;
use crate::core::{CatalogLayout, CliError, EmptyCatalogError};
use crate::tools::Msgfmt;
use crate::utils::ui;
use clap::Parser;
use fs_err as fs;
use po_sync_toml::{Language, PoSyncConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the mo command.
#[derive(Debug, Parser)]
pub struct MoArgs {
    /// Locale root containing `<lang>/LC_MESSAGES/<catalog>.po`.
    #[arg(long, default_value = ".")]
    pub locale_dir: PathBuf,

    #[command(flatten)]
    pub languages: LanguageArgs,
}

/// Run the mo command.
pub fn run_mo(args: MoArgs, config: &PoSyncConfig) -> Result<(), CliError> {
    let languages = config.select_languages(&args.languages.languages)?;
    let layout = CatalogLayout::new(std::path::absolute(&args.locale_dir)?, &config.catalog);
    let msgfmt = Msgfmt::new(&config.msgfmt);

    ui::print_header("Compiling message catalogs");

    for language in &languages {
        let po = layout.po_path(language);
        let mo = layout.mo_path(language);

        remove_stale_catalog(&mo)?;

        let start = Instant::now();
        let output = msgfmt.compile(&po, &mo, layout.root())?;
        ensure_catalog_written(language, &mo)?;

        ui::print_compiled(language.code(), &output.stderr, start.elapsed());
    }

    ui::print_compile_summary(languages.len());
    Ok(())
}

/// Remove a catalog left by an earlier build, so only fresh output counts.
fn remove_stale_catalog(mo: &Path) -> Result<(), CliError> {
    match fs::remove_file(mo) {
        Ok(()) => {
            tracing::debug!(path = %mo.display(), "removed previous catalog");
            Ok(())
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn ensure_catalog_written(language: &Language, mo: &Path) -> Result<(), CliError> {
    match fs::metadata(mo) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        _ => Err(EmptyCatalogError {
            language: language.code().to_string(),
            path: mo.to_path_buf(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_catalog_written() {
        let temp = tempfile::tempdir().unwrap();
        let de = Language::parse("de").unwrap();
        let mo = temp.path().join("multisite.mo");

        assert!(matches!(
            ensure_catalog_written(&de, &mo),
            Err(CliError::EmptyCatalog(_))
        ));

        std::fs::write(&mo, b"").unwrap();
        assert!(matches!(
            ensure_catalog_written(&de, &mo),
            Err(CliError::EmptyCatalog(_))
        ));

        std::fs::write(&mo, b"\xde\x12\x04\x95").unwrap();
        assert!(ensure_catalog_written(&de, &mo).is_ok());
    }

    #[test]
    fn test_remove_stale_catalog() {
        let temp = tempfile::tempdir().unwrap();
        let mo = temp.path().join("multisite.mo");

        remove_stale_catalog(&mo).unwrap();

        std::fs::write(&mo, b"stale").unwrap();
        remove_stale_catalog(&mo).unwrap();
        assert!(!mo.exists());
    }
}
