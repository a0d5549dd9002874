use po_sync_toml::Language;
use std::path::{Path, PathBuf};

/// Directory under a language holding its catalogs.
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// Resolves catalog paths below a locale root.
///
/// Expected structure: `{root}/{language}/LC_MESSAGES/{catalog}.po`, with the
/// template at `{root}/{catalog}.pot`.
#[derive(Clone, Debug)]
pub struct CatalogLayout {
    root: PathBuf,
    catalog: String,
}

impl CatalogLayout {
    pub fn new(root: impl Into<PathBuf>, catalog: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            catalog: catalog.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn messages_dir(&self, language: &Language) -> PathBuf {
        self.root.join(language.code()).join(MESSAGES_DIR)
    }

    /// The editable translation file for a language.
    pub fn po_path(&self, language: &Language) -> PathBuf {
        self.messages_dir(language)
            .join(format!("{}.po", self.catalog))
    }

    /// The compiled catalog, written next to the translation file.
    pub fn mo_path(&self, language: &Language) -> PathBuf {
        self.messages_dir(language)
            .join(format!("{}.mo", self.catalog))
    }

    /// The language-independent template.
    pub fn pot_path(&self) -> PathBuf {
        self.root.join(format!("{}.pot", self.catalog))
    }
}

/// Result of running the format check on one translation file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid {
        /// What the checker wrote to stderr.
        stderr: String,
    },
}

/// A cleaned translation file written into the primary repository.
#[derive(Clone, Debug)]
pub struct CopyResult {
    /// The language of the file.
    pub language: String,
    /// Where the cleaned file was written.
    pub destination: PathBuf,
    /// Number of marker lines removed.
    pub stripped_lines: usize,
    /// Whether the destination content changed.
    pub changed: bool,
}

/// What happened at the end of a sync operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created and pushed.
    Pushed,
    /// The working tree had no diff.
    Unchanged,
    /// Changes exist but the run was a dry run. Contains `git diff --stat`.
    DryRun { stat: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_layout_paths() {
        let layout = CatalogLayout::new("/repo/locale", "multisite");
        let pt = Language::parse("pt_PT").unwrap();

        assert_eq!(
            layout.po_path(&pt),
            PathBuf::from("/repo/locale/pt_PT/LC_MESSAGES/multisite.po")
        );
        assert_eq!(
            layout.mo_path(&pt),
            PathBuf::from("/repo/locale/pt_PT/LC_MESSAGES/multisite.mo")
        );
        assert_eq!(layout.pot_path(), PathBuf::from("/repo/locale/multisite.pot"));
    }
}
