#![doc = include_str!("../README.md")]

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "po-sync.toml";

/// Languages used when no configuration file names any.
pub const DEFAULT_LANGUAGES: &[&str] = &["de", "es", "fr", "it", "ja", "nl", "pt_PT", "ro"];

/// Environment variable overriding the catalog compiler program.
pub const MSGFMT_ENV: &str = "MSGFMT";

/// Environment variable overriding the git program.
pub const GIT_ENV: &str = "GIT";

#[derive(Debug, Error)]
pub enum PoSyncConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A language code is not a valid language identifier.
    #[error("Invalid language code '{name}'")]
    InvalidLanguage {
        /// The rejected code.
        name: String,
        /// The parsing error produced by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
    /// The same language is listed twice.
    #[error("Language '{0}' is listed more than once")]
    DuplicateLanguage(String),
    /// The language list is empty.
    #[error("No languages configured")]
    NoLanguages,
    /// A language was requested that is not part of the configured set.
    #[error("Unknown language '{name}'. Configured languages: {available}")]
    UnknownLanguage {
        /// The requested code.
        name: String,
        /// Comma-separated list of configured codes.
        available: String,
    },
    /// A required text value is empty.
    #[error("Configuration value '{0}' must not be empty")]
    EmptyValue(&'static str),
}

/// A locale code such as `de` or `pt_PT`.
///
/// The code is kept exactly as written because it names the directory holding
/// the translation file. It is validated by parsing it as a language identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    code: String,
}

impl Language {
    pub fn parse(code: &str) -> Result<Self, PoSyncConfigError> {
        code.parse::<LanguageIdentifier>()
            .map_err(|source| PoSyncConfigError::InvalidLanguage {
                name: code.to_string(),
                source,
            })?;

        Ok(Self {
            code: code.to_string(),
        })
    }

    /// The code as configured, used for directory names.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl TryFrom<String> for Language {
    type Error = PoSyncConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::parse(&value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code
    }
}

/// The configuration for `po-sync`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoSyncConfig {
    /// Languages driving every per-language loop, in processing order.
    pub languages: Vec<Language>,
    /// Catalog (gettext domain) name.
    /// Expected structure: {locale_root}/{language}/LC_MESSAGES/{catalog}.po
    pub catalog: String,
    /// Locale root inside the primary repository.
    pub locale_dir: PathBuf,
    /// Program and arguments writing the template to stdout.
    pub extractor: Vec<String>,
    /// Commit message used when the template changed.
    pub pot_commit_message: String,
    /// Line prefixes removed from translation files before they are copied.
    pub strip_prefixes: Vec<String>,
    /// Catalog compiler program.
    pub msgfmt: String,
    /// Version control program.
    pub git: String,
}

impl Default for PoSyncConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES
                .iter()
                .filter_map(|code| Language::parse(code).ok())
                .collect(),
            catalog: "multisite".to_string(),
            locale_dir: PathBuf::from("locale"),
            extractor: vec!["locale/make-pot".to_string()],
            pot_commit_message: "Updated translation template".to_string(),
            strip_prefixes: vec!["#:".to_string(), "#,".to_string()],
            msgfmt: "msgfmt".to_string(),
            git: "git".to_string(),
        }
    }
}

impl PoSyncConfig {
    /// Reads and validates the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, PoSyncConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PoSyncConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: PoSyncConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Reads `po-sync.toml` from `dir`, falling back to the defaults when absent.
    pub fn discover(dir: &Path) -> Result<Self, PoSyncConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::read_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from an explicit path, or discovers it in `dir`.
    ///
    /// Program overrides from the environment are applied afterwards.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, PoSyncConfigError> {
        let config = match explicit {
            Some(path) => Self::read_from_path(path)?,
            None => Self::discover(dir)?,
        };

        Ok(config.with_env_overrides())
    }

    /// Applies the `MSGFMT` and `GIT` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(msgfmt) = non_empty_env(MSGFMT_ENV) {
            self.msgfmt = msgfmt;
        }
        if let Some(git) = non_empty_env(GIT_ENV) {
            self.git = git;
        }
        self
    }

    pub fn validate(&self) -> Result<(), PoSyncConfigError> {
        if self.languages.is_empty() {
            return Err(PoSyncConfigError::NoLanguages);
        }

        let mut seen = HashSet::new();
        for language in &self.languages {
            if !seen.insert(language.code()) {
                return Err(PoSyncConfigError::DuplicateLanguage(
                    language.code().to_string(),
                ));
            }
        }

        if self.catalog.trim().is_empty() {
            return Err(PoSyncConfigError::EmptyValue("catalog"));
        }
        if self.extractor.first().is_none_or(|program| program.is_empty()) {
            return Err(PoSyncConfigError::EmptyValue("extractor"));
        }
        if self.pot_commit_message.trim().is_empty() {
            return Err(PoSyncConfigError::EmptyValue("pot_commit_message"));
        }
        if self.strip_prefixes.iter().any(String::is_empty) {
            return Err(PoSyncConfigError::EmptyValue("strip_prefixes"));
        }
        if self.msgfmt.is_empty() {
            return Err(PoSyncConfigError::EmptyValue("msgfmt"));
        }
        if self.git.is_empty() {
            return Err(PoSyncConfigError::EmptyValue("git"));
        }

        Ok(())
    }

    /// Returns the configured languages restricted to `requested`.
    ///
    /// An empty request selects every configured language. The configured
    /// order is kept either way.
    pub fn select_languages(&self, requested: &[String]) -> Result<Vec<Language>, PoSyncConfigError> {
        if requested.is_empty() {
            return Ok(self.languages.clone());
        }

        for code in requested {
            if !self.languages.iter().any(|l| l.code() == code) {
                return Err(PoSyncConfigError::UnknownLanguage {
                    name: code.clone(),
                    available: self
                        .languages
                        .iter()
                        .map(Language::code)
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
        }

        Ok(self
            .languages
            .iter()
            .filter(|l| requested.iter().any(|code| code == l.code()))
            .cloned()
            .collect())
    }

    /// Resolves the locale root inside the primary repository.
    pub fn locale_dir_in(&self, repo: &Path) -> PathBuf {
        repo.join(&self.locale_dir)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
