//! Cleaning translation files before they are copied between repositories.

use anyhow::{Context as _, Result};
use fs_err as fs;
use std::path::Path;

/// Remove every line that starts with one of `prefixes`.
///
/// Works on raw bytes so files in any charset pass through. All other lines,
/// including their line endings, are kept byte for byte.
/// Returns the cleaned content and the number of removed lines.
pub fn strip_marker_lines(content: &[u8], prefixes: &[String]) -> (Vec<u8>, usize) {
    let mut cleaned = Vec::with_capacity(content.len());
    let mut removed = 0;

    for line in content.split_inclusive(|&b| b == b'\n') {
        if prefixes.iter().any(|p| line.starts_with(p.as_bytes())) {
            removed += 1;
        } else {
            cleaned.extend_from_slice(line);
        }
    }

    (cleaned, removed)
}

/// Outcome of [`copy_cleaned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanedCopy {
    pub stripped_lines: usize,
    pub changed: bool,
}

/// Write a cleaned copy of `source` to `destination`.
///
/// The source is left untouched. Missing parent directories are created.
pub fn copy_cleaned(source: &Path, destination: &Path, prefixes: &[String]) -> Result<CleanedCopy> {
    let content =
        fs::read(source).with_context(|| format!("Failed to read {}", source.display()))?;
    let (cleaned, stripped_lines) = strip_marker_lines(&content, prefixes);

    let changed = match fs::read(destination) {
        Ok(existing) => existing != cleaned,
        Err(_) => true,
    };

    if changed {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(destination, &cleaned)
            .with_context(|| format!("Failed to write {}", destination.display()))?;
    }

    Ok(CleanedCopy {
        stripped_lines,
        changed,
    })
}
