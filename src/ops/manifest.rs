use crate::error::{BumpError, Result};
use crate::ops::discover::package_name;
use crate::ops::rules::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of bumping a single manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub package: String,
    /// Match count per rule, in rule order.
    pub matches: Vec<usize>,
    pub changed: bool,
}

/// Reads a manifest, applies `rules`, and writes it back in place.
///
/// Unchanged content is not rewritten. In dry-run mode nothing is written.
pub fn bump_manifest(path: &Path, rules: &RuleSet, dry_run: bool) -> Result<FileReport> {
    let original = fs::read_to_string(path).map_err(|source| {
        log::error!("Failed to read file {}: {}", path.display(), source);
        BumpError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let (updated, matches) = rules.apply(&original);

    for (rule, count) in rules.rules().iter().zip(&matches) {
        if *count == 0 {
            log::warn!(
                "No \"{}\" field matched in {}, left unchanged",
                rule.name,
                path.display()
            );
        } else {
            log::debug!("{}: {} match(es) in {}", rule.name, count, path.display());
        }
    }

    let changed = updated != original;
    if !changed {
        log::debug!("File content unchanged, skipping: {}", path.display());
    } else if dry_run {
        log::info!("Would update: {}", path.display());
    } else {
        fs::write(path, &updated).map_err(|source| BumpError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Updated: {}", path.display());
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        package: package_name(path),
        matches,
        changed,
    })
}
