use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Finds `<root>/*/manifest.json`, exactly one directory level down.
///
/// Matches like a shell glob: hidden directories are skipped, symlinked
/// package directories are followed, and unreadable entries are passed
/// over. A missing root yields no manifests.
pub fn discover_manifests(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        log::debug!("Root is not a directory: {}", root.display());
        return Vec::new();
    }

    let mut manifests = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .max_depth(Some(2))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.depth() != 2 || entry.file_name() != MANIFEST_FILE {
            continue;
        }
        if entry.file_type().is_some_and(|t| t.is_file()) || entry.path().is_file() {
            manifests.push(entry.into_path());
        }
    }

    manifests.sort();
    log::debug!(
        "Found {} manifest(s) under {}",
        manifests.len(),
        root.display()
    );
    manifests
}

/// Name of the directory containing a manifest, used for display only.
pub fn package_name(manifest: &Path) -> String {
    manifest
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
