mod discover;
mod manifest;
mod rules;

pub use discover::{MANIFEST_FILE, discover_manifests, package_name};
pub use manifest::{FileReport, bump_manifest};
pub use rules::{BumpOptions, DependencyTarget, Rule, RuleSet, validate_version};
