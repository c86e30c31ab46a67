use crate::error::{BumpError, Result};
use crate::ops::{BumpOptions, DependencyTarget, FileReport, RuleSet};
use crate::ops::{bump_manifest, discover_manifests, package_name};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(verbatim_doc_comment)]
pub struct BumpArgs {
    /// Directory containing one subdirectory per package
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Value written to every `"Version": "...",` field
    #[arg(long = "version", value_name = "VERSION", default_value = "5.0")]
    pub target_version: String,

    /// Value written to every `"MinimumApiVersion": "...",` field
    #[arg(long, value_name = "VERSION", default_value = "3.12.0")]
    pub api_version: String,

    /// UniqueID of a dependency whose MinimumVersion should be bumped
    ///
    /// Examples:
    ///   --dependency bcmpinc.StardewHack --dependency-version 5.1
    #[arg(
        long,
        value_name = "ID",
        requires = "dependency_version",
        verbatim_doc_comment
    )]
    pub dependency: Option<String>,

    /// Value written to the dependency's MinimumVersion field
    #[arg(long, value_name = "VERSION", requires = "dependency")]
    pub dependency_version: Option<String>,

    /// Show what would change without writing any manifest
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Continue with the remaining manifests when one cannot be read or written
    #[arg(long)]
    pub keep_going: bool,
}

impl BumpArgs {
    pub fn options(&self) -> BumpOptions {
        let dependency = match (&self.dependency, &self.dependency_version) {
            (Some(unique_id), Some(minimum_version)) => Some(DependencyTarget {
                unique_id: unique_id.clone(),
                minimum_version: minimum_version.clone(),
            }),
            _ => None,
        };

        BumpOptions {
            version: self.target_version.clone(),
            api_version: self.api_version.clone(),
            dependency,
            dry_run: self.dry_run,
            keep_going: self.keep_going,
        }
    }
}

pub fn execute(args: BumpArgs) -> Result<()> {
    let options = args.options();
    let rules = RuleSet::new(&options)?;

    let run = bump_all(&args.root, &rules, &options)?;
    print_summary(&run, options.dry_run);

    if run.failed > 0 {
        return Err(BumpError::Failed(run.failed));
    }

    Ok(())
}

/// Result of bumping every discovered manifest.
#[derive(Debug, Default)]
pub struct BumpRun {
    pub reports: Vec<FileReport>,
    /// Manifests skipped after an error under `--keep-going`.
    pub failed: usize,
}

/// Bumps every manifest under `root`, printing one line per package.
///
/// Stops at the first failure unless `options.keep_going` is set, in which
/// case failures are reported and counted.
pub fn bump_all(root: &Path, rules: &RuleSet, options: &BumpOptions) -> Result<BumpRun> {
    let manifests = discover_manifests(root);
    let mut reports = Vec::with_capacity(manifests.len());
    let mut failed = 0;

    for path in &manifests {
        println!("{} {}", "Bumping".green().bold(), package_name(path));

        match bump_manifest(path, rules, options.dry_run) {
            Ok(report) => reports.push(report),
            Err(e) if options.keep_going => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(BumpRun { reports, failed })
}

fn print_summary(run: &BumpRun, dry_run: bool) {
    let reports = &run.reports;
    if reports.is_empty() && run.failed == 0 {
        println!("{}", "No manifest.json files found".yellow());
        return;
    }

    let changed = reports.iter().filter(|r| r.changed).count();
    let unchanged = reports.len() - changed;

    if dry_run {
        for report in reports.iter().filter(|r| r.changed) {
            println!(
                "  {} {} ({})",
                "Would update:".cyan(),
                report.package,
                report.path.display()
            );
        }
        println!(
            "\n{} {} manifest(s) would change",
            "Dry run:".yellow().bold(),
            changed
        );
    } else {
        println!("{} {} manifest(s)", "✓ Updated".green().bold(), changed);
    }

    if unchanged > 0 {
        println!("  {} already up to date", unchanged.to_string().dimmed());
    }

    if run.failed > 0 {
        println!("  {} failed", run.failed.to_string().red());
    }
}
