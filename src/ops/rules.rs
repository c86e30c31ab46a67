//! Text substitution rules for manifest version fields.
//!
//! Manifests are edited as raw text rather than parsed JSON so that a bump
//! only touches the version literals and leaves formatting, key order and
//! comments exactly as they were.

use crate::error::{BumpError, Result};
use regex::{Captures, Regex};

/// Dependency whose `MinimumVersion` should be bumped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTarget {
    pub unique_id: String,
    pub minimum_version: String,
}

/// Target values for a single bump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOptions {
    pub version: String,
    pub api_version: String,
    pub dependency: Option<DependencyTarget>,
    pub dry_run: bool,
    pub keep_going: bool,
}

impl Default for BumpOptions {
    fn default() -> Self {
        Self {
            version: "5.0".to_string(),
            api_version: "3.12.0".to_string(),
            dependency: None,
            dry_run: false,
            keep_going: false,
        }
    }
}

/// A compiled substitution.
///
/// When `keep_anchor` is set, capture group 1 is written back verbatim in
/// front of the replacement.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: String,
    keep_anchor: bool,
}

impl Rule {
    /// Replaces every match in `text`, returning the new text and match count.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }

        let replaced = self.pattern.replace_all(text, |caps: &Captures| {
            if self.keep_anchor {
                format!("{}{}", &caps[1], self.replacement)
            } else {
                self.replacement.clone()
            }
        });

        (replaced.into_owned(), count)
    }
}

/// Ordered rule set built from [`BumpOptions`].
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(options: &BumpOptions) -> Result<Self> {
        validate_version(&options.version)?;
        validate_version(&options.api_version)?;

        let mut rules = vec![
            Rule {
                name: "Version",
                pattern: Regex::new(r#""Version": "[\d.]+","#)?,
                replacement: format!(r#""Version": "{}","#, options.version),
                keep_anchor: false,
            },
            Rule {
                name: "MinimumApiVersion",
                pattern: Regex::new(r#""MinimumApiVersion": "[\d.]+","#)?,
                replacement: format!(r#""MinimumApiVersion": "{}","#, options.api_version),
                keep_anchor: false,
            },
        ];

        if let Some(dep) = &options.dependency {
            validate_version(&dep.minimum_version)?;
            rules.push(Rule {
                name: "MinimumVersion",
                pattern: Regex::new(&format!(
                    r#"("UniqueID": "{}",\s*"MinimumVersion": )"[\d.]+""#,
                    regex::escape(&dep.unique_id)
                ))?,
                replacement: format!(r#""{}""#, dep.minimum_version),
                keep_anchor: true,
            });
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Applies all rules in order.
    ///
    /// Returns the final text and one match count per rule.
    pub fn apply(&self, text: &str) -> (String, Vec<usize>) {
        let mut current = text.to_string();
        let mut counts = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (next, count) = rule.apply(&current);
            current = next;
            counts.push(count);
        }

        (current, counts)
    }
}

/// Targets must match `[\d.]+` themselves, otherwise a second run would no
/// longer find the field it wrote.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(BumpError::InvalidVersion(version.to_string()));
    }
    Ok(())
}
