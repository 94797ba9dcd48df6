//! Migration driver: walks the plan, applies the rule pipeline, writes back.
//!
//! Per file this is a two-state machine: {not yet migrated} -> {migrated},
//! guarded by the migration marker. A missing file and an already-migrated
//! file are reported skips, never errors, so a run always visits the whole
//! plan and re-running is idempotent.

use crate::constants::{DEFAULT_SUITE_FILES, MIGRATION_MARKER};
use crate::output;
use crate::rewrite::{apply_rules, RuleContext, RuleOutcome};

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for a migration run.
#[derive(Debug, Default, Clone)]
pub struct MigrationOptions {
    /// Show per-rule replacement counts and zero-match warnings.
    pub verbose: bool,
    /// Emit outcomes as raw JSON instead of styled text.
    pub json: bool,
}

/// The fixed set of files a run operates on.
///
/// Paths are relative to the root and processed in list order. The list is
/// static configuration, not discovered at runtime.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    root: PathBuf,
    files: Vec<String>,
}

impl MigrationPlan {
    /// Create a plan over an explicit file list.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    /// Create the default eight-file e2e suite plan.
    #[must_use]
    pub fn default_suite(root: impl Into<PathBuf>) -> Self {
        Self::new(
            root,
            DEFAULT_SUITE_FILES.iter().map(|&f| f.to_owned()).collect(),
        )
    }

    /// Root directory the relative paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The ordered relative file paths.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// Terminal status of one file after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatus {
    /// The path did not resolve to an existing file.
    NotFound,
    /// The file already contained the migration marker; nothing written.
    AlreadyMigrated,
    /// The file was rewritten in place.
    Updated,
}

/// Per-file result of a migration run.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Relative path of the file.
    pub file: String,
    /// Terminal status.
    pub status: MigrationStatus,
    /// One outcome per rule, in rule order. Empty for skipped files.
    pub rules: Vec<RuleOutcome>,
}

/// Runs the migration over every file in the plan, in order.
///
/// Reports one line per file plus a final summary on `writer` (or the full
/// outcome list as JSON when requested) and returns the outcomes.
///
/// # Errors
///
/// Returns an error if reading or writing a file fails, or if the rule
/// pipeline produces invalid edits. Missing files are outcomes, not errors.
pub fn run_migration<W: Write>(
    plan: &MigrationPlan,
    options: &MigrationOptions,
    mut writer: W,
) -> Result<Vec<FileOutcome>> {
    if !options.json {
        output::print_header(&mut writer)?;
    }

    let mut outcomes = Vec::with_capacity(plan.files().len());
    for relative in plan.files() {
        let outcome = migrate_file(plan.root(), relative, options, &mut writer)?;
        outcomes.push(outcome);
    }

    if options.json {
        serde_json::to_writer_pretty(&mut writer, &outcomes)?;
        writeln!(writer)?;
    } else {
        output::print_summary(&mut writer, &outcomes)?;
    }

    Ok(outcomes)
}

fn migrate_file<W: Write>(
    root: &Path,
    relative: &str,
    options: &MigrationOptions,
    writer: &mut W,
) -> Result<FileOutcome> {
    let path = root.join(relative);

    if !path.is_file() {
        if !options.json {
            output::print_outcome(writer, relative, MigrationStatus::NotFound)?;
        }
        return Ok(FileOutcome {
            file: relative.to_owned(),
            status: MigrationStatus::NotFound,
            rules: Vec::new(),
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if content.contains(MIGRATION_MARKER) {
        if !options.json {
            output::print_outcome(writer, relative, MigrationStatus::AlreadyMigrated)?;
        }
        return Ok(FileOutcome {
            file: relative.to_owned(),
            status: MigrationStatus::AlreadyMigrated,
            rules: Vec::new(),
        });
    }

    let normalized = relative.replace('\\', "/");
    let ctx = RuleContext {
        relative_path: &normalized,
    };
    let (migrated, rules) = apply_rules(&content, &ctx)?;

    fs::write(&path, &migrated)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if !options.json {
        output::print_outcome(writer, relative, MigrationStatus::Updated)?;
        if options.verbose {
            output::print_rule_outcomes(writer, &rules)?;
        }
    }

    Ok(FileOutcome {
        file: relative.to_owned(),
        status: MigrationStatus::Updated,
        rules,
    })
}
