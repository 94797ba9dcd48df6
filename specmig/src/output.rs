//! Styled console output for migration runs.

use crate::migrate::{FileOutcome, MigrationStatus};
use crate::rewrite::RuleOutcome;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::Write;

/// Print the run header.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  e2e Suite Bootstrap Migration         ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Print a single per-file outcome line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_outcome(
    writer: &mut impl Write,
    file: &str,
    status: MigrationStatus,
) -> std::io::Result<()> {
    match status {
        MigrationStatus::NotFound => {
            writeln!(writer, "  {} {}", "Not found:".yellow(), file)
        }
        MigrationStatus::AlreadyMigrated => {
            writeln!(writer, "  {} {}", "Already updated:".dimmed(), file)
        }
        MigrationStatus::Updated => {
            writeln!(writer, "  {} {}", "Updated:".green(), file)
        }
    }
}

/// Print per-rule replacement counts for one file (verbose mode).
///
/// Rules that ran but matched nothing are flagged: a zero-effect
/// substitution is the one failure mode plain text rewriting cannot
/// detect on its own.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rule_outcomes(writer: &mut impl Write, rules: &[RuleOutcome]) -> std::io::Result<()> {
    for outcome in rules {
        if !outcome.applied {
            writeln!(writer, "    {} {}", "skipped".dimmed(), outcome.rule)?;
        } else if outcome.replacements == 0 {
            writeln!(
                writer,
                "    {} {} matched nothing",
                "warn:".yellow(),
                outcome.rule
            )?;
        } else {
            writeln!(
                writer,
                "    {} {} ({} replacement{})",
                "ok".green(),
                outcome.rule,
                outcome.replacements,
                if outcome.replacements == 1 { "" } else { "s" }
            )?;
        }
    }
    Ok(())
}

/// Print the end-of-run summary table and completion line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write, outcomes: &[FileOutcome]) -> std::io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Status").add_attribute(comfy_table::Attribute::Bold),
        ]);

    for outcome in outcomes {
        let status_cell = match outcome.status {
            MigrationStatus::Updated => Cell::new("updated").fg(Color::Green),
            MigrationStatus::AlreadyMigrated => Cell::new("already up to date").fg(Color::Grey),
            MigrationStatus::NotFound => Cell::new("not found").fg(Color::Yellow),
        };
        table.add_row(vec![Cell::new(&outcome.file), status_cell]);
    }

    writeln!(writer)?;
    writeln!(writer, "{table}")?;

    let updated = outcomes
        .iter()
        .filter(|o| o.status == MigrationStatus::Updated)
        .count();
    let current = outcomes
        .iter()
        .filter(|o| o.status == MigrationStatus::AlreadyMigrated)
        .count();
    let missing = outcomes
        .iter()
        .filter(|o| o.status == MigrationStatus::NotFound)
        .count();

    writeln!(
        writer,
        "\n{} {updated} updated, {current} already up to date, {missing} missing.",
        "All files processed:".cyan().bold()
    )?;
    Ok(())
}
