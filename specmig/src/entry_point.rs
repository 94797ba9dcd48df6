//! Shared entry point used by the library binary and `specmig-cli`.

use crate::cli::Cli;
use crate::migrate::{run_migration, MigrationOptions, MigrationPlan};

use anyhow::Result;
use clap::Parser;

/// Runs the migration with the given CLI arguments (argv[0] excluded).
///
/// Returns the process exit code. Missing suite files are reported skips,
/// not failures, so a completed run always exits 0.
///
/// # Errors
///
/// Returns an error if file I/O fails or the rule pipeline produces
/// invalid edits.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    let cli = Cli::parse_from(std::iter::once("specmig".to_owned()).chain(args));

    let plan = MigrationPlan::default_suite(cli.root);
    let options = MigrationOptions {
        verbose: cli.verbose,
        json: cli.json,
    };

    let stdout = std::io::stdout();
    run_migration(&plan, &options, stdout.lock())?;

    Ok(0)
}
