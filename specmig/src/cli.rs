//! Command-line interface arguments.

use clap::Parser;
use std::path::PathBuf;

/// Migrate the fixed e2e spec suite to the shared `E2ETestModule` helper.
///
/// The suite's file list is built in; the only knobs are where the
/// relative paths are resolved from and how much the run reports.
#[derive(Parser, Debug)]
#[command(name = "specmig", version)]
pub struct Cli {
    /// Directory the suite's relative paths are resolved against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Show per-rule replacement counts and zero-match warnings.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output outcomes as raw JSON.
    #[arg(long)]
    pub json: bool,
}
