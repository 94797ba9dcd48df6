//! Core library for the `specmig` test-suite migration tool.
//!
//! `specmig` rewrites a fixed suite of NestJS e2e spec files from direct
//! `Test.createTestingModule` bootstrapping to the shared `E2ETestModule`
//! helper. The transform is an ordered list of regex-based rewrite rules
//! applied to each file's full text; files that already carry the helper
//! import are left untouched, so re-running is a no-op.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module containing shared constants, the default file suite, and the
/// lazily-built regex patterns used by the rewrite rules.
pub mod constants;

/// Module defining the entry point shared by all binaries.
pub mod entry_point;

/// Module containing the migration driver.
/// This walks the plan, runs the per-file state machine, and writes results.
pub mod migrate;

/// Module for styled CLI output (per-file outcome lines and the summary).
pub mod output;

/// Module containing the rewrite engine and the ordered migration rules.
pub mod rewrite;

/// Module containing test fixture builders.
/// This helps in writing tests for the rules and the driver.
pub mod test_utils;
