//! Regex-driven rewrite engine.
//!
//! Each migration rule turns its pattern matches into byte-range edits,
//! which are validated and applied through `ByteRangeRewriter`. Rules run
//! sequentially against the evolving content, so a later rule can rewrite
//! text an earlier rule inserted.

mod rewriter;
mod rules;

pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
pub use rules::{apply_rules, migration_rules, Rule, RuleContext, RuleOutcome};
