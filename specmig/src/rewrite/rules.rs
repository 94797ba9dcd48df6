//! The ordered migration rules.
//!
//! Every rule is a (guard, pattern, replacement) triple. Rules run in a
//! fixed order for every file; a rule whose pattern finds nothing simply
//! contributes zero edits, and that zero count is recorded so the silent
//! no-op is observable instead of disappearing into the text.

use crate::constants::{
    APP_MODULE_IMPORT_RE, BOOTSTRAP_PLAIN_RE, BOOTSTRAP_RE, BOOTSTRAP_REPLACEMENT, DEEP_SUITE_DIR,
    HELPER_IMPORT, HELPER_IMPORT_FROM, HELPER_IMPORT_FROM_DEEP, MULTI_TESTING_IMPORT_RE,
    SOLO_TESTING_IMPORT,
};

use super::{ByteRangeRewriter, Edit, RewriteError};
use serde::Serialize;

/// Per-file context a rule can consult in its applicability guard.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Separator-normalized path of the file, relative to the run root.
    pub relative_path: &'a str,
}

/// Replacement count for one rule on one file.
///
/// Recorded even when zero, and even when the guard skipped the rule, so
/// a pattern that failed to match stays visible to callers and tests.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    /// Name of the rule.
    pub rule: &'static str,
    /// Whether the applicability guard let the rule run.
    pub applied: bool,
    /// Number of replacements the rule made.
    pub replacements: usize,
}

/// An ordered migration rule.
pub struct Rule {
    /// Stable rule name, used in reports and edit tags.
    pub name: &'static str,
    applies: fn(&RuleContext) -> bool,
    edits: fn(&str) -> Vec<Edit>,
}

fn always(_ctx: &RuleContext) -> bool {
    true
}

fn in_deep_suite(ctx: &RuleContext) -> bool {
    ctx.relative_path.contains(DEEP_SUITE_DIR)
}

/// Removes the exact `import { Test } from '@nestjs/testing';` statement.
/// The trailing newline is kept, so a blank line remains where the import
/// stood, matching the behavior the migrated suites were written against.
fn drop_solo_testing_import(content: &str) -> Vec<Edit> {
    content
        .match_indices(SOLO_TESTING_IMPORT)
        .map(|(start, matched)| Edit::delete(start, start + matched.len(), "drop-solo-testing-import"))
        .collect()
}

/// Rewrites `import { Test, <rest> } from '@nestjs/testing';` to keep only
/// `<rest>`, byte-for-byte, dropping just the `Test` symbol.
fn trim_multi_testing_import(content: &str) -> Vec<Edit> {
    MULTI_TESTING_IMPORT_RE()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let rest = caps.get(1)?.as_str();
            Some(Edit::new(
                whole.start(),
                whole.end(),
                format!("import {{{rest}}} from '@nestjs/testing';"),
                "trim-multi-testing-import",
            ))
        })
        .collect()
}

/// Inserts the helper import on a new line immediately after the
/// application-module import statement.
fn insert_helper_import(content: &str) -> Vec<Edit> {
    APP_MODULE_IMPORT_RE()
        .find_iter(content)
        .map(|m| Edit::insert(m.end(), format!("\n{HELPER_IMPORT}"), "insert-helper-import"))
        .collect()
}

/// Adds one parent-traversal segment to the helper import path. Only runs
/// for files under the deeper suite directory; it rewrites the import the
/// previous rule just inserted.
fn deepen_helper_import(content: &str) -> Vec<Edit> {
    content
        .match_indices(HELPER_IMPORT_FROM)
        .map(|(start, matched)| {
            Edit::new(
                start,
                start + matched.len(),
                HELPER_IMPORT_FROM_DEEP,
                "deepen-helper-import",
            )
        })
        .collect()
}

/// Collapses the old bootstrap block (module build, compile, application
/// creation, optional global middleware, init) into the helper call,
/// rebinding the same `app` local.
fn replace_bootstrap_block(content: &str) -> Vec<Edit> {
    BOOTSTRAP_RE()
        .find_iter(content)
        .map(|m| Edit::new(m.start(), m.end(), BOOTSTRAP_REPLACEMENT, "replace-bootstrap-block"))
        .collect()
}

/// Same as `replace_bootstrap_block` for the known variant without the
/// middleware line. Normally a no-op because the previous rule's optional
/// segment already covers it; kept so both shapes are attempted in order.
fn replace_bootstrap_plain(content: &str) -> Vec<Edit> {
    BOOTSTRAP_PLAIN_RE()
        .find_iter(content)
        .map(|m| Edit::new(m.start(), m.end(), BOOTSTRAP_REPLACEMENT, "replace-bootstrap-plain"))
        .collect()
}

static RULES: [Rule; 6] = [
    Rule {
        name: "drop-solo-testing-import",
        applies: always,
        edits: drop_solo_testing_import,
    },
    Rule {
        name: "trim-multi-testing-import",
        applies: always,
        edits: trim_multi_testing_import,
    },
    Rule {
        name: "insert-helper-import",
        applies: always,
        edits: insert_helper_import,
    },
    Rule {
        name: "deepen-helper-import",
        applies: in_deep_suite,
        edits: deepen_helper_import,
    },
    Rule {
        name: "replace-bootstrap-block",
        applies: always,
        edits: replace_bootstrap_block,
    },
    Rule {
        name: "replace-bootstrap-plain",
        applies: always,
        edits: replace_bootstrap_plain,
    },
];

/// The ordered migration rule list.
#[must_use]
pub fn migration_rules() -> &'static [Rule] {
    &RULES
}

/// Applies the full rule list to `content`, sequentially.
///
/// Each rule's edits are applied before the next rule runs, so later rules
/// see the text earlier rules produced. Returns the transformed content
/// together with one outcome per rule.
///
/// # Errors
/// Returns an error if a rule produces overlapping or out-of-bounds edits.
pub fn apply_rules(
    content: &str,
    ctx: &RuleContext,
) -> Result<(String, Vec<RuleOutcome>), RewriteError> {
    let mut current = content.to_owned();
    let mut outcomes = Vec::with_capacity(RULES.len());

    for rule in migration_rules() {
        if !(rule.applies)(ctx) {
            outcomes.push(RuleOutcome {
                rule: rule.name,
                applied: false,
                replacements: 0,
            });
            continue;
        }

        let edits = (rule.edits)(&current);
        let replacements = edits.len();
        if replacements > 0 {
            let mut rewriter = ByteRangeRewriter::new(current);
            rewriter.add_edits(edits);
            current = rewriter.apply()?;
        }

        outcomes.push(RuleOutcome {
            rule: rule.name,
            applied: true,
            replacements,
        });
    }

    Ok((current, outcomes))
}
