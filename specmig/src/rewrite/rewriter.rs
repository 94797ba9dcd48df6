//! Byte-range safe text rewriter.
//!
//! Applies edits using byte ranges so formatting outside the matched
//! regions is preserved exactly. Edits are validated for bounds and
//! overlap, then applied in reverse order to keep offsets stable.

use thiserror::Error;

/// A single edit operation, tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive).
    pub start_byte: usize,
    /// End byte offset (exclusive).
    pub end_byte: usize,
    /// Replacement content.
    pub replacement: String,
    /// Name of the rule this edit came from, used in error reports.
    pub rule: &'static str,
}

impl Edit {
    /// Create a replacement edit.
    #[must_use]
    pub fn new(
        start_byte: usize,
        end_byte: usize,
        replacement: impl Into<String>,
        rule: &'static str,
    ) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
            rule,
        }
    }

    /// Create a deletion edit.
    #[must_use]
    pub fn delete(start_byte: usize, end_byte: usize, rule: &'static str) -> Self {
        Self::new(start_byte, end_byte, "", rule)
    }

    /// Create an insertion edit (insert before position).
    #[must_use]
    pub fn insert(position: usize, content: impl Into<String>, rule: &'static str) -> Self {
        Self::new(position, position, content, rule)
    }

    /// Check if this edit overlaps with another.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// Two edits cover overlapping byte ranges.
    #[error("overlapping edits from rules '{rule_a}' and '{rule_b}'")]
    OverlappingEdits {
        /// Rule that produced the first edit.
        rule_a: &'static str,
        /// Rule that produced the second edit.
        rule_b: &'static str,
    },
    /// An edit range extends past the end of the source.
    #[error("edit from rule '{rule}' out of bounds: end byte {end_byte} > source length {source_len}")]
    OutOfBounds {
        /// Rule that produced the bad edit.
        rule: &'static str,
        /// End byte of the edit.
        end_byte: usize,
        /// Length of the source.
        source_len: usize,
    },
}

/// Safe text rewriter using byte ranges.
///
/// Edits are applied in descending start order so earlier offsets stay
/// valid while the string is modified in place.
#[derive(Debug, Clone)]
pub struct ByteRangeRewriter {
    source: String,
    edits: Vec<Edit>,
}

impl ByteRangeRewriter {
    /// Create a new rewriter for the given source.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list.
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Add multiple edits.
    pub fn add_edits(&mut self, edits: impl IntoIterator<Item = Edit>) {
        self.edits.extend(edits);
    }

    /// Check if there are any pending edits.
    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Validate edits without applying them.
    ///
    /// # Errors
    /// Returns an error if edits overlap or are out of bounds.
    pub fn validate(&self) -> Result<(), RewriteError> {
        for edit in &self.edits {
            if edit.end_byte > self.source.len() {
                return Err(RewriteError::OutOfBounds {
                    rule: edit.rule,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
        }

        for i in 0..self.edits.len() {
            for j in (i + 1)..self.edits.len() {
                if self.edits[i].overlaps(&self.edits[j]) {
                    return Err(RewriteError::OverlappingEdits {
                        rule_a: self.edits[i].rule,
                        rule_b: self.edits[j].rule,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply all edits and return the modified source.
    ///
    /// # Errors
    /// Returns an error if edits overlap or are out of bounds.
    pub fn apply(self) -> Result<String, RewriteError> {
        self.validate()?;

        let mut result = self.source;
        let mut sorted_edits = self.edits;
        sorted_edits.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

        for edit in sorted_edits {
            result.replace_range(edit.start_byte..edit.end_byte, &edit.replacement);
        }

        Ok(result)
    }
}
