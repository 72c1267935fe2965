//! PII pattern table and matcher.
//!
//! The pattern table is pure data: an ordered list of `(label, pattern)`
//! pairs. Extending the label set means adding a row, not touching the
//! matcher. Patterns run independently per label, so one page may yield
//! candidates of several labels over overlapping text; cross-label
//! deduplication happens at region level, not here.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Candidate, PiiLabel};
use crate::error::{RedactError, RedactResult};

/// Built-in pattern table, in fixed evaluation order.
///
/// `phone` and `nhs_number` are structurally near-identical and will
/// double-match the same digit sequences. That is intentional: the region
/// resolver collapses the duplicate boxes, and merging the labels here
/// could change redaction coverage.
pub const PII_PATTERNS: &[(PiiLabel, &str)] = &[
    (
        PiiLabel::Email,
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
    ),
    (PiiLabel::Phone, r"\b\d{3}[-.\s]??\d{3}[-.\s]??\d{4}\b"),
    (PiiLabel::Ssn, r"\b\d{3}-\d{2}-\d{4}\b"),
    (
        // Three date shapes: "24th Jan 1982", "01/01/2000", "2000-01-01".
        PiiLabel::Dob,
        r"(?i)\b(\d{1,2}(?:st|nd|rd|th)?[-/\s]?(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*[-/\s]?\d{2,4})\b|\b(\d{1,2}[-/\s]\d{1,2}[-/\s]\d{2,4})\b|\b(\d{4}[-/\s]\d{1,2}[-/\s]\d{1,2})\b",
    ),
    (PiiLabel::NhsNumber, r"\b\d{3}[-\s]?\d{3}[-\s]?\d{4}\b"),
];

/// Built-in table compiled once for the lifetime of the process.
static BUILTIN: Lazy<PatternSet> =
    Lazy::new(|| PatternSet::compile(PII_PATTERNS).expect("built-in pattern table compiles"));

/// A compiled, ordered set of labeled PII patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    rules: Vec<(PiiLabel, Regex)>,
}

impl PatternSet {
    /// Compiles a pattern table. A malformed entry is fatal for the run.
    pub fn compile(table: &[(PiiLabel, &str)]) -> RedactResult<Self> {
        let mut rules = Vec::with_capacity(table.len());
        for (label, pattern) in table {
            let regex = Regex::new(pattern).map_err(|source| RedactError::PatternCompile {
                label: label.as_str(),
                source,
            })?;
            rules.push((*label, regex));
        }
        Ok(Self { rules })
    }

    /// Returns the built-in pattern set.
    pub fn builtin() -> &'static PatternSet {
        &BUILTIN
    }

    /// Runs every pattern over `text`, producing one candidate per
    /// non-overlapping match (leftmost-first semantics per pattern).
    ///
    /// Offsets in the returned candidates are byte offsets into `text`.
    pub fn find_candidates(&self, text: &str, page: usize) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for (label, regex) in &self.rules {
            for m in regex.find_iter(text) {
                candidates.push(Candidate::new(*label, m.as_str(), m.start(), m.end(), page));
            }
        }
        candidates
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
