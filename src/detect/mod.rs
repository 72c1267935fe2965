//! PII detection: pattern matching, contextual disambiguation, and
//! named-entity filtering.
//!
//! Detection produces [`Candidate`] values; turning candidates into
//! on-page regions is the job of [`crate::region`] and the pipeline.

pub mod context;
pub mod entity;
pub mod patterns;

pub use context::ContextFilter;
pub use entity::{Entity, EntitySource, FileEntitySource, NameFilter};
pub use patterns::PatternSet;

/// Label attached to a detected piece of PII.
///
/// The first five labels are detected by regex; [`PiiLabel::PersonName`]
/// only ever comes from an external NER source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiiLabel {
    Email,
    Phone,
    Ssn,
    Dob,
    NhsNumber,
    PersonName,
}

impl PiiLabel {
    /// Stable lowercase name, used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ssn => "ssn",
            Self::Dob => "dob",
            Self::NhsNumber => "nhs_number",
            Self::PersonName => "person_name",
        }
    }
}

impl std::fmt::Display for PiiLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected span of text suspected to be PII, prior to region resolution.
///
/// `start` and `end` are byte offsets into the combined native+OCR text of
/// the page the candidate was found on; they are never valid across pages.
/// Candidates are created fresh per page, consumed by the region resolver,
/// and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: PiiLabel,
    /// Exact matched substring, used verbatim for on-page text search.
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub page: usize,
}

impl Candidate {
    pub fn new(label: PiiLabel, text: impl Into<String>, start: usize, end: usize, page: usize) -> Self {
        Self {
            label,
            text: text.into(),
            start,
            end,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_names() {
        assert_eq!(PiiLabel::NhsNumber.as_str(), "nhs_number");
        assert_eq!(PiiLabel::PersonName.to_string(), "person_name");
    }

    #[test]
    fn test_candidate_construction() {
        let c = Candidate::new(PiiLabel::Email, "a@b.co", 10, 16, 0);
        assert_eq!(c.text, "a@b.co");
        assert_eq!(c.end - c.start, c.text.len());
    }
}
