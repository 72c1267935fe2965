//! Named-entity candidate filtering.
//!
//! The core never runs an NER model itself. It consumes `(text, label)`
//! pairs from an [`EntitySource`] and admits PERSON-labeled spans that
//! survive [`NameFilter`] validation. [`FileEntitySource`] adapts the
//! output of an external NER tool serialized as JSON.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Candidate, PiiLabel};
use crate::error::{RedactError, RedactResult};

/// Entity label admitted as a person-name redaction candidate.
const PERSON_LABEL: &str = "PERSON";

/// Words that commonly show up capitalized in product copy and get
/// mislabeled as names by NER models.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "Solution",
    "Drink",
    "Electrolyte",
    "Water",
    "Product",
    "Ingredient",
];

/// Additional exclusions for OCR'd text, where form-field captions like
/// "Email" and "Phone" frequently come back PERSON-labeled.
pub const OCR_EXCLUSIONS: &[&str] = &["Email", "Phone"];

/// A named entity produced by an external NER run.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: String,
    /// Page the entity was recognized on. Sources that operate on a
    /// single page's text may leave this at 0.
    #[serde(default)]
    pub page: usize,
}

/// Capability interface over external named-entity recognition.
///
/// Implementations receive the page's combined native+OCR text and return
/// recognized entities for it. The core depends only on this contract,
/// never on how the entities were produced.
pub trait EntitySource {
    fn entities(&mut self, page: usize, combined_text: &str) -> RedactResult<Vec<Entity>>;
}

/// Entity source backed by a JSON file of pre-computed NER output.
///
/// Expected shape: `[{"text": "Jane Smith", "label": "PERSON", "page": 0}, ...]`.
#[derive(Debug, Clone)]
pub struct FileEntitySource {
    entities: Vec<Entity>,
}

impl FileEntitySource {
    /// Loads and deserializes the entity file. Fails fast on unreadable
    /// or malformed input; a missing NER run should be visible, not a
    /// silent absence of name redactions.
    pub fn from_path(path: &Path) -> RedactResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| RedactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entities: Vec<Entity> =
            serde_json::from_str(&raw).map_err(|e| RedactError::EntitySource {
                reason: format!("malformed entity file '{}': {}", path.display(), e),
            })?;
        Ok(Self { entities })
    }

    /// Builds a source from already-parsed entities.
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}

impl EntitySource for FileEntitySource {
    fn entities(&mut self, page: usize, _combined_text: &str) -> RedactResult<Vec<Entity>> {
        Ok(self
            .entities
            .iter()
            .filter(|e| e.page == page)
            .cloned()
            .collect())
    }
}

/// Validity rules for PERSON-labeled entity text.
///
/// The exclusion list is an explicit configuration value so callers and
/// tests can substitute their own, rather than a process-wide constant.
#[derive(Debug, Clone)]
pub struct NameFilter {
    excluded: HashSet<String>,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS.iter().map(|w| w.to_string()))
    }
}

impl NameFilter {
    /// Creates a filter with a custom exclusion list.
    pub fn new<I>(excluded: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Default exclusions plus the OCR-specific ones.
    pub fn with_ocr_exclusions() -> Self {
        Self::new(
            DEFAULT_EXCLUSIONS
                .iter()
                .chain(OCR_EXCLUSIONS)
                .map(|w| w.to_string()),
        )
    }

    /// Extends the exclusion list with additional words.
    pub fn exclude<I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.excluded.extend(words);
        self
    }

    /// A name is valid when every whitespace-separated token consists
    /// solely of alphabetic characters and is not excluded. Any failing
    /// token rejects the name in its entirety.
    pub fn is_valid_name(&self, name: &str) -> bool {
        name.split_whitespace()
            .all(|word| word.chars().all(char::is_alphabetic) && !self.excluded.contains(word))
    }

    /// Admits PERSON-labeled entities as person-name candidates.
    ///
    /// Offsets point at the first occurrence of the entity text within
    /// `combined_text`; NER output with no locatable occurrence keeps
    /// zeroed offsets and is resolved (or silently dropped) by text
    /// search downstream.
    pub fn person_candidates(
        &self,
        entities: &[Entity],
        combined_text: &str,
        page: usize,
    ) -> Vec<Candidate> {
        entities
            .iter()
            .filter(|e| e.label == PERSON_LABEL)
            .filter_map(|e| {
                let name = e.text.trim();
                if name.is_empty() || !self.is_valid_name(name) {
                    return None;
                }
                let start = combined_text.find(name).unwrap_or(0);
                Some(Candidate::new(
                    PiiLabel::PersonName,
                    name,
                    start,
                    start + name.len(),
                    page,
                ))
            })
            .collect()
    }
}
