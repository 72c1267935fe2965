//! Per-page redaction pipeline.
//!
//! Each page moves through a fixed, linear sequence of stages:
//! extract text, match patterns, filter entities, resolve regions,
//! apply, commit. There is no branching, retry, or partial-page
//! recovery; a failure at any stage aborts the run. Pages already
//! committed stay committed.

use crate::adapter::DocumentAdapter;
use crate::detect::{Candidate, ContextFilter, EntitySource, NameFilter, PatternSet};
use crate::error::RedactResult;
use crate::region::resolve_regions;

/// Statistics about a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RedactionStats {
    /// Pages processed.
    pub pages_processed: usize,

    /// Pages on which at least one region was applied.
    pub pages_modified: usize,

    /// Candidates that survived disambiguation and name filtering.
    pub candidates_found: usize,

    /// Deduplicated regions handed to the applicator.
    pub regions_applied: usize,
}

impl RedactionStats {
    /// Returns true if any redactions were applied.
    pub fn has_redactions(&self) -> bool {
        self.regions_applied > 0
    }
}

/// The PII detection and redaction-region resolution pipeline.
///
/// Single-threaded and sequential: one page fully completes before the
/// next begins. Candidates and regions are page-scoped and discarded
/// after the page commits; nothing persists across pages or runs.
pub struct Pipeline {
    patterns: PatternSet,
    context: ContextFilter,
    names: NameFilter,
    entities: Option<Box<dyn EntitySource>>,
}

impl Pipeline {
    /// Creates a pipeline with the built-in pattern table, default
    /// disambiguation, and the default name exclusion list. No entity
    /// source is configured, so person-name detection is off until
    /// [`Pipeline::with_entity_source`] is called.
    pub fn new() -> Self {
        Self {
            patterns: PatternSet::builtin().clone(),
            context: ContextFilter::new(),
            names: NameFilter::default(),
            entities: None,
        }
    }

    /// Replaces the compiled pattern set.
    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = patterns;
        self
    }

    /// Replaces the name filter (custom exclusion lists).
    pub fn with_name_filter(mut self, names: NameFilter) -> Self {
        self.names = names;
        self
    }

    /// Attaches an external NER source, enabling person-name candidates.
    pub fn with_entity_source(mut self, source: Box<dyn EntitySource>) -> Self {
        self.entities = Some(source);
        self
    }

    /// Runs the pipeline over every page of the document, in order.
    pub fn run(&mut self, doc: &mut dyn DocumentAdapter) -> RedactResult<RedactionStats> {
        let mut stats = RedactionStats::default();
        let page_count = doc.page_count()?;
        for page in 0..page_count {
            self.process_page(doc, page, &mut stats)?;
            stats.pages_processed += 1;
        }
        log::info!(
            "processed {} page(s), applied {} region(s) on {} page(s)",
            stats.pages_processed,
            stats.regions_applied,
            stats.pages_modified
        );
        Ok(stats)
    }

    fn process_page(
        &mut self,
        doc: &mut dyn DocumentAdapter,
        page: usize,
        stats: &mut RedactionStats,
    ) -> RedactResult<()> {
        // Extract: native text layer first, OCR text appended. Matcher
        // offsets are only valid within this combined string.
        let mut combined = doc.native_text(page)?;
        combined.push_str(&doc.ocr_text(page)?);

        // Match patterns, pruned by contextual disambiguation.
        let mut candidates: Vec<Candidate> = self
            .patterns
            .find_candidates(&combined, page)
            .into_iter()
            .filter(|c| self.context.accept(c, &combined))
            .collect();

        // Filter entities from the external NER source, when configured.
        if let Some(source) = self.entities.as_mut() {
            let entities = source.entities(page, &combined)?;
            candidates.extend(self.names.person_candidates(&entities, &combined, page));
        }
        stats.candidates_found += candidates.len();

        // Resolve literals to deduplicated on-page regions.
        let regions = resolve_regions(doc, page, &candidates)?;

        // Apply each region exactly once, then commit the page.
        for bbox in regions.iter() {
            doc.apply_redaction(page, *bbox)?;
        }
        doc.commit_page(page)?;

        if !regions.is_empty() {
            stats.pages_modified += 1;
            stats.regions_applied += regions.len();
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
