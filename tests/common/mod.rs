//! Common test utilities: an in-memory document adapter and helpers.
//!
//! `FakeDocument` stands in for the MuPDF backend so pipeline behavior
//! can be verified without rendering PDFs: pages carry fixed native/OCR
//! text, text search answers from a registered literal→boxes map, and
//! every applied region and page commit is recorded for assertions.

#![allow(dead_code)]

use std::collections::HashMap;

use pii_redactor::{BoundingBox, DocumentAdapter, RedactError, RedactResult};

/// One fake page: its text streams and searchable geometry.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    pub native: String,
    pub ocr: String,
    hits: HashMap<String, Vec<BoundingBox>>,
}

impl FakePage {
    pub fn new(native: &str) -> Self {
        Self {
            native: native.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ocr(mut self, text: &str) -> Self {
        self.ocr = text.to_string();
        self
    }

    /// Registers an on-page bounding box for a literal string. A literal
    /// may map to several boxes (repeated occurrences).
    pub fn with_hit(mut self, literal: &str, bbox: BoundingBox) -> Self {
        self.hits.entry(literal.to_string()).or_default().push(bbox);
        self
    }
}

/// In-memory `DocumentAdapter` recording every mutation.
#[derive(Debug, Default)]
pub struct FakeDocument {
    pages: Vec<FakePage>,
    /// Page whose native text extraction should fail, if any.
    fail_native_on: Option<usize>,
    pub applied: Vec<(usize, BoundingBox)>,
    pub committed: Vec<usize>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: FakePage) -> Self {
        self.pages.push(page);
        self
    }

    pub fn failing_native_text_on(mut self, page: usize) -> Self {
        self.fail_native_on = Some(page);
        self
    }

    /// Regions applied to a given page.
    pub fn applied_on(&self, page: usize) -> Vec<BoundingBox> {
        self.applied
            .iter()
            .filter(|(p, _)| *p == page)
            .map(|(_, b)| *b)
            .collect()
    }
}

impl DocumentAdapter for FakeDocument {
    fn page_count(&self) -> RedactResult<usize> {
        Ok(self.pages.len())
    }

    fn native_text(&mut self, page: usize) -> RedactResult<String> {
        if self.fail_native_on == Some(page) {
            return Err(RedactError::Extraction {
                page,
                reason: "simulated extraction failure".to_string(),
            });
        }
        Ok(self.pages[page].native.clone())
    }

    fn ocr_text(&mut self, page: usize) -> RedactResult<String> {
        Ok(self.pages[page].ocr.clone())
    }

    fn search(&mut self, page: usize, literal: &str) -> RedactResult<Vec<BoundingBox>> {
        Ok(self.pages[page]
            .hits
            .get(literal)
            .cloned()
            .unwrap_or_default())
    }

    fn apply_redaction(&mut self, page: usize, bbox: BoundingBox) -> RedactResult<()> {
        self.applied.push((page, bbox));
        Ok(())
    }

    fn commit_page(&mut self, page: usize) -> RedactResult<()> {
        self.committed.push(page);
        Ok(())
    }
}

/// Shorthand for a box at `(n, n, n+10, n+10)`.
pub fn bbox(n: f32) -> BoundingBox {
    BoundingBox::new(n, n, n + 10.0, n + 10.0)
}
