//! Redaction regions and the per-page region set.
//!
//! A candidate's literal text maps to zero, one, or many on-page bounding
//! boxes via the document adapter's text search. Zero hits is expected
//! behavior (OCR-only text has no native geometry) and never an error.

use crate::adapter::DocumentAdapter;
use crate::detect::Candidate;
use crate::error::RedactResult;

/// An on-page rectangle, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Per-page set of redaction regions, deduplicated by exact bounding-box
/// equality. Order of application is immaterial; uniqueness is the
/// invariant (the same region must never be drawn twice).
#[derive(Debug, Clone)]
pub struct PageRegions {
    page: usize,
    boxes: Vec<BoundingBox>,
}

impl PageRegions {
    pub fn new(page: usize) -> Self {
        Self {
            page,
            boxes: Vec::new(),
        }
    }

    /// Inserts a box, returning whether it was new.
    pub fn insert(&mut self, bbox: BoundingBox) -> bool {
        if self.boxes.contains(&bbox) {
            return false;
        }
        self.boxes.push(bbox);
        true
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundingBox> {
        self.boxes.iter()
    }
}

/// Resolves candidates into the page's deduplicated region set.
///
/// Each candidate's literal text is searched on the page; every hit is
/// unioned into the set. A candidate with no hits silently produces no
/// region. Repeated resolution of the same candidates into a fresh set
/// yields identical content (the set never accumulates across calls).
pub fn resolve_regions(
    doc: &mut dyn DocumentAdapter,
    page: usize,
    candidates: &[Candidate],
) -> RedactResult<PageRegions> {
    let mut regions = PageRegions::new(page);
    for candidate in candidates {
        let hits = doc.search(page, &candidate.text)?;
        if hits.is_empty() {
            log::debug!(
                "no on-page geometry for {} candidate '{}' on page {}",
                candidate.label,
                candidate.text,
                page
            );
            continue;
        }
        for bbox in hits {
            regions.insert(bbox);
        }
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_exact_boxes() {
        let mut regions = PageRegions::new(0);
        let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert!(regions.insert(b));
        assert!(!regions.insert(b));
        assert_eq!(regions.len(), 1);
    }

    #[test]
    fn test_distinct_boxes_kept() {
        let mut regions = PageRegions::new(0);
        regions.insert(BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        regions.insert(BoundingBox::new(1.0, 2.0, 3.0, 4.5));
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let regions = PageRegions::new(7);
        assert!(regions.is_empty());
        assert_eq!(regions.page(), 7);
    }
}
