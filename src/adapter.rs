//! Capability interface over the document backend.
//!
//! The pipeline core talks to the document exclusively through
//! [`DocumentAdapter`]: per-page text, literal text search, and redaction
//! application. Backends (MuPDF, test fakes) implement this trait; the
//! core has no dependency on how pages are rendered or persisted.

use crate::error::RedactResult;
use crate::region::BoundingBox;

/// Synchronous, per-page access to a document being redacted.
///
/// All calls are blocking and attempted exactly once; there is no retry
/// policy. The adapter owns any mutation of the underlying document, so
/// pages must be processed sequentially, never concurrently.
pub trait DocumentAdapter {
    /// Number of pages in the document.
    fn page_count(&self) -> RedactResult<usize>;

    /// The page's machine-encoded text layer.
    fn native_text(&mut self, page: usize) -> RedactResult<String>;

    /// Text recovered from the page's raster images. Empty when OCR is
    /// not enabled for the run; the pipeline then degrades to native
    /// text only.
    fn ocr_text(&mut self, page: usize) -> RedactResult<String>;

    /// All on-page bounding boxes whose rendered text equals `literal`.
    /// An empty result is normal, not an error.
    fn search(&mut self, page: usize, literal: &str) -> RedactResult<Vec<BoundingBox>>;

    /// Marks a region for opaque (black) fill. Called once per
    /// deduplicated region.
    fn apply_redaction(&mut self, page: usize, bbox: BoundingBox) -> RedactResult<()>;

    /// Finalizes all redactions for the page. Called exactly once per
    /// page, after all its regions have been applied.
    fn commit_page(&mut self, page: usize) -> RedactResult<()>;
}
