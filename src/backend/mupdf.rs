//! MuPDF-backed document adapter.
//!
//! Implements the pipeline's document capabilities with MuPDF: per-page
//! text extraction, literal text search returning quads, and physical
//! redaction via redaction annotations plus `pdf_redact_page`. Redacted
//! content is removed from the content stream, not just painted over;
//! MuPDF fills the removed area black by default.

use std::path::Path;

use mupdf::pdf::{PdfAnnotationType, PdfDocument, PdfPage};
use mupdf::{Page, Rect as MuRect};

use crate::adapter::DocumentAdapter;
use crate::error::{RedactError, RedactResult};
use crate::region::BoundingBox;

/// Maximum search hits per literal (guards pathological documents).
const DEFAULT_MAX_HITS: u32 = 100;

/// OCR hook for the MuPDF backend.
///
/// The crate ships no OCR engine; callers inject one to recover text
/// from a page's raster content. When no engine is attached,
/// [`MuPdfDocument::ocr_text`] returns the empty string and the pipeline
/// degrades to the native text layer alone.
pub trait PageOcr {
    fn page_text(&self, page: &Page) -> RedactResult<String>;
}

/// Document adapter backed by a MuPDF `PdfDocument`.
///
/// Redaction annotations accumulate on the currently processed page and
/// are physically applied on [`DocumentAdapter::commit_page`]. Pages must
/// be driven sequentially, which is how the pipeline operates.
pub struct MuPdfDocument {
    doc: PdfDocument,
    ocr: Option<Box<dyn PageOcr>>,
    /// Page currently carrying unapplied redaction annotations.
    current: Option<(usize, PdfPage)>,
    pending: usize,
    max_hits: u32,
}

impl MuPdfDocument {
    /// Opens a PDF document for redaction.
    pub fn open(path: &Path) -> RedactResult<Self> {
        let path_str = path.to_str().ok_or_else(|| RedactError::InvalidInput {
            parameter: "input".to_string(),
            reason: "path contains invalid UTF-8".to_string(),
        })?;
        let doc = PdfDocument::open(path_str).map_err(|e| RedactError::Backend {
            backend: "MuPDF",
            message: format!("failed to open '{}': {}", path.display(), e),
        })?;
        Ok(Self {
            doc,
            ocr: None,
            current: None,
            pending: 0,
            max_hits: DEFAULT_MAX_HITS,
        })
    }

    /// Attaches an OCR engine for raster text recovery.
    pub fn with_ocr(mut self, ocr: Box<dyn PageOcr>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    /// Sets the maximum number of search hits per literal.
    pub fn with_max_hits(mut self, max_hits: u32) -> Self {
        self.max_hits = max_hits;
        self
    }

    /// Saves the (possibly redacted) document.
    pub fn save(&self, path: &Path) -> RedactResult<()> {
        let path_str = path.to_str().ok_or_else(|| RedactError::InvalidInput {
            parameter: "output".to_string(),
            reason: "path contains invalid UTF-8".to_string(),
        })?;
        self.doc.save(path_str).map_err(|e| RedactError::Backend {
            backend: "MuPDF",
            message: format!("failed to save '{}': {}", path.display(), e),
        })
    }

    fn load(&self, page: usize) -> RedactResult<Page> {
        self.doc
            .load_page(page as i32)
            .map_err(|e| RedactError::Backend {
                backend: "MuPDF",
                message: format!("failed to load page {}: {}", page, e),
            })
    }

    /// Returns the annotation-capable view of `page`, loading it if it is
    /// not the page currently being processed.
    fn pdf_page(&mut self, page: usize) -> RedactResult<&mut PdfPage> {
        let cached = matches!(&self.current, Some((p, _)) if *p == page);
        if !cached {
            let loaded = self.load(page)?;
            let pdf_page = PdfPage::try_from(loaded).map_err(|e| RedactError::Backend {
                backend: "MuPDF",
                message: format!("page {} is not a PDF page: {}", page, e),
            })?;
            self.current = Some((page, pdf_page));
            self.pending = 0;
        }
        match &mut self.current {
            Some((_, pdf_page)) => Ok(pdf_page),
            None => Err(RedactError::Backend {
                backend: "MuPDF",
                message: "page cache unexpectedly empty".to_string(),
            }),
        }
    }
}

impl DocumentAdapter for MuPdfDocument {
    fn page_count(&self) -> RedactResult<usize> {
        let count = self.doc.page_count().map_err(|e| RedactError::Backend {
            backend: "MuPDF",
            message: format!("failed to get page count: {}", e),
        })?;
        Ok(count as usize)
    }

    fn native_text(&mut self, page: usize) -> RedactResult<String> {
        let loaded = self.load(page)?;
        loaded.to_text().map_err(|e| RedactError::Extraction {
            page,
            reason: e.to_string(),
        })
    }

    fn ocr_text(&mut self, page: usize) -> RedactResult<String> {
        match &self.ocr {
            Some(engine) => {
                let loaded = self.load(page)?;
                engine.page_text(&loaded)
            }
            None => Ok(String::new()),
        }
    }

    fn search(&mut self, page: usize, literal: &str) -> RedactResult<Vec<BoundingBox>> {
        if literal.trim().is_empty() {
            return Ok(Vec::new());
        }
        let loaded = self.load(page)?;
        let hits = loaded
            .search(literal, self.max_hits)
            .map_err(|e| RedactError::Backend {
                backend: "MuPDF",
                message: format!("search failed for literal '{}': {}", literal, e),
            })?;
        Ok(hits
            .into_iter()
            .map(|quad| BoundingBox {
                x0: quad.ul.x.min(quad.ll.x).min(quad.ur.x).min(quad.lr.x),
                y0: quad.ul.y.min(quad.ll.y).min(quad.ur.y).min(quad.lr.y),
                x1: quad.ul.x.max(quad.ll.x).max(quad.ur.x).max(quad.lr.x),
                y1: quad.ul.y.max(quad.ll.y).max(quad.ur.y).max(quad.lr.y),
            })
            .collect())
    }

    fn apply_redaction(&mut self, page: usize, bbox: BoundingBox) -> RedactResult<()> {
        let pdf_page = self.pdf_page(page)?;
        let annot = pdf_page
            .create_annotation(PdfAnnotationType::Redact)
            .map_err(|e| RedactError::Backend {
                backend: "MuPDF",
                message: format!("failed to create redaction annotation on page {}: {}", page, e),
            })?;

        let rect = MuRect {
            x0: bbox.x0,
            y0: bbox.y0,
            x1: bbox.x1,
            y1: bbox.y1,
        };
        unsafe {
            ffi::set_annotation_rect(&annot, rect);
        }
        self.pending += 1;
        Ok(())
    }

    fn commit_page(&mut self, page: usize) -> RedactResult<()> {
        if self.pending == 0 {
            self.current = None;
            return Ok(());
        }
        let pdf_page = self.pdf_page(page)?;
        pdf_page.redact().map_err(|e| RedactError::Backend {
            backend: "MuPDF",
            message: format!("failed to apply redactions on page {}: {}", page, e),
        })?;
        self.current = None;
        self.pending = 0;
        Ok(())
    }
}

/// FFI helpers for MuPDF annotation operations.
mod ffi {
    use mupdf::pdf::PdfAnnotation;
    use mupdf::Rect;

    /// Sets the rectangle for a PDF annotation via FFI.
    ///
    /// # Safety
    /// This function uses unsafe FFI calls to access MuPDF's C API.
    /// The annotation must be valid and the context properly initialized.
    pub unsafe fn set_annotation_rect(annot: &PdfAnnotation, rect: Rect) {
        #[repr(C)]
        struct PdfAnnotRaw {
            inner: *mut mupdf_sys::pdf_annot,
        }

        let annot_raw = std::mem::transmute::<&PdfAnnotation, &PdfAnnotRaw>(annot);
        let ctx = mupdf_sys::mupdf_new_base_context();

        if !ctx.is_null() {
            let fz_rect = mupdf_sys::fz_rect {
                x0: rect.x0,
                y0: rect.y0,
                x1: rect.x1,
                y1: rect.y1,
            };

            mupdf_sys::pdf_set_annot_rect(ctx, annot_raw.inner, fz_rect);
            mupdf_sys::mupdf_drop_base_context(ctx);
        }
    }
}
