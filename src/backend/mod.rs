//! Document backend adapters.
//!
//! Backends implement [`crate::adapter::DocumentAdapter`] over a concrete
//! document library. The only shipped backend is MuPDF.

pub mod mupdf;

pub use self::mupdf::{MuPdfDocument, PageOcr};
