//! PII detection and secure redaction for PDF documents.
//!
//! This library locates personally identifiable information in a
//! document's rendered pages (machine-encoded text and, optionally,
//! OCR-recovered image text) and irreversibly obscures it in place using
//! MuPDF's redaction API.
//!
//! # Features
//!
//! - **Pattern Detection**: Emails, phone numbers, SSNs, NHS numbers, and
//!   dates of birth via a data-driven regex table
//! - **Contextual Disambiguation**: Date matches are only redacted when a
//!   birth-related keyword appears nearby
//! - **Name Redaction**: Consumes external NER output and filters
//!   PERSON-labeled spans through a configurable exclusion list
//! - **Region Deduplication**: The same on-page rectangle is never
//!   redacted twice, no matter how many detectors hit it
//! - **Secure Redaction**: Physically removes text from PDFs (not just
//!   visual overlay)
//!
//! # Architecture
//!
//! - [`detect`]: pattern matching, disambiguation, and entity filtering
//! - [`region`]: bounding boxes and the per-page deduplicated region set
//! - [`pipeline`]: per-page orchestration over a [`adapter::DocumentAdapter`]
//! - [`backend`]: the MuPDF document adapter
//! - [`error`]: error taxonomy
//!
//! # Quick Start
//!
//! ```no_run
//! use pii_redactor::{MuPdfDocument, Pipeline};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = MuPdfDocument::open(Path::new("input.pdf"))?;
//! let stats = Pipeline::new().run(&mut doc)?;
//! if stats.has_redactions() {
//!     doc.save(Path::new("output.pdf"))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # External NER
//!
//! Person-name redaction consumes pre-computed NER output:
//!
//! ```no_run
//! use pii_redactor::{FileEntitySource, MuPdfDocument, Pipeline};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entities = FileEntitySource::from_path(Path::new("entities.json"))?;
//! let mut doc = MuPdfDocument::open(Path::new("input.pdf"))?;
//! let mut pipeline = Pipeline::new().with_entity_source(Box::new(entities));
//! pipeline.run(&mut doc)?;
//! # Ok(())
//! # }
//! ```

// Public API
pub mod adapter;
pub mod backend;
pub mod detect;
pub mod error;
pub mod pipeline;
pub mod region;

// Re-exports for convenient access
pub use adapter::DocumentAdapter;
pub use backend::{MuPdfDocument, PageOcr};
pub use detect::{
    Candidate, ContextFilter, Entity, EntitySource, FileEntitySource, NameFilter, PatternSet,
    PiiLabel,
};
pub use error::{RedactError, RedactResult};
pub use pipeline::{Pipeline, RedactionStats};
pub use region::{BoundingBox, PageRegions};
