//! PII Redaction CLI Application.
//!
//! Command-line interface for the pii-redactor library: detects and
//! physically redacts PII from a PDF, with optional external NER input
//! for person names and an `extract` subcommand for debugging.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pii_redactor::{FileEntitySource, MuPdfDocument, NameFilter, Pipeline};

/// PII Redaction Tool
///
/// Detects emails, phone numbers, SSNs, NHS numbers, dates of birth, and
/// (given external NER output) person names, and securely redacts them.
#[derive(Parser)]
#[command(name = "pii-redactor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input PDF file path
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON file of NER entities ([{"text","label","page"}, ...]) to
    /// enable person-name redaction
    #[arg(short, long, value_name = "FILE")]
    entities: Option<PathBuf>,

    /// Additional words to exclude from name redaction (can be specified
    /// multiple times)
    #[arg(short = 'x', long, value_name = "WORD")]
    exclude: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a PDF (for debugging and verification)
    Extract {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Redaction command handler.
struct RedactionHandler {
    verbose: bool,
}

impl RedactionHandler {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Executes a redaction run over the whole document.
    fn redact(
        &self,
        input: &Path,
        output: &Path,
        entities: Option<&Path>,
        exclude: &[String],
    ) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let mut pipeline = Pipeline::new()
            .with_name_filter(NameFilter::default().exclude(exclude.iter().cloned()));

        if let Some(entity_path) = entities {
            let source = FileEntitySource::from_path(entity_path)
                .with_context(|| format!("Failed to load entities from {}", entity_path.display()))?;
            pipeline = pipeline.with_entity_source(Box::new(source));
        }

        if self.verbose {
            println!("Input:  {}", input.display());
            println!("Output: {}", output.display());
            println!(
                "Names:  {}",
                if entities.is_some() {
                    "enabled (external NER)"
                } else {
                    "disabled (no entity file)"
                }
            );
        }

        let mut doc = MuPdfDocument::open(input).with_context(|| "Failed to open input PDF")?;
        let stats = pipeline.run(&mut doc).with_context(|| "Redaction failed")?;

        if stats.has_redactions() {
            doc.save(output)
                .with_context(|| "Failed to save redacted PDF")?;
        } else {
            // Nothing to redact: pass the document through unchanged.
            std::fs::copy(input, output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }

        if self.verbose {
            println!("\nRedaction Summary:");
            println!("  Pages processed: {}", stats.pages_processed);
            println!("  Pages modified:  {}", stats.pages_modified);
            println!("  Candidates found: {}", stats.candidates_found);
            println!("  Regions applied:  {}", stats.regions_applied);
        }

        if stats.has_redactions() {
            println!(
                "✓ Redacted {} region(s) across {} page(s) → {}",
                stats.regions_applied,
                stats.pages_modified,
                output.display()
            );
        } else {
            println!("⚠ No PII found to redact");
        }

        Ok(())
    }

    /// Extracts text from a PDF.
    fn extract(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let bytes = std::fs::read(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .with_context(|| "Text extraction failed")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let handler = RedactionHandler::new(cli.verbose);

    match &cli.command {
        Some(Commands::Extract { input, output }) => {
            handler.extract(input, output.as_deref())?;
        }
        None => {
            let input = cli
                .input
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
            let output = cli
                .output
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--output is required"))?;

            handler.redact(input, output, cli.entities.as_deref(), &cli.exclude)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
