//! High-level PDF builder and document type.
//!
//! Provides `Pdf` for simple operations and `PdfBuilder` for customized creation.

use crate::elements::Block;
use crate::error::Result;
use crate::fonts::FontRegistry;
use crate::geometry::{FontSizes, PageGeometry};
use crate::layout::LayoutEngine;
use crate::writer::{write_pages, PdfWriterConfig};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Configuration for PDF generation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfConfig {
    /// Page dimensions and margin
    pub page: PageGeometry,
    /// Font sizes per text role
    pub font_sizes: FontSizes,
    /// Serializer settings and document metadata
    pub writer: PdfWriterConfig,
}

/// A generated PDF document.
#[derive(Debug, Clone)]
pub struct Pdf {
    bytes: Vec<u8>,
    page_count: usize,
    config: PdfConfig,
}

impl Pdf {
    /// Create a PDF from blocks with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use flowpdf::api::Pdf;
    /// use flowpdf::elements::{Block, InlineRun};
    ///
    /// let pdf = Pdf::from_blocks(&[Block::heading(1, vec![InlineRun::plain("Hello")])]).unwrap();
    /// assert!(pdf.as_bytes().starts_with(b"%PDF-1.4"));
    /// ```
    pub fn from_blocks(blocks: &[Block]) -> Result<Self> {
        PdfBuilder::new().from_blocks(blocks)
    }

    /// Create a PDF from a JSON array of blocks.
    pub fn from_json(json: &str) -> Result<Self> {
        PdfBuilder::new().from_json(json)
    }

    /// Get the PDF bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to PDF bytes, consuming the Pdf.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Write the PDF to any writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Save the PDF to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), &self.bytes)?;
        log::debug!("wrote {} bytes to {}", self.bytes.len(), path.as_ref().display());
        Ok(())
    }

    /// Get the configuration used to create this PDF.
    pub fn config(&self) -> &PdfConfig {
        &self.config
    }
}

/// Builder for creating PDFs with custom configuration.
///
/// # Example
///
/// ```
/// use flowpdf::api::PdfBuilder;
/// use flowpdf::elements::{Block, InlineRun};
///
/// let pdf = PdfBuilder::new()
///     .title("Report")
///     .margin(36.0)
///     .from_blocks(&[Block::paragraph(vec![InlineRun::plain("Body")])])
///     .unwrap();
/// assert_eq!(pdf.page_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfBuilder {
    config: PdfConfig,
}

impl PdfBuilder {
    /// Create a new PDF builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from an existing configuration.
    pub fn with_config(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.writer.title = Some(title.into());
        self
    }

    /// Set the document author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.config.writer.author = Some(author.into());
        self
    }

    /// Set the document subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.config.writer.subject = Some(subject.into());
        self
    }

    /// Set the document keywords.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.config.writer.keywords = Some(keywords.into());
        self
    }

    /// Set the creator application.
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.config.writer.creator = Some(creator.into());
        self
    }

    /// Set the page size in points.
    pub fn page_size(mut self, width: f64, height: f64) -> Self {
        self.config.page.width = width;
        self.config.page.height = height;
        self
    }

    /// Set the margin on all four edges.
    pub fn margin(mut self, margin: f64) -> Self {
        self.config.page = self.config.page.with_margin(margin);
        self
    }

    /// Replace the font size table.
    pub fn font_sizes(mut self, sizes: FontSizes) -> Self {
        self.config.font_sizes = sizes;
        self
    }

    /// Enable or disable content stream compression.
    pub fn compress(mut self, compress: bool) -> Self {
        self.config.writer.compress = compress;
        self
    }

    /// Lay out and serialize blocks.
    pub fn from_blocks(self, blocks: &[Block]) -> Result<Pdf> {
        let pages = LayoutEngine::new(self.config.page)?
            .with_font_sizes(self.config.font_sizes)
            .layout(blocks)?;
        let bytes = write_pages(&pages, &FontRegistry::standard(), &self.config.writer)?;
        log::info!(
            "generated {} pages ({} bytes) from {} blocks",
            pages.len(),
            bytes.len(),
            blocks.len()
        );
        Ok(Pdf {
            bytes,
            page_count: pages.len(),
            config: self.config,
        })
    }

    /// Parse a JSON array of blocks, then lay out and serialize it.
    pub fn from_json(self, json: &str) -> Result<Pdf> {
        let blocks = Block::from_json_list(json)?;
        self.from_blocks(&blocks)
    }
}

/// Convert blocks to PDF bytes with default settings (A4, 50pt margin).
pub fn convert(blocks: &[Block]) -> Result<Vec<u8>> {
    Ok(Pdf::from_blocks(blocks)?.into_bytes())
}
