//! High-level PDF API for simple document creation.
//!
//! ## Quick Start
//!
//! ```
//! use flowpdf::api::Pdf;
//! use flowpdf::elements::{Block, InlineRun};
//!
//! let blocks = vec![
//!     Block::heading(1, vec![InlineRun::plain("Hello World")]),
//!     Block::paragraph(vec![InlineRun::bold("Bold"), InlineRun::plain(" text.")]),
//! ];
//! let pdf = Pdf::from_blocks(&blocks).unwrap();
//! assert!(!pdf.as_bytes().is_empty());
//! ```
//!
//! ## Builder Pattern
//!
//! For more control, use the `PdfBuilder`:
//!
//! ```no_run
//! use flowpdf::api::PdfBuilder;
//!
//! let pdf = PdfBuilder::new()
//!     .title("My Document")
//!     .author("Jane Doe")
//!     .page_size(612.0, 792.0)
//!     .margin(72.0)
//!     .from_json(r#"[{"type": "paragraph", "runs": [{"text": "Content"}]}]"#)?;
//! pdf.save("output.pdf")?;
//! # Ok::<(), flowpdf::Error>(())
//! ```

mod pdf_builder;

pub use pdf_builder::{convert, Pdf, PdfBuilder, PdfConfig};
