// PdfBuilder::from_blocks and from_json take the builder by value
#![allow(clippy::wrong_self_convention)]

//! # flowpdf
//!
//! Flow layout and PDF serialization for structured documents.
//!
//! ## Core Features
//!
//! - **Styled content model**: headings, paragraphs, lists, task lists,
//!   blockquotes, code blocks, tables and rules made of inline styled runs
//! - **Flow layout**: greedy multi-style word wrap, automatic pagination,
//!   bordered table grids with proportional column scaling
//! - **PDF writing**: self-contained PDF 1.4 output with the four standard
//!   fonts, FlateDecode content streams, a correct cross-reference table and
//!   optional document metadata
//!
//! ## Architecture
//!
//! ```text
//! Block[] ──► LayoutEngine ──► Page[] ──► DocumentBuilder ──► ObjectGraph ──► PdfWriter ──► bytes
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use flowpdf::elements::{Block, InlineRun};
//!
//! # fn main() -> flowpdf::Result<()> {
//! let blocks = vec![
//!     Block::heading(1, vec![InlineRun::plain("Quarterly report")]),
//!     Block::paragraph(vec![
//!         InlineRun::bold("Revenue"),
//!         InlineRun::plain(" grew in every region."),
//!     ]),
//!     Block::table(vec![
//!         vec!["Region".into(), "Growth".into()],
//!         vec!["North".into(), "12%".into()],
//!     ]),
//! ];
//!
//! let bytes = flowpdf::convert(&blocks)?;
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Content model
pub mod elements;

// Shared geometry and fonts
pub mod fonts;
pub mod geometry;

// Pagination
pub mod layout;

// PDF objects and writing
pub mod object;
pub mod writer;

// High-level API
pub mod api;

// Re-exports
pub use api::{convert, Pdf, PdfBuilder, PdfConfig};
pub use elements::{Block, InlineRun, InlineStyle};
pub use error::{Error, Result};
pub use geometry::PageGeometry;
pub use layout::{layout, DrawOp, LayoutEngine, Page};
pub use writer::{build, serialize, ObjectGraph, PdfWriterConfig};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
