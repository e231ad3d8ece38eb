//! PDF writing: object graph construction and binary serialization.
//!
//! ## Architecture
//!
//! ```text
//! Page[] (from layout)
//!     ↓
//! [DocumentBuilder] (pages → ObjectGraph, content streams compressed)
//!     ↓  uses [ContentStreamBuilder] (DrawOps → operator bytes)
//! [PdfWriter] (header, objects, xref, trailer)
//!     ↓  uses [ObjectSerializer] (objects → bytes)
//! PDF bytes
//! ```
//!
//! ```
//! use flowpdf::fonts::FontRegistry;
//! use flowpdf::layout::layout;
//! use flowpdf::writer::{build, serialize};
//!
//! let pages = layout(&[], 595.28, 841.89, 50.0).unwrap();
//! let graph = build(&pages, &FontRegistry::standard()).unwrap();
//! let bytes = serialize(&graph).unwrap();
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! ```

mod content_stream;
mod document_builder;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{
    escape_text, ContentStreamBuilder, ContentStreamOp, THICK_LINE_WIDTH, THIN_LINE_WIDTH,
};
pub use document_builder::{build, DocumentBuilder, ObjectGraph};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{serialize, PdfWriter, PdfWriterConfig};

use crate::error::Result;
use crate::fonts::FontRegistry;
use crate::layout::Page;

/// Build and serialize pages in one step.
pub fn write_pages(pages: &[Page], fonts: &FontRegistry, config: &PdfWriterConfig) -> Result<Vec<u8>> {
    let graph = DocumentBuilder::new(fonts, config).build(pages)?;
    PdfWriter::with_config(config.clone()).write(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_pages_empty_page() {
        let page = Page {
            width: 595.28,
            height: 841.89,
            ops: Vec::new(),
        };
        let bytes =
            write_pages(&[page], &FontRegistry::standard(), &PdfWriterConfig::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/MediaBox [0 0 595.28 841.89]"));
        assert!(text.contains("/Resources << /Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R /F4 6 0 R >> >>"));
        assert!(text.contains("0 9\n"));
    }
}
