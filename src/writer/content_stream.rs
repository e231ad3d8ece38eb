//! PDF content stream builder.
//!
//! Turns laid-out [`DrawOp`]s into content stream operators
//! (ISO 32000-1:2008 Sections 8-9). Coordinates and sizes are written with
//! two decimals. Each text line is a self-contained `BT ... ET` object.

use crate::error::Result;
use crate::fonts::FontId;
use crate::layout::DrawOp;
use std::io::Write;

/// Line width for thin table borders and rules.
pub const THIN_LINE_WIDTH: f64 = 0.5;

/// Line width for the table header border.
pub const THICK_LINE_WIDTH: f64 = 1.5;

/// Initial line width of a content stream's graphics state.
const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(FontId, f64),
    /// Move text position (Td)
    MoveText(f64, f64),
    /// Show text (Tj), unescaped
    ShowText(String),
    /// Set line width (w)
    SetLineWidth(f64),
    /// Move to (m)
    MoveTo(f64, f64),
    /// Line to (l)
    LineTo(f64, f64),
    /// Rectangle path (re)
    Rectangle(f64, f64, f64, f64),
    /// Stroke path (S)
    Stroke,
}

/// Builder for PDF content streams.
#[derive(Debug)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentStreamOp>,
    line_width: f64,
}

impl Default for ContentStreamBuilder {
    fn default() -> Self {
        Self {
            operations: Vec::new(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Show one line of text at a position.
    pub fn text(&mut self, font: FontId, size: f64, x: f64, y: f64, text: &str) -> &mut Self {
        self.op(ContentStreamOp::BeginText)
            .op(ContentStreamOp::SetFont(font, size))
            .op(ContentStreamOp::MoveText(x, y))
            .op(ContentStreamOp::ShowText(text.to_string()))
            .op(ContentStreamOp::EndText)
    }

    /// Set the line width; skipped when it is already current.
    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        if self.line_width != width {
            self.line_width = width;
            self.op(ContentStreamOp::SetLineWidth(width));
        }
        self
    }

    /// Stroke a straight line.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x1, y1))
            .op(ContentStreamOp::LineTo(x2, y2))
            .op(ContentStreamOp::Stroke)
    }

    /// Stroke a rectangle outline.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
            .op(ContentStreamOp::Stroke)
    }

    /// Add a laid-out drawing operation.
    pub fn add_draw_op(&mut self, op: &DrawOp) -> &mut Self {
        match op {
            DrawOp::ShowText {
                x,
                y,
                font,
                size,
                text,
            } => self.text(*font, *size, *x, *y, text),
            DrawOp::StrokeLine { x1, y1, x2, y2 } => {
                self.set_line_width(DEFAULT_LINE_WIDTH).line(*x1, *y1, *x2, *y2)
            },
            DrawOp::StrokeRect {
                x,
                y,
                width,
                height,
                thick,
            } => {
                let width_pt = if *thick {
                    THICK_LINE_WIDTH
                } else {
                    THIN_LINE_WIDTH
                };
                self.set_line_width(width_pt).rect(*x, *y, *width, *height)
            },
        }
    }

    /// Add every operation of a page.
    pub fn add_draw_ops<'a>(&mut self, ops: impl IntoIterator<Item = &'a DrawOp>) -> &mut Self {
        for op in ops {
            self.add_draw_op(op);
        }
        self
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        for op in &self.operations {
            write_op(&mut buf, op)?;
            writeln!(buf)?;
        }
        Ok(buf)
    }
}

fn write_op<W: Write>(w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
    match op {
        ContentStreamOp::BeginText => write!(w, "BT"),
        ContentStreamOp::EndText => write!(w, "ET"),
        ContentStreamOp::SetFont(font, size) => write!(w, "/{} {:.2} Tf", font, size),
        ContentStreamOp::MoveText(x, y) => write!(w, "{:.2} {:.2} Td", x, y),
        ContentStreamOp::ShowText(text) => write!(w, "({}) Tj", escape_text(text)),
        ContentStreamOp::SetLineWidth(width) => write!(w, "{:.2} w", width),
        ContentStreamOp::MoveTo(x, y) => write!(w, "{:.2} {:.2} m", x, y),
        ContentStreamOp::LineTo(x, y) => write!(w, "{:.2} {:.2} l", x, y),
        ContentStreamOp::Rectangle(x, y, width, height) => {
            write!(w, "{:.2} {:.2} {:.2} {:.2} re", x, y, width, height)
        },
        ContentStreamOp::Stroke => write!(w, "S"),
    }
}

/// Escape text for a literal string in a content stream.
///
/// Backslash and parentheses are escaped, CR and LF are dropped, a tab
/// becomes four spaces and every other character outside printable ASCII
/// becomes a single space.
///
/// ```
/// use flowpdf::writer::escape_text;
///
/// assert_eq!(escape_text("a (b) \\c"), "a \\(b\\) \\\\c");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\r' | '\n' => {},
            '\t' => out.push_str("    "),
            ' '..='~' => out.push(ch),
            _ => out.push(' '),
        }
    }
    out
}
