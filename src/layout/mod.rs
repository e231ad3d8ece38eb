//! Flow layout engine.
//!
//! Paginates a sequence of [`Block`]s into [`Page`]s of positioned
//! [`DrawOp`]s. A single vertical cursor walks down each page; before every
//! text line and every stroke the engine checks whether the cursor has
//! reached the bottom reserve and, if so, opens a new page. Blocks may
//! therefore break across pages mid-paragraph, mid-list or mid-table.
//!
//! ```
//! use flowpdf::elements::{Block, InlineRun};
//! use flowpdf::layout::layout;
//!
//! let blocks = vec![Block::paragraph(vec![InlineRun::plain("Hello")])];
//! let pages = layout(&blocks, 595.28, 841.89, 50.0).unwrap();
//! assert_eq!(pages.len(), 1);
//! ```

pub mod table;
pub mod wrap;

pub use table::{fit_cell_text, ColumnLayout, CELL_PADDING};
pub use wrap::{Fragment, LineWrapper, WrappedLine};

use crate::elements::{Block, ColumnAlign, InlineRun, InlineStyle, ListItem};
use crate::error::Result;
use crate::fonts::FontId;
use crate::geometry::{FontMetrics, FontSizes, PageGeometry, SimpleFontMetrics};

/// Space kept free above the bottom margin before a new page is forced.
pub const LINE_RESERVE: f64 = 20.0;

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.5;

/// Cursor advance after a horizontal rule.
const RULE_ADVANCE: f64 = 10.0;

/// Strikethrough line offset above the baseline, as a fraction of the font size.
const STRIKE_OFFSET: f64 = 0.3;

/// An abstract positioned drawing instruction in page space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Show a single line of text with its baseline at `y`
    ShowText {
        /// Left edge of the text
        x: f64,
        /// Baseline
        y: f64,
        /// Font resource
        font: FontId,
        /// Font size in points
        size: f64,
        /// Unescaped text
        text: String,
    },
    /// Stroke a straight line
    StrokeLine {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
    },
    /// Stroke a rectangle outline
    StrokeRect {
        /// Left edge
        x: f64,
        /// Bottom edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Thick border (table header)
        thick: bool,
    },
}

impl DrawOp {
    /// Lowest y coordinate touched by the operation.
    pub fn min_y(&self) -> f64 {
        match self {
            DrawOp::ShowText { y, .. } => *y,
            DrawOp::StrokeLine { y1, y2, .. } => y1.min(*y2),
            DrawOp::StrokeRect { y, height, .. } => y.min(y + height),
        }
    }
}

/// A laid-out page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    /// Drawing operations in paint order
    pub ops: Vec<DrawOp>,
}

impl Page {
    fn new(geometry: &PageGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            ops: Vec::new(),
        }
    }

    /// Text shown on the page, one entry per ShowText.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::ShowText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Vertical write position on the active page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Current baseline
    pub y: f64,
    /// Index of the active page
    pub page_index: usize,
}

/// Paginate blocks with explicit page geometry.
pub fn layout(blocks: &[Block], page_width: f64, page_height: f64, margin: f64) -> Result<Vec<Page>> {
    LayoutEngine::new(PageGeometry::new(page_width, page_height, margin))?.layout(blocks)
}

/// Layout context for one pass over a document.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    geometry: PageGeometry,
    sizes: FontSizes,
    metrics: SimpleFontMetrics,
    pages: Vec<Page>,
    cursor: Cursor,
}

impl LayoutEngine {
    /// Create an engine, rejecting geometry with no content area.
    pub fn new(geometry: PageGeometry) -> Result<Self> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            sizes: FontSizes::default(),
            metrics: SimpleFontMetrics::default(),
            pages: Vec::new(),
            cursor: Cursor {
                y: geometry.top(),
                page_index: 0,
            },
        })
    }

    /// Replace the font size table.
    pub fn with_font_sizes(mut self, sizes: FontSizes) -> Self {
        self.sizes = sizes;
        self
    }

    /// Page geometry used by this engine.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Lay out every block and return the finished pages.
    ///
    /// An empty document still yields one blank page.
    pub fn layout(mut self, blocks: &[Block]) -> Result<Vec<Page>> {
        for block in blocks {
            self.layout_block(block);
        }
        if self.pages.is_empty() {
            self.pages.push(Page::new(&self.geometry));
        }
        log::debug!("layout: {} blocks on {} pages", blocks.len(), self.pages.len());
        Ok(self.pages)
    }

    fn layout_block(&mut self, block: &Block) {
        log::trace!("layout: {} block at y={:.2}", block.kind(), self.cursor.y);
        let normal = self.sizes.normal;
        match block {
            Block::Heading { level, runs } => {
                let level = (*level).clamp(1, 6);
                let steps = f64::from(7 - level);
                self.add_space(steps * 2.0);
                self.write_runs(None, runs, self.sizes.heading(level), FontId::Bold);
                self.add_space(steps);
            },
            Block::Paragraph { runs } => {
                self.write_runs(None, runs, normal, FontId::Regular);
                self.add_space(8.0);
            },
            Block::CodeBlock { lines, .. } => {
                self.add_space(5.0);
                for line in lines {
                    self.write_code_line(line);
                }
                self.add_space(5.0);
            },
            Block::List { ordered, items } => {
                self.add_space(3.0);
                for (index, item) in items.iter().enumerate() {
                    let prefix = list_prefix(*ordered, index, item);
                    self.write_runs(Some(&prefix), &item.runs, normal, FontId::Regular);
                }
                self.add_space(5.0);
            },
            Block::Blockquote { runs } => {
                self.add_space(5.0);
                self.write_runs(Some("  | "), runs, normal, FontId::Regular);
                self.add_space(5.0);
            },
            Block::Table { rows, alignments } => self.write_table(rows, alignments),
            Block::Rule => {
                self.add_space(5.0);
                self.ensure_room();
                let y = self.cursor.y;
                let x = self.geometry.margin;
                self.push(DrawOp::StrokeLine {
                    x1: x,
                    y1: y,
                    x2: x + self.geometry.content_width(),
                    y2: y,
                });
                self.cursor.y -= RULE_ADVANCE;
                self.add_space(5.0);
            },
        }
    }

    fn open_page(&mut self) {
        self.pages.push(Page::new(&self.geometry));
        self.cursor = Cursor {
            y: self.geometry.top(),
            page_index: self.pages.len() - 1,
        };
        log::debug!("layout: opened page {}", self.pages.len());
    }

    /// Open a page if none exists or the cursor reached the bottom reserve.
    fn ensure_room(&mut self) {
        if self.pages.is_empty() || self.cursor.y < self.geometry.margin + LINE_RESERVE {
            self.open_page();
        }
    }

    fn add_space(&mut self, points: f64) {
        self.cursor.y -= points;
    }

    fn push(&mut self, op: DrawOp) {
        let index = self.cursor.page_index;
        self.pages[index].ops.push(op);
    }

    fn write_runs(&mut self, prefix: Option<&str>, runs: &[InlineRun], size: f64, base: FontId) {
        let char_width = self.metrics.char_width(size);
        let wrapper = LineWrapper::new(self.geometry.content_width(), char_width);
        for line in wrapper.wrap(prefix, runs) {
            self.write_line(&line, size, base);
        }
    }

    fn write_line(&mut self, line: &WrappedLine, size: f64, base: FontId) {
        self.ensure_room();
        let y = self.cursor.y;
        let char_width = self.metrics.char_width(size);
        let mut x = self.geometry.margin;

        for segment in &line.segments {
            let width = segment.char_count() as f64 * char_width;
            self.push(DrawOp::ShowText {
                x,
                y,
                font: FontId::for_style(segment.style, base),
                size,
                text: segment.text.clone(),
            });
            if segment.style == InlineStyle::Strikethrough {
                let visible = segment.text.trim_end().chars().count() as f64 * char_width;
                let strike_y = y + size * STRIKE_OFFSET;
                self.push(DrawOp::StrokeLine {
                    x1: x,
                    y1: strike_y,
                    x2: x + visible,
                    y2: strike_y,
                });
            }
            x += width;
        }
        self.cursor.y -= size * LINE_HEIGHT_FACTOR;
    }

    fn write_code_line(&mut self, line: &str) {
        let size = self.sizes.code;
        self.ensure_room();
        if !line.is_empty() {
            let y = self.cursor.y;
            self.push(DrawOp::ShowText {
                x: self.geometry.margin,
                y,
                font: FontId::Monospace,
                size,
                text: line.to_string(),
            });
        }
        self.cursor.y -= size * LINE_HEIGHT_FACTOR;
    }

    fn write_table(&mut self, rows: &[Vec<String>], alignments: &[ColumnAlign]) {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            log::warn!("layout: skipping table without columns");
            return;
        }

        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                if row.len() != columns {
                    log::warn!(
                        "layout: table row has {} cells, expected {}; normalizing",
                        row.len(),
                        columns
                    );
                }
                let mut row = row.clone();
                row.resize(columns, String::new());
                row
            })
            .collect();

        let size = self.sizes.normal;
        let char_width = self.metrics.char_width(size);
        let columns_layout =
            ColumnLayout::compute(&rows, columns, self.geometry.content_width(), char_width);
        let row_height = size + 2.0 * table::CELL_VERTICAL_PADDING;

        self.add_space(5.0);
        for (row_index, row) in rows.iter().enumerate() {
            let fresh_page = self
                .pages
                .get(self.cursor.page_index)
                .is_some_and(|p| p.ops.is_empty());
            if !fresh_page && self.cursor.y - row_height < self.geometry.margin {
                self.open_page();
            } else {
                self.ensure_room();
            }

            let header = row_index == 0;
            let top = self.cursor.y;
            let bottom = top - row_height;
            let font = if header { FontId::Bold } else { FontId::Regular };
            let mut x = self.geometry.margin;

            for (col, cell) in row.iter().enumerate() {
                let width = columns_layout.widths[col];
                self.push(DrawOp::StrokeRect {
                    x,
                    y: bottom,
                    width,
                    height: row_height,
                    thick: header,
                });

                let content_width = columns_layout.content_width(col);
                let text = fit_cell_text(cell, content_width, char_width);
                if !text.is_empty() {
                    let text_width = text.chars().count() as f64 * char_width;
                    let offset = match alignments.get(col).copied().unwrap_or_default() {
                        ColumnAlign::Left => 0.0,
                        ColumnAlign::Center => (content_width - text_width) / 2.0,
                        ColumnAlign::Right => content_width - text_width,
                    };
                    self.push(DrawOp::ShowText {
                        x: x + columns_layout.padding + offset.max(0.0),
                        y: bottom + table::CELL_VERTICAL_PADDING + size * 0.2,
                        font,
                        size,
                        text: text.into_owned(),
                    });
                }
                x += width;
            }
            self.cursor.y = bottom;
        }
        self.add_space(5.0 + size);
    }
}

fn list_prefix(ordered: bool, index: usize, item: &ListItem) -> String {
    match item.checked {
        Some(true) => "  [x] ".to_string(),
        Some(false) => "  [ ] ".to_string(),
        None if ordered => format!("  {}. ", index + 1),
        None => "  - ".to_string(),
    }
}
