//! Page geometry and text measurement shared by layout and serialization.
//!
//! Coordinates are PDF user space: points, origin at the bottom-left
//! corner, y increasing upward.

use crate::error::{Error, Result};

/// A4 width in points.
pub const A4_WIDTH: f64 = 595.28;

/// A4 height in points.
pub const A4_HEIGHT: f64 = 841.89;

/// Default margin on every edge, in points.
pub const DEFAULT_MARGIN: f64 = 50.0;

/// Average glyph width as a proportion of the font size.
pub const AVG_CHAR_WIDTH_RATIO: f64 = 0.5;

/// Page dimensions and margin used for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    /// Margin on all four edges
    pub margin: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// Create page geometry from explicit dimensions.
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// A4 portrait with the default 50pt margin.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowpdf::geometry::PageGeometry;
    ///
    /// let page = PageGeometry::a4();
    /// assert_eq!(page.content_width(), 595.28 - 100.0);
    /// ```
    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT, DEFAULT_MARGIN)
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Width available between the left and right margins.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Initial cursor position on a fresh page.
    pub fn top(&self) -> f64 {
        self.height - self.margin
    }

    /// Check that the geometry leaves a positive content area.
    pub fn validate(&self) -> Result<()> {
        let fields = [("width", self.width), ("height", self.height)];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Layout(format!("page {} must be positive, got {}", name, value)));
            }
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::Layout(format!("margin must be non-negative, got {}", self.margin)));
        }
        if self.content_width() <= 0.0 || self.height - 2.0 * self.margin <= 0.0 {
            return Err(Error::Layout(format!(
                "margin {} leaves no content area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Fixed font sizes for each text role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Heading sizes for levels 1..=6
    pub headings: [f64; 6],
    /// Body text size
    pub normal: f64,
    /// Code block size
    pub code: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            headings: [24.0, 20.0, 16.0, 14.0, 12.0, 11.0],
            normal: 10.0,
            code: 9.0,
        }
    }
}

impl FontSizes {
    /// Size for a heading level; levels outside 1..=6 are clamped.
    pub fn heading(&self, level: u8) -> f64 {
        let index = usize::from(level.clamp(1, 6)) - 1;
        self.headings[index]
    }
}

/// Trait for font metrics needed for layout.
pub trait FontMetrics {
    /// Calculate the width of text in points.
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        self.char_width(font_size) * text.chars().count() as f64
    }

    /// Width of a single average character.
    fn char_width(&self, font_size: f64) -> f64;
}

/// Average character width metrics.
///
/// Every glyph is assumed to be `font_size * char_width_ratio` wide.
/// Layout output depends on this exact approximation.
#[derive(Debug, Clone, Copy)]
pub struct SimpleFontMetrics {
    /// Average character width as proportion of font size
    pub char_width_ratio: f64,
}

impl Default for SimpleFontMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: AVG_CHAR_WIDTH_RATIO,
        }
    }
}

impl FontMetrics for SimpleFontMetrics {
    fn char_width(&self, font_size: f64) -> f64 {
        font_size * self.char_width_ratio
    }
}
