//! Table column geometry.
//!
//! Column widths come from the widest cell in each column under the average
//! character width heuristic, plus constant padding on both sides. When the
//! table is wider than the content area only the content share of each
//! column is scaled down, so padding stays constant and the columns sum to
//! exactly the available width.

use std::borrow::Cow;

/// Horizontal padding on each side of a cell, in points.
pub const CELL_PADDING: f64 = 5.0;

/// Vertical padding above and below cell text, in points.
pub const CELL_VERTICAL_PADDING: f64 = 5.0;

const ELLIPSIS: &str = "...";

/// Calculated column layout for a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Final column widths in points, padding included
    pub widths: Vec<f64>,
    /// Padding on each side of every cell
    pub padding: f64,
    /// Whether content widths were scaled down to fit
    pub scaled: bool,
}

impl ColumnLayout {
    /// Compute column widths for rectangular rows of `columns` cells.
    ///
    /// `char_width` is the width of one average character at the table's
    /// font size.
    pub fn compute(rows: &[Vec<String>], columns: usize, available: f64, char_width: f64) -> Self {
        let padding = CELL_PADDING;
        let mut content = vec![0.0f64; columns];

        for row in rows {
            for (col, cell) in row.iter().take(columns).enumerate() {
                let width = cell.chars().count() as f64 * char_width;
                content[col] = content[col].max(width);
            }
        }

        let total_content: f64 = content.iter().sum();
        let total_padding = 2.0 * padding * columns as f64;
        let nominal = total_content + total_padding;

        let scaled = nominal > available && total_content > 0.0;
        if scaled {
            if total_padding > available {
                log::warn!(
                    "table: {} columns need {:.2}pt of padding but only {:.2}pt is available; grid overflows",
                    columns,
                    total_padding,
                    available
                );
            }
            let factor = (available - total_padding).max(0.0) / total_content;
            log::debug!(
                "table: nominal width {:.2} exceeds {:.2}, scaling content by {:.4}",
                nominal,
                available,
                factor
            );
            for width in &mut content {
                *width *= factor;
            }
        }

        Self {
            widths: content.into_iter().map(|w| w + 2.0 * padding).collect(),
            padding,
            scaled,
        }
    }

    /// Total table width.
    pub fn total_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Width available for text inside a column.
    pub fn content_width(&self, col: usize) -> f64 {
        self.widths
            .get(col)
            .map_or(0.0, |w| (w - 2.0 * self.padding).max(0.0))
    }
}

/// Truncate cell text so it fits `content_width`.
///
/// Text that does not fit keeps the largest fitting character count minus
/// three and gains an ellipsis.
pub fn fit_cell_text(text: &str, content_width: f64, char_width: f64) -> Cow<'_, str> {
    let chars = text.chars().count();
    if char_width <= 0.0 || chars as f64 * char_width <= content_width {
        return Cow::Borrowed(text);
    }

    let max_chars = (content_width / char_width).floor().max(0.0) as usize;
    if max_chars < ELLIPSIS.len() {
        return Cow::Owned(ELLIPSIS[..max_chars].to_string());
    }

    let mut fitted: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    fitted.push_str(ELLIPSIS);
    Cow::Owned(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_natural_widths() {
        let rows = rows(&[&["Name", "Age"], &["Alice", "30"]]);
        let layout = ColumnLayout::compute(&rows, 2, 495.28, 5.0);
        assert!(!layout.scaled);
        // 5 chars * 5 + 10 padding, 3 chars * 5 + 10 padding
        assert_eq!(layout.widths, vec![35.0, 25.0]);
        assert_eq!(layout.total_width(), 60.0);
        assert_eq!(layout.content_width(0), 25.0);
    }

    #[test]
    fn test_scaling_keeps_padding() {
        let long = "x".repeat(100);
        let rows = rows(&[&[long.as_str(), long.as_str()], &["a", "b"]]);
        let available = 300.0;
        let layout = ColumnLayout::compute(&rows, 2, available, 5.0);

        assert!(layout.scaled);
        assert!((layout.total_width() - available).abs() < 1e-9);
        assert_eq!(layout.padding, CELL_PADDING);
        for col in 0..2 {
            assert!((layout.content_width(col) - (150.0 - 2.0 * CELL_PADDING)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scaling_is_proportional() {
        let rows = rows(&[&[&"a".repeat(60), &"b".repeat(20)]]);
        let layout = ColumnLayout::compute(&rows, 2, 220.0, 5.0);
        assert!(layout.scaled);
        let ratio = layout.content_width(0) / layout.content_width(1);
        assert!((ratio - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_padding_wider_than_page_collapses_content() {
        let header: Vec<String> = (0..60).map(|i| format!("c{}", i)).collect();
        let layout = ColumnLayout::compute(&[header], 60, 495.28, 5.0);
        assert!(layout.scaled);
        assert!(layout.widths.iter().all(|w| (*w - 2.0 * CELL_PADDING).abs() < 1e-9));
        assert!((layout.total_width() - 600.0).abs() < 1e-9);
        assert_eq!(layout.content_width(0), 0.0);
    }

    #[test]
    fn test_empty_cells_get_padding_only() {
        let rows = rows(&[&["", ""]]);
        let layout = ColumnLayout::compute(&rows, 2, 100.0, 5.0);
        assert_eq!(layout.widths, vec![10.0, 10.0]);
    }

    #[test]
    fn test_fit_cell_text_unchanged() {
        assert_eq!(fit_cell_text("hello", 25.0, 5.0), "hello");
        assert!(matches!(fit_cell_text("hello", 25.0, 5.0), Cow::Borrowed(_)));
    }

    #[test]
    fn test_fit_cell_text_truncates() {
        // 8 chars fit: keep 5 + "..."
        assert_eq!(fit_cell_text("abcdefghijkl", 40.0, 5.0), "abcde...");
        assert_eq!(fit_cell_text("abcdefghijkl", 42.0, 5.0), "abcde...");
    }

    #[test]
    fn test_fit_cell_text_tiny_column() {
        assert_eq!(fit_cell_text("abcdef", 10.0, 5.0), "..");
        assert_eq!(fit_cell_text("abcdef", 0.0, 5.0), "");
    }
}
