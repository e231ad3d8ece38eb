//! Multi-style word wrapping.
//!
//! Words are collected across run boundaries: `**bold**text` with no
//! whitespace in between is one word made of two styled pieces. Lines are
//! filled greedily using the average character width, and consecutive
//! pieces of the same style are merged into a single segment.

use crate::elements::{InlineRun, InlineStyle};

/// A piece of text in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Style of the piece
    pub style: InlineStyle,
    /// Text of the piece
    pub text: String,
}

impl Fragment {
    fn new(style: InlineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Number of characters in the piece.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// One output line: contiguous segments, no two adjacent with the same style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedLine {
    /// Styled segments from left to right
    pub segments: Vec<Fragment>,
}

impl WrappedLine {
    /// Number of characters on the line.
    pub fn char_count(&self) -> usize {
        self.segments.iter().map(Fragment::char_count).sum()
    }

    /// Line text with styles dropped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Append text, merging into the last segment when the style matches.
    fn push(&mut self, style: InlineStyle, text: &str) {
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.segments.push(Fragment::new(style, text)),
        }
    }
}

type Word = Vec<Fragment>;

/// Split runs into words, keeping style boundaries inside each word.
fn collect_words(runs: &[InlineRun]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Word = Vec::new();

    for run in runs {
        for ch in run.display_text().chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                continue;
            }
            match current.last_mut() {
                Some(piece) if piece.style == run.style => piece.text.push(ch),
                _ => current.push(Fragment::new(run.style, ch.to_string())),
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Greedy word wrapper over mixed-style runs.
#[derive(Debug, Clone, Copy)]
pub struct LineWrapper {
    /// Maximum line width in points
    pub max_width: f64,
    /// Width of one average character at the line's font size
    pub char_width: f64,
}

impl LineWrapper {
    /// Create a wrapper for the given width and character width.
    pub fn new(max_width: f64, char_width: f64) -> Self {
        Self {
            max_width,
            char_width,
        }
    }

    /// Wrap runs into lines.
    ///
    /// `prefix` (a list bullet, quote bar, ...) is placed verbatim at the
    /// start of the first line in the plain style; a word that does not fit
    /// after the prefix moves to the next line. A word that does not fit on
    /// an otherwise empty line is placed alone and overflows.
    pub fn wrap(&self, prefix: Option<&str>, runs: &[InlineRun]) -> Vec<WrappedLine> {
        let mut lines = Vec::new();
        let mut line = WrappedLine::default();
        let mut width = 0.0;
        let mut has_words = false;

        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            line.push(InlineStyle::Plain, prefix);
            width = self.char_width * prefix.chars().count() as f64;
        }

        for word in collect_words(runs) {
            let word_width =
                self.char_width * word.iter().map(Fragment::char_count).sum::<usize>() as f64;
            let space_width = if has_words { self.char_width } else { 0.0 };

            if !line.segments.is_empty() && width + space_width + word_width > self.max_width {
                log::trace!("wrap: flushing line of {} chars", line.char_count());
                lines.push(std::mem::take(&mut line));
                width = 0.0;
                has_words = false;
            }

            if has_words {
                let style = line.segments.last().map_or(InlineStyle::Plain, |s| s.style);
                line.push(style, " ");
                width += self.char_width;
            }
            for piece in &word {
                line.push(piece.style, &piece.text);
            }
            width += word_width;
            has_words = true;
        }

        if !line.segments.is_empty() {
            lines.push(line);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper(max_chars: usize) -> LineWrapper {
        LineWrapper::new(max_chars as f64 * 5.0, 5.0)
    }

    #[test]
    fn test_short_line_stays_single() {
        let lines = wrapper(80).wrap(None, &[InlineRun::plain("Hello world")]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Hello world");
        assert_eq!(lines[0].segments.len(), 1);
    }

    #[test]
    fn test_wrap_at_width() {
        // "aaaa bbbb" is 9 chars, fits exactly; "cccc" goes to the next line
        let lines = wrapper(9).wrap(None, &[InlineRun::plain("aaaa bbbb cccc")]);
        let texts: Vec<_> = lines.iter().map(WrappedLine::text).collect();
        assert_eq!(texts, vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn test_collapses_whitespace() {
        let lines = wrapper(80).wrap(None, &[InlineRun::plain("  a \t b\n c  ")]);
        assert_eq!(lines[0].text(), "a b c");
    }

    #[test]
    fn test_mixed_styles_merge() {
        let runs = vec![
            InlineRun::plain("one "),
            InlineRun::plain("two "),
            InlineRun::bold("three four"),
            InlineRun::plain(" five"),
        ];
        let lines = wrapper(80).wrap(None, &runs);
        assert_eq!(lines.len(), 1);
        let segments = &lines[0].segments;
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Fragment::new(InlineStyle::Plain, "one two "));
        assert_eq!(segments[1], Fragment::new(InlineStyle::Bold, "three four "));
        assert_eq!(segments[2], Fragment::new(InlineStyle::Plain, "five"));
    }

    #[test]
    fn test_word_spans_run_boundary() {
        let runs = vec![InlineRun::bold("foo"), InlineRun::plain("bar baz")];
        let lines = wrapper(7).wrap(None, &runs);
        let texts: Vec<_> = lines.iter().map(WrappedLine::text).collect();
        assert_eq!(texts, vec!["foobar", "baz"]);
        assert_eq!(lines[0].segments.len(), 2);
    }

    #[test]
    fn test_long_word_overflows_alone() {
        let lines = wrapper(5).wrap(None, &[InlineRun::plain("hi supercalifragilistic yo")]);
        let texts: Vec<_> = lines.iter().map(WrappedLine::text).collect();
        assert_eq!(texts, vec!["hi", "supercalifragilistic", "yo"]);
    }

    #[test]
    fn test_prefix_is_verbatim() {
        let lines = wrapper(80).wrap(Some("  - "), &[InlineRun::plain("item")]);
        assert_eq!(lines[0].text(), "  - item");
        assert_eq!(lines[0].segments.len(), 1);
    }

    #[test]
    fn test_prefix_counts_toward_width() {
        // prefix (4) + "abc" (3) = 7, then " def" would need 11 > 10
        let lines = wrapper(10).wrap(Some("  | "), &[InlineRun::plain("abc def")]);
        let texts: Vec<_> = lines.iter().map(WrappedLine::text).collect();
        assert_eq!(texts, vec!["  | abc", "def"]);
    }

    #[test]
    fn test_word_too_wide_for_prefix_line_moves_down() {
        let long = "w".repeat(97);
        let lines = wrapper(99).wrap(Some("  - "), &[InlineRun::plain(long.clone())]);
        let texts: Vec<_> = lines.iter().map(WrappedLine::text).collect();
        assert_eq!(texts, vec!["  - ".to_string(), long]);
    }

    #[test]
    fn test_prefix_without_words() {
        let lines = wrapper(80).wrap(Some("  - "), &[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "  - ");
    }

    #[test]
    fn test_empty_runs_produce_no_lines() {
        assert!(wrapper(80).wrap(None, &[]).is_empty());
        assert!(wrapper(80).wrap(None, &[InlineRun::plain("   ")]).is_empty());
    }

    #[test]
    fn test_rewrap_is_idempotent() {
        let w = wrapper(40);
        let first = w.wrap(None, &[InlineRun::plain("a short line of text")]);
        assert_eq!(first.len(), 1);
        let again = w.wrap(None, &[InlineRun::plain(first[0].text())]);
        assert_eq!(first, again);
    }
}
