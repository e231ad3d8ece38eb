//! Inline styled text runs.

use serde::{Deserialize, Serialize};

/// Style of an inline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineStyle {
    /// Unstyled text, rendered in the block's base font
    #[default]
    Plain,
    /// Bold text
    Bold,
    /// Italic text
    Italic,
    /// Inline code, rendered in the monospace font
    Code,
    /// Struck-through text
    Strikethrough,
    /// Hyperlink text
    Link,
    /// Inline image, rendered through its alternative text
    Image,
}

/// A styled span of text within a block.
///
/// Runs are produced once by an upstream parser and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineRun {
    /// Run style
    #[serde(default)]
    pub style: InlineStyle,
    /// Run text
    #[serde(default)]
    pub text: String,
    /// Link or image target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Alternative text for images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl InlineRun {
    /// Create a run with the given style and text.
    pub fn new(style: InlineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            target: None,
            alt_text: None,
        }
    }

    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Plain, text)
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Bold, text)
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Italic, text)
    }

    /// Create an inline code run.
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Code, text)
    }

    /// Create a strikethrough run.
    pub fn strikethrough(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Strikethrough, text)
    }

    /// Create a link run.
    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::new(InlineStyle::Link, text)
        }
    }

    /// Create an image run.
    pub fn image(alt_text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            alt_text: Some(alt_text.into()),
            ..Self::new(InlineStyle::Image, "")
        }
    }

    /// The text this run contributes to a rendered line.
    ///
    /// Links without text fall back to their target; images render as
    /// their bracketed alternative text.
    pub fn display_text(&self) -> String {
        match self.style {
            InlineStyle::Link if self.text.is_empty() => self.target.clone().unwrap_or_default(),
            InlineStyle::Image => {
                let alt = self
                    .alt_text
                    .as_deref()
                    .filter(|alt| !alt.is_empty())
                    .unwrap_or(self.text.as_str());
                if alt.is_empty() {
                    "[image]".to_string()
                } else {
                    format!("[{}]", alt)
                }
            },
            _ => self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_constructors() {
        assert_eq!(InlineRun::plain("a").style, InlineStyle::Plain);
        assert_eq!(InlineRun::bold("a").style, InlineStyle::Bold);
        assert_eq!(InlineRun::italic("a").style, InlineStyle::Italic);
        assert_eq!(InlineRun::code("a").style, InlineStyle::Code);
        assert_eq!(InlineRun::strikethrough("a").style, InlineStyle::Strikethrough);
    }

    #[test]
    fn test_link_display_text() {
        let link = InlineRun::link("docs", "https://example.com");
        assert_eq!(link.display_text(), "docs");
        assert_eq!(link.target.as_deref(), Some("https://example.com"));

        let bare = InlineRun::link("", "https://example.com");
        assert_eq!(bare.display_text(), "https://example.com");
    }

    #[test]
    fn test_image_display_text() {
        let image = InlineRun::image("logo", "logo.png");
        assert_eq!(image.display_text(), "[logo]");

        let no_alt = InlineRun::image("", "logo.png");
        assert_eq!(no_alt.display_text(), "[image]");
    }

    #[test]
    fn test_run_json_defaults() {
        let run: InlineRun = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(run.style, InlineStyle::Plain);
        assert_eq!(run.text, "hi");
        assert!(run.target.is_none());
    }
}
