//! Font resources shared by every page.
//!
//! Documents use a fixed set of four Base-14 fonts. Every page dictionary
//! references all four, whether or not the page uses them.

use crate::elements::InlineStyle;
use std::fmt;

/// Resource name of one of the four document fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontId {
    /// `/F1`, Helvetica
    Regular,
    /// `/F2`, Helvetica-Bold
    Bold,
    /// `/F3`, Helvetica-Oblique
    Italic,
    /// `/F4`, Courier
    Monospace,
}

impl FontId {
    /// All fonts in declaration order.
    pub const ALL: [FontId; 4] = [FontId::Regular, FontId::Bold, FontId::Italic, FontId::Monospace];

    /// Resource name used in content streams (without the leading slash).
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontId::Regular => "F1",
            FontId::Bold => "F2",
            FontId::Italic => "F3",
            FontId::Monospace => "F4",
        }
    }

    /// Font used to render an inline style on top of a block's base font.
    ///
    /// Plain, link and strikethrough text keep the base font.
    pub fn for_style(style: InlineStyle, base: FontId) -> FontId {
        match style {
            InlineStyle::Plain | InlineStyle::Link | InlineStyle::Strikethrough => base,
            InlineStyle::Bold => FontId::Bold,
            InlineStyle::Italic | InlineStyle::Image => FontId::Italic,
            InlineStyle::Code => FontId::Monospace,
        }
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// A font resource entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResource {
    /// Resource id
    pub id: FontId,
    /// PDF Base-14 font name
    pub base_font: &'static str,
}

/// Static registry of the document fonts.
#[derive(Debug, Clone)]
pub struct FontRegistry {
    fonts: [FontResource; 4],
}

impl FontRegistry {
    /// The standard Helvetica/Courier registry.
    pub fn standard() -> Self {
        Self {
            fonts: [
                FontResource {
                    id: FontId::Regular,
                    base_font: "Helvetica",
                },
                FontResource {
                    id: FontId::Bold,
                    base_font: "Helvetica-Bold",
                },
                FontResource {
                    id: FontId::Italic,
                    base_font: "Helvetica-Oblique",
                },
                FontResource {
                    id: FontId::Monospace,
                    base_font: "Courier",
                },
            ],
        }
    }

    /// Iterate fonts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FontResource> {
        self.fonts.iter()
    }

    /// Number of fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Always false; the registry is fixed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up a font by id.
    pub fn get(&self, id: FontId) -> &FontResource {
        &self.fonts[id as usize]
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
