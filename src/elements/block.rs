//! Block-level content elements.

use super::inline::InlineRun;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnAlign {
    /// Align to the left
    #[default]
    Left,
    /// Center horizontally
    Center,
    /// Align to the right
    Right,
}

/// A single list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Task state: `Some(true)` checked, `Some(false)` open, `None` for plain items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Item content
    #[serde(default)]
    pub runs: Vec<InlineRun>,
}

impl ListItem {
    /// Create a plain list item.
    pub fn new(runs: Vec<InlineRun>) -> Self {
        Self {
            checked: None,
            runs,
        }
    }

    /// Create a task list item.
    pub fn task(checked: bool, runs: Vec<InlineRun>) -> Self {
        Self {
            checked: Some(checked),
            runs,
        }
    }
}

/// A top-level document unit.
///
/// Blocks are owned by the content sequence and read-only to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Heading of level 1..=6
    Heading {
        /// Heading level (1 is the largest)
        level: u8,
        /// Heading content
        runs: Vec<InlineRun>,
    },
    /// Paragraph of inline runs
    Paragraph {
        /// Paragraph content
        runs: Vec<InlineRun>,
    },
    /// Preformatted code, rendered line by line without wrapping
    CodeBlock {
        /// Language tag from the fence, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Raw source lines
        lines: Vec<String>,
    },
    /// Ordered or unordered list
    List {
        /// Whether items are numbered
        #[serde(default)]
        ordered: bool,
        /// List items
        items: Vec<ListItem>,
    },
    /// Quoted paragraph
    Blockquote {
        /// Quote content
        runs: Vec<InlineRun>,
    },
    /// Table; row 0 is the header
    Table {
        /// Cell text by row
        rows: Vec<Vec<String>>,
        /// Alignment per column
        #[serde(default)]
        alignments: Vec<ColumnAlign>,
    },
    /// Horizontal rule
    Rule,
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: u8, runs: Vec<InlineRun>) -> Self {
        Block::Heading { level, runs }
    }

    /// Create a paragraph block.
    pub fn paragraph(runs: Vec<InlineRun>) -> Self {
        Block::Paragraph { runs }
    }

    /// Create a code block from raw source text, split on newlines.
    pub fn code(language: Option<&str>, source: &str) -> Self {
        Block::CodeBlock {
            language: language.map(str::to_string),
            lines: source.split('\n').map(str::to_string).collect(),
        }
    }

    /// Create a table block with left-aligned columns.
    pub fn table(rows: Vec<Vec<String>>) -> Self {
        Block::Table {
            rows,
            alignments: Vec::new(),
        }
    }

    /// Short name of the block kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code_block",
            Block::List { .. } => "list",
            Block::Blockquote { .. } => "blockquote",
            Block::Table { .. } => "table",
            Block::Rule => "rule",
        }
    }

    /// Parse a JSON array of blocks.
    pub fn from_json_list(json: &str) -> Result<Vec<Block>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::InlineStyle;

    #[test]
    fn test_code_block_splits_lines() {
        let block = Block::code(Some("rust"), "fn main() {\n}\n");
        match block {
            Block::CodeBlock { language, lines } => {
                assert_eq!(language.as_deref(), Some("rust"));
                assert_eq!(lines, vec!["fn main() {", "}", ""]);
            },
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_block_kind() {
        assert_eq!(Block::Rule.kind(), "rule");
        assert_eq!(Block::table(vec![]).kind(), "table");
        assert_eq!(Block::heading(1, vec![]).kind(), "heading");
    }

    #[test]
    fn test_from_json_list() {
        let json = r#"[
            {"type": "heading", "level": 2, "runs": [{"style": "bold", "text": "Title"}]},
            {"type": "list", "ordered": true, "items": [{"runs": [{"text": "one"}]}]},
            {"type": "list", "items": [{"checked": true, "runs": []}]},
            {"type": "table", "rows": [["a", "b"], ["1", "2"]], "alignments": ["left", "right"]},
            {"type": "rule"}
        ]"#;

        let blocks = Block::from_json_list(json).unwrap();
        assert_eq!(blocks.len(), 5);
        match &blocks[0] {
            Block::Heading { level, runs } => {
                assert_eq!(*level, 2);
                assert_eq!(runs[0].style, InlineStyle::Bold);
            },
            other => panic!("unexpected block {:?}", other),
        }
        match &blocks[2] {
            Block::List { ordered, items } => {
                assert!(!ordered);
                assert_eq!(items[0].checked, Some(true));
            },
            other => panic!("unexpected block {:?}", other),
        }
        match &blocks[3] {
            Block::Table { alignments, .. } => {
                assert_eq!(alignments, &vec![ColumnAlign::Left, ColumnAlign::Right]);
            },
            other => panic!("unexpected block {:?}", other),
        }
        assert_eq!(blocks[4], Block::Rule);
    }

    #[test]
    fn test_from_json_list_rejects_garbage() {
        assert!(Block::from_json_list("{not json").is_err());
    }
}
