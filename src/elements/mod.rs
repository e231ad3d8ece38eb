//! Styled content model consumed by the layout engine.
//!
//! A document is an ordered sequence of [`Block`]s. Text-bearing blocks
//! hold [`InlineRun`]s; tables hold plain cell text. Both are closed sum
//! types so every consumer matches them exhaustively.
//!
//! ## Example
//!
//! ```
//! use flowpdf::elements::{Block, InlineRun};
//!
//! let doc = vec![
//!     Block::heading(1, vec![InlineRun::plain("Report")]),
//!     Block::paragraph(vec![InlineRun::bold("Note:"), InlineRun::plain(" all good.")]),
//!     Block::Rule,
//! ];
//! assert_eq!(doc.len(), 3);
//! ```

mod block;
mod inline;

pub use block::{Block, ColumnAlign, ListItem};
pub use inline::{InlineRun, InlineStyle};
