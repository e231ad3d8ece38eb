//! Property tests for wrapping, pagination, table geometry and serialization.

use flowpdf::elements::{Block, InlineRun, InlineStyle, ListItem};
use flowpdf::fonts::FontId;
use flowpdf::layout::table::{ColumnLayout, CELL_PADDING};
use flowpdf::layout::wrap::LineWrapper;
use flowpdf::layout::{layout, DrawOp, Page, LINE_RESERVE};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9()\\\\]{1,12}"
}

fn style() -> impl Strategy<Value = InlineStyle> {
    prop_oneof![
        Just(InlineStyle::Plain),
        Just(InlineStyle::Bold),
        Just(InlineStyle::Italic),
        Just(InlineStyle::Code),
        Just(InlineStyle::Strikethrough),
    ]
}

fn runs() -> impl Strategy<Value = Vec<InlineRun>> {
    prop::collection::vec(
        (style(), prop::collection::vec(word(), 1..8)),
        1..6,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(style, words)| InlineRun::new(style, format!("{} ", words.join(" "))))
            .collect()
    })
}

fn list() -> impl Strategy<Value = Block> {
    (
        any::<bool>(),
        prop::collection::vec((prop::option::of(any::<bool>()), runs()), 1..5),
    )
        .prop_map(|(ordered, items)| Block::List {
            ordered,
            items: items
                .into_iter()
                .map(|(checked, runs)| match checked {
                    Some(done) => ListItem::task(done, runs),
                    None => ListItem::new(runs),
                })
                .collect(),
        })
}

fn table() -> impl Strategy<Value = Block> {
    // rows may be ragged; layout normalizes them to the header width
    prop::collection::vec(prop::collection::vec(word(), 1..4), 1..8).prop_map(Block::table)
}

fn code_block() -> impl Strategy<Value = Block> {
    prop::collection::vec("[ -~]{0,120}", 1..12).prop_map(|lines| Block::CodeBlock {
        language: None,
        lines,
    })
}

fn blocks() -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec(
        prop_oneof![
            (1u8..=6, runs()).prop_map(|(level, runs)| Block::heading(level, runs)),
            runs().prop_map(Block::paragraph),
            runs().prop_map(|runs| Block::Blockquote { runs }),
            list(),
            table(),
            code_block(),
            Just(Block::Rule),
        ],
        0..40,
    )
}

/// True when (x, y) lies inside a table cell border on the page.
fn in_table_cell(page: &Page, x: f64, y: f64) -> bool {
    page.ops.iter().any(|op| match op {
        DrawOp::StrokeRect {
            x: rx,
            y: ry,
            width,
            height,
            ..
        } => x >= *rx && x <= rx + width && y >= *ry && y <= ry + height,
        _ => false,
    })
}

fn words_of(runs: &[InlineRun]) -> Vec<String> {
    runs.iter()
        .flat_map(|r| r.display_text().split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

proptest! {
    #[test]
    fn prop_wrap_respects_width(runs in runs(), max_chars in 12usize..80) {
        let wrapper = LineWrapper::new(max_chars as f64 * 5.0, 5.0);
        let lines = wrapper.wrap(None, &runs);
        for line in &lines {
            let single_word = !line.text().trim().contains(' ');
            prop_assert!(line.char_count() <= max_chars || single_word);
            for pair in line.segments.windows(2) {
                prop_assert_ne!(pair[0].style, pair[1].style);
            }
        }
    }

    #[test]
    fn prop_wrap_keeps_every_word(runs in runs(), max_chars in 12usize..80) {
        let wrapper = LineWrapper::new(max_chars as f64 * 5.0, 5.0);
        let wrapped: Vec<String> = wrapper
            .wrap(None, &runs)
            .iter()
            .flat_map(|line| line.text().split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .collect();
        prop_assert_eq!(wrapped, words_of(&runs));
    }

    #[test]
    fn prop_ops_stay_inside_margins(blocks in blocks(), margin in 20.0f64..90.0) {
        let pages = layout(&blocks, 595.28, 841.89, margin).unwrap();
        prop_assert!(!pages.is_empty());
        for page in &pages {
            for op in &page.ops {
                prop_assert!(op.min_y() >= margin - 1e-9);
                if let DrawOp::ShowText { x, y, font, size, text } = op {
                    prop_assert!(*y <= 841.89 - margin + 1e-9);
                    if !in_table_cell(page, *x, *y) {
                        prop_assert!(*y >= margin + LINE_RESERVE - 1e-9);
                    }
                    // code block lines are never wrapped and may overflow
                    let code_line = *font == FontId::Monospace && *size == 9.0;
                    if !code_line {
                        let right = x + text.chars().count() as f64 * size * 0.5;
                        prop_assert!(right <= 595.28 - margin + 1e-6, "overflow: {:?}", text);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_conversion_is_deterministic(blocks in blocks()) {
        let first = flowpdf::convert(&blocks).unwrap();
        let second = flowpdf::convert(&blocks).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_scaled_columns_fill_available_width(
        widths in prop::collection::vec(1usize..200, 1..6),
        available in 100.0f64..600.0,
    ) {
        let header: Vec<String> = widths.iter().map(|w| "x".repeat(*w)).collect();
        let columns = header.len();
        let grid = ColumnLayout::compute(&[header], columns, available, 5.0);
        let min_total = 2.0 * CELL_PADDING * columns as f64;
        if grid.scaled && available >= min_total {
            prop_assert!((grid.total_width() - available).abs() < 1e-6);
        } else if !grid.scaled {
            prop_assert!(grid.total_width() <= available + 1e-9);
        }
        for w in &grid.widths {
            prop_assert!(*w >= 2.0 * CELL_PADDING - 1e-9);
        }
    }

    #[test]
    fn prop_xref_offsets_point_at_objects(count in 1usize..150) {
        let blocks: Vec<Block> = (0..count)
            .map(|i| Block::paragraph(vec![InlineRun::plain(format!("paragraph {}", i))]))
            .collect();
        let bytes = flowpdf::convert(&blocks).unwrap();
        let xref_at = bytes
            .windows(6)
            .rposition(|w| w == b"\nxref\n")
            .unwrap()
            + 1;
        let tail = std::str::from_utf8(&bytes[xref_at..]).unwrap();
        let mut lines = tail.lines().skip(1);
        let size: usize = lines
            .next()
            .and_then(|l| l.strip_prefix("0 "))
            .unwrap()
            .parse()
            .unwrap();
        lines.next();
        for id in 1..size {
            let offset: usize = lines.next().unwrap()[..10].parse().unwrap();
            let header = format!("{} 0 obj\n", id);
            prop_assert!(bytes[offset..].starts_with(header.as_bytes()));
        }
    }
}
