// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text output for boards.
//!
//! Besides plain text, renderers produce a stable highlight index that callers can use for
//! cell-accurate selection of a block or a connector in the rendered output.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError, ConnectorKey};
use crate::graphics::Charset;
use crate::model::{BlockId, Vector};

mod text;

pub(crate) use text::text_len;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub charset: Charset,
    /// Drop trailing spaces on each line and trailing blank lines.
    pub trim_trailing_whitespace: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            charset: Charset::Unicode,
            trim_trailing_whitespace: true,
        }
    }
}

/// Something on the board that can be highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoardRef {
    Block(BlockId),
    Connector(ConnectorKey),
}

impl fmt::Display for BoardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block(id) => write!(f, "block:{id}"),
            Self::Connector(key) => write!(f, "connector:{key}"),
        }
    }
}

/// A contiguous span of highlighted cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive, relative to the returned
/// rendered text lines.
pub type LineSpan = (usize, usize, usize);

pub type HighlightIndex = BTreeMap<BoardRef, Vec<LineSpan>>;

/// Render output plus an index suitable for stable, cell-accurate highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRender {
    pub text: String,
    pub highlight_index: HighlightIndex,
}

impl AnnotatedRender {
    /// Highlight index keyed by the display form of each [`BoardRef`], for serialization.
    pub fn highlights_by_name(&self) -> BTreeMap<String, Vec<LineSpan>> {
        self.highlight_index
            .iter()
            .map(|(object, spans)| (object.to_string(), spans.clone()))
            .collect()
    }
}

pub fn render_board_text(board: &Board, options: RenderOptions) -> Result<String, BoardError> {
    let matrix = board.render()?.into_matrix();
    Ok(text::matrix_to_string(
        &matrix,
        options.charset,
        options.trim_trailing_whitespace,
    ))
}

pub fn render_board_annotated(
    board: &Board,
    options: RenderOptions,
) -> Result<AnnotatedRender, BoardError> {
    let render = board.render()?;
    let text = text::matrix_to_string(
        render.matrix(),
        options.charset,
        options.trim_trailing_whitespace,
    );

    let mut highlight_index = HighlightIndex::new();
    for block in board.blocks() {
        let position = block.position();
        let (Ok(y), Ok(x0)) = (usize::try_from(position.y()), usize::try_from(position.x())) else {
            continue;
        };
        let width = text_len(block.label());
        if width == 0 {
            continue;
        }
        highlight_index
            .insert(BoardRef::Block(block.id().clone()), vec![(y, x0, x0 + width - 1)]);
    }

    for route in render.routes() {
        let key = ConnectorKey {
            from: route.from.clone(),
            to: route.to.clone(),
        };
        let spans = cells_to_spans(&route.cells);
        if !spans.is_empty() {
            highlight_index.insert(BoardRef::Connector(key), spans);
        }
    }

    clamp_highlight_index_to_text(&mut highlight_index, &text);
    Ok(AnnotatedRender { text, highlight_index })
}

/// Collapses cells into per-row runs of adjacent columns.
fn cells_to_spans(cells: &[Vector]) -> Vec<LineSpan> {
    let sorted = cells
        .iter()
        .filter_map(|cell| Some((usize::try_from(cell.y()).ok()?, usize::try_from(cell.x()).ok()?)))
        .collect::<BTreeSet<_>>();

    let mut spans = Vec::<LineSpan>::new();
    for (y, x) in sorted {
        match spans.last_mut() {
            Some((span_y, _, x1)) if *span_y == y && *x1 + 1 == x => *x1 = x,
            _ => spans.push((y, x, x)),
        }
    }
    spans
}

pub(crate) fn clamp_highlight_index_to_text(highlight_index: &mut HighlightIndex, text: &str) {
    let line_lens = text.split('\n').map(text_len).collect::<Vec<_>>();

    highlight_index.retain(|_, spans| {
        spans.retain_mut(|span| {
            let (y, x0, x1) = span;

            let len = match line_lens.get(*y) {
                Some(len) => *len,
                None => return false,
            };

            if len == 0 || *x0 >= len {
                return false;
            }

            let max_x = len - 1;
            if *x1 > max_x {
                *x1 = max_x;
            }

            *x0 <= *x1
        });
        !spans.is_empty()
    });
}

#[cfg(test)]
mod tests {
    use super::{
        cells_to_spans, clamp_highlight_index_to_text, render_board_annotated, render_board_text,
        BoardRef, HighlightIndex, RenderOptions,
    };
    use crate::board::{Block, Board, ConnectorKey};
    use crate::graphics::Charset;
    use crate::model::{BlockId, Vector};

    fn bid(value: &str) -> BlockId {
        BlockId::new(value).unwrap()
    }

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.add_block(Block::new(bid("x"), "X", Vector::new(0, 0))).unwrap();
        board.add_block(Block::new(bid("y"), "Y", Vector::new(5, 3))).unwrap();
        board.add_connector("x", "y").unwrap();
        board
    }

    fn collect_spanned_text(text: &str, spans: &[(usize, usize, usize)]) -> String {
        let lines = text.split('\n').collect::<Vec<_>>();
        let mut out = String::new();
        for &(y, x0, x1) in spans {
            let line = lines.get(y).expect("y in bounds");
            out.extend(line.chars().skip(x0).take((x1 - x0) + 1));
            out.push('\n');
        }
        out
    }

    #[test]
    fn ascii_charset_swaps_line_glyphs() {
        let options = RenderOptions { charset: Charset::Ascii, ..RenderOptions::default() };
        assert_eq!(render_board_text(&sample_board(), options).unwrap(), "X\n|\n|\n+--->Y");
    }

    #[test]
    fn untrimmed_output_keeps_the_full_grid() {
        let options = RenderOptions { trim_trailing_whitespace: false, ..RenderOptions::default() };
        let text = render_board_text(&sample_board(), options).unwrap();
        let lines = text.split('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.chars().count() == 6));
    }

    #[test]
    fn annotated_render_indexes_blocks_and_connectors() {
        let render = render_board_annotated(&sample_board(), RenderOptions::default()).unwrap();
        assert_eq!(render.text, "X\n│\n│\n└───>Y");

        let block = &render.highlight_index[&BoardRef::Block(bid("y"))];
        assert_eq!(collect_spanned_text(&render.text, block), "Y\n");

        let key = ConnectorKey { from: bid("x"), to: bid("y") };
        let connector = &render.highlight_index[&BoardRef::Connector(key)];
        assert_eq!(connector, &vec![(1, 0, 0), (2, 0, 0), (3, 0, 4)]);
        assert_eq!(collect_spanned_text(&render.text, connector), "│\n│\n└───>\n");

        let names = render.highlights_by_name();
        assert!(names.contains_key("block:x"));
        assert!(names.contains_key("connector:x -> y"));
    }

    #[test]
    fn cells_collapse_into_row_runs() {
        let cells = [Vector::new(3, 1), Vector::new(1, 1), Vector::new(2, 1), Vector::new(5, 1)];
        assert_eq!(cells_to_spans(&cells), vec![(1, 1, 3), (1, 5, 5)]);
    }

    #[test]
    fn clamping_drops_spans_past_the_text() {
        let mut index = HighlightIndex::new();
        index.insert(BoardRef::Block(bid("a")), vec![(0, 0, 9), (4, 0, 0)]);
        index.insert(BoardRef::Block(bid("b")), vec![(1, 3, 3)]);
        clamp_highlight_index_to_text(&mut index, "abc\nd");
        assert_eq!(index.len(), 1);
        assert_eq!(index[&BoardRef::Block(bid("a"))], vec![(0, 0, 2)]);
    }
}
