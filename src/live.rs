//! Live re-rendering of an editable surface.
//!
//! The editable surface holds one markdown line per `<br>`-separated chunk.
//! On every input event the chunks are re-rendered through the block
//! dispatcher and joined back with `<br>`; the caller then restores the
//! caret from the returned selection (see [`crate::caret`]).

use std::sync::LazyLock;

use regex::Regex;

use crate::caret::Selection;
use crate::render::{LineBreak, RenderOptions, process_line};

static BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<br>)+").expect("line break pattern is valid"));

/// Kind of edit that triggered a re-render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditKind {
    /// A line break was inserted at the caret
    InsertParagraph,
    #[default]
    Other,
}

/// Re-rendered surface content and the selection to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRender {
    pub html: String,
    pub selection: Selection,
}

/// Re-render the markup of an editable surface.
///
/// Plain lines carry the `\n` marker, which the surface treats as
/// whitespace; lines are separated by `<br>`. An inserted paragraph moves
/// the selection one character forward so the caret lands on the new line.
pub fn rerender_surface(surface: &str, selection: Selection, edit: EditKind) -> LiveRender {
    let lines: Vec<&str> = BREAK_RUN.split(surface).collect();
    let options = RenderOptions::default().with_line_break(LineBreak::Newline);

    let mut fragments = Vec::with_capacity(lines.len());
    let mut index = 0;
    while index < lines.len() {
        let block = process_line(&lines, index, &options);
        index += block.lines_consumed.max(1);
        fragments.push(block.html);
    }

    let selection = match edit {
        EditKind::InsertParagraph => selection.shifted(1),
        EditKind::Other => selection,
    };

    LiveRender {
        html: fragments.join("<br>"),
        selection,
    }
}
