//! Caret tracking across re-renders.
//!
//! An editable surface keeps its caret as a linear character offset into
//! the visible text. After the surface is re-rendered, that offset has to
//! be turned back into a position inside the new markup. Rendered markup is
//! modelled here as an ordered list of text runs (the text between tags),
//! each knowing its range in the flattened text and in the markup, and
//! lookups are a linear scan over the runs.

use std::ops::Range;

/// One contiguous piece of visible text in rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Character range in the flattened visible text
    pub text: Range<usize>,
    /// Byte range in the markup
    pub source: Range<usize>,
}

/// A position inside a specific text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretPosition {
    /// Index of the run
    pub run: usize,
    /// Character offset inside the run
    pub offset: usize,
}

/// Text runs of a rendered surface, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRuns {
    runs: Vec<TextRun>,
    text_len: usize,
}

impl TextRuns {
    /// Collect the text runs of `html`.
    ///
    /// Anything between `<` and `>` is a tag; everything else is text. No
    /// entity decoding is done, matching the renderer which never escapes.
    pub fn from_html(html: &str) -> Self {
        let mut runs = Vec::new();
        let mut text_len = 0;
        let mut in_tag = false;
        let mut current: Option<(usize, usize)> = None;

        for (i, ch) in html.char_indices() {
            if in_tag {
                if ch == '>' {
                    in_tag = false;
                }
                continue;
            }
            if ch == '<' {
                if let Some((start, chars)) = current.take() {
                    runs.push(TextRun {
                        text: text_len..text_len + chars,
                        source: start..i,
                    });
                    text_len += chars;
                }
                in_tag = true;
                continue;
            }
            current.get_or_insert((i, 0)).1 += 1;
        }
        if let Some((start, chars)) = current {
            runs.push(TextRun {
                text: text_len..text_len + chars,
                source: start..html.len(),
            });
            text_len += chars;
        }

        Self { runs, text_len }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Length of the flattened visible text, in characters.
    pub const fn text_len(&self) -> usize {
        self.text_len
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Find the run holding the linear `offset`.
    ///
    /// An offset on the boundary between two runs belongs to the earlier one.
    pub fn locate(&self, offset: usize) -> Option<CaretPosition> {
        self.locate_from(0, offset)
    }

    fn locate_from(&self, first_run: usize, offset: usize) -> Option<CaretPosition> {
        self.runs
            .iter()
            .enumerate()
            .skip(first_run)
            .find(|(_, run)| run.text.start <= offset && offset <= run.text.end)
            .map(|(run, found)| CaretPosition {
                run,
                offset: offset - found.text.start,
            })
    }

    /// Linear offset of a run position, if it lies inside that run.
    pub fn offset_of(&self, position: CaretPosition) -> Option<usize> {
        let run = self.runs.get(position.run)?;
        (position.offset <= run.text.len()).then_some(run.text.start + position.offset)
    }

    /// The flattened visible text of `html`, which must be the markup these
    /// runs were collected from.
    pub fn flatten(&self, html: &str) -> String {
        self.runs
            .iter()
            .filter_map(|run| html.get(run.source.clone()))
            .collect()
    }
}

/// A caret or selection as linear offsets into visible text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

/// A selection mapped onto text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSelection {
    pub start: CaretPosition,
    pub end: CaretPosition,
}

impl Selection {
    /// A selection between two offsets, in either order.
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A collapsed caret at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Move both ends forward by `delta` characters.
    pub const fn shifted(self, delta: usize) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    /// Capture a selection from two run positions.
    pub fn from_positions(
        runs: &TextRuns,
        start: CaretPosition,
        end: CaretPosition,
    ) -> Option<Self> {
        Some(Self::new(runs.offset_of(start)?, runs.offset_of(end)?))
    }

    /// Map the selection onto `runs`.
    ///
    /// The end is searched from the run holding the start. Returns `None`
    /// when either end lies past the visible text.
    pub fn resolve(&self, runs: &TextRuns) -> Option<ResolvedSelection> {
        let start = runs.locate(self.start)?;
        let end = runs.locate_from(start.run, self.end)?;
        Some(ResolvedSelection { start, end })
    }
}
