//! Core rendering types.

/// Result of rendering one block-level construct.
///
/// `lines_consumed` is the number of input lines the fragment accounts for.
/// A value of zero means the construct did not match and `html` is empty;
/// the dispatcher never advances on such a result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMatch {
    /// Rendered HTML fragment
    pub html: String,
    /// Number of source lines covered by the fragment
    pub lines_consumed: usize,
}

impl BlockMatch {
    /// A fragment covering `lines_consumed` source lines.
    pub fn new(html: impl Into<String>, lines_consumed: usize) -> Self {
        Self {
            html: html.into(),
            lines_consumed,
        }
    }

    /// A fragment covering exactly one source line.
    pub fn single(html: impl Into<String>) -> Self {
        Self::new(html, 1)
    }

    /// The empty, zero-line result reported by a consumer that did not match.
    pub const fn unmatched() -> Self {
        Self {
            html: String::new(),
            lines_consumed: 0,
        }
    }

    /// Whether this result covers at least one line.
    pub const fn is_match(&self) -> bool {
        self.lines_consumed > 0
    }
}

/// Block-level classification of a line position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#`-prefixed heading with its level
    Header(usize),
    /// `>`-prefixed quote line
    Blockquote,
    /// Line opening a backtick fence
    FencedCode,
    /// Pipe table header followed by a separator row
    Table,
    /// `- [ ]` / `- [x]` item
    TaskItem,
    /// Anything else; inline-processed
    Plain,
}

/// Marker appended after every plain line.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// `<br>`, for display surfaces
    #[default]
    Br,
    /// A bare `\n`, for editable surfaces that join lines themselves
    Newline,
}

impl LineBreak {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Br => "<br>",
            Self::Newline => "\n",
        }
    }
}

/// Options controlling a single conversion call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Marker appended after each plain line
    pub line_break: LineBreak,
    /// Run header and blockquote content through the inline chain.
    ///
    /// Off by default: heading and quote text is emitted verbatim.
    pub inline_block_content: bool,
}

impl RenderOptions {
    pub const fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    pub const fn with_inline_block_content(mut self, enabled: bool) -> Self {
        self.inline_block_content = enabled;
        self
    }
}
