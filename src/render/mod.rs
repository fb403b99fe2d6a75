//! Markdown to HTML rendering.
//!
//! This module handles:
//! - Classifying lines into block-level constructs
//! - Consuming multi-line fenced code blocks and pipe tables
//! - Rewriting span-level markup within a single line
//!
//! Rendering never fails. Unterminated or malformed constructs degrade to
//! plain lines, and stray inline delimiters stay literal.

mod block;
mod fence;
mod inline;
mod table;
mod types;

pub use block::{classify, process_line, render, render_lines, render_with, split_lines};
pub use fence::{FENCE, consume_fence, is_fence_start};
pub use inline::{CHAIN, InlineKind, render_inline};
pub use table::{MIN_TABLE_LINES, consume_table, is_table, split_cells};
pub use types::{BlockKind, BlockMatch, LineBreak, RenderOptions};
