#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    clippy::module_name_repetitions
)]

//! # Linemark
//!
//! A line-oriented markdown to HTML renderer for live-preview editors.
//!
//! Linemark supports a small markdown dialect:
//! - Headers, blockquotes and task list items (one line each)
//! - Fenced code blocks and pipe tables (multi-line)
//! - Bold, italic, links, inline code, strikethrough, emoji tokens,
//!   highlight, subscript and superscript within a line
//!
//! Rendering is pure and never fails: malformed markup degrades to literal
//! text.
//!
//! ```
//! let html = linemark::render("# Notes\n- [x] ship it\n**done**");
//! assert_eq!(
//!     html,
//!     "<h1>Notes</h1><li><input type=\"checkbox\" checked disabled>ship it</li><strong>done</strong><br>"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`render`]: Block dispatch, multi-line consumers and the inline chain
//! - [`caret`]: Mapping caret offsets onto rendered text runs
//! - [`live`]: Re-rendering an editable surface on input
//! - [`export`]: Loading documents and exporting markdown or HTML
//! - [`config`]: Saved command-line defaults
//! - [`watcher`]: File watching for live preview
//! - [`perf`]: Timing and the render debug log

pub mod caret;
pub mod config;
pub mod export;
pub mod live;
pub mod perf;
pub mod render;
pub mod watcher;

pub use render::{RenderOptions, render, render_with};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::caret::{Selection, TextRuns};
    pub use crate::export::ExportFormat;
    pub use crate::render::{BlockKind, BlockMatch, LineBreak, RenderOptions, render, render_with};
}
