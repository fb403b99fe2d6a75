//! Block-level dispatch.
//!
//! Each position in the line sequence is classified by the first matching
//! rule, in this order: header, blockquote, fenced code, table, task item,
//! plain line. Multi-line consumers report how many lines they covered so
//! the scan can skip past them; a consumer that reports zero lines falls
//! back to plain-line handling, so every step advances.

use std::sync::LazyLock;

use regex::Regex;

use super::fence::{consume_fence, is_fence_start};
use super::inline::render_inline;
use super::table::{consume_table, is_table};
use super::types::{BlockKind, BlockMatch, RenderOptions};

static TASK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(- \[[x ]\])(.+)$").expect("task item pattern is valid"));

const CHECKED_MARKER: &str = "- [x]";

/// Render a whole document with default options.
///
/// # Example
///
/// ```
/// assert_eq!(linemark::render("# Title"), "<h1>Title</h1>");
/// assert_eq!(linemark::render("hello"), "hello<br>");
/// ```
pub fn render(document: &str) -> String {
    render_with(document, &RenderOptions::default())
}

/// Render a whole document.
pub fn render_with(document: &str, options: &RenderOptions) -> String {
    let lines = split_lines(document);
    render_lines(&lines, options)
}

/// Render an already split line sequence.
pub fn render_lines(lines: &[&str], options: &RenderOptions) -> String {
    let mut html = String::new();
    let mut index = 0;
    while index < lines.len() {
        let block = process_line(lines, index, options);
        html.push_str(&block.html);
        index += block.lines_consumed.max(1);
    }
    html
}

/// Split a document into lines.
///
/// Both `\n` and `\r\n` end a line. A trailing terminator does not open an
/// extra empty line, and an empty document has no lines.
pub fn split_lines(document: &str) -> Vec<&str> {
    document.lines().collect()
}

/// Classify the line at `index`.
///
/// Multi-line kinds only report that the consumer should be tried; whether
/// it actually matches is decided by [`process_line`].
pub fn classify(lines: &[&str], index: usize) -> BlockKind {
    let Some(line) = lines.get(index) else {
        return BlockKind::Plain;
    };
    if line.starts_with('#') {
        BlockKind::Header(header_level(line))
    } else if line.starts_with('>') {
        BlockKind::Blockquote
    } else if is_fence_start(line) {
        BlockKind::FencedCode
    } else if is_table(&lines[index..]) {
        BlockKind::Table
    } else if TASK_ITEM.is_match(line) {
        BlockKind::TaskItem
    } else {
        BlockKind::Plain
    }
}

/// Render the block at `index`.
///
/// The result always covers at least one line when `index` is in bounds.
pub fn process_line(lines: &[&str], index: usize, options: &RenderOptions) -> BlockMatch {
    let Some(line) = lines.get(index).copied() else {
        return BlockMatch::unmatched();
    };
    let kind = classify(lines, index);
    let block = match kind {
        BlockKind::Header(level) => render_header(line, level, options),
        BlockKind::Blockquote => render_blockquote(line, options),
        BlockKind::FencedCode => consume_fence(&lines[index..]),
        BlockKind::Table => consume_table(&lines[index..]),
        BlockKind::TaskItem => render_task_item(line),
        BlockKind::Plain => render_plain(line, options),
    };

    if block.is_match() {
        tracing::trace!(index, ?kind, lines = block.lines_consumed, "block matched");
        block
    } else {
        tracing::debug!(index, ?kind, "block consumer did not match; rendering as plain line");
        render_plain(line, options)
    }
}

fn header_level(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'#').count()
}

fn render_header(line: &str, level: usize, options: &RenderOptions) -> BlockMatch {
    let content = line.trim_start_matches('#').trim_start();
    let content = block_content(content, options);
    BlockMatch::single(format!("<h{level}>{content}</h{level}>"))
}

fn render_blockquote(line: &str, options: &RenderOptions) -> BlockMatch {
    let content = line.strip_prefix('>').unwrap_or(line).trim_start();
    let content = block_content(content, options);
    BlockMatch::single(format!("<blockquote>{content}</blockquote>"))
}

fn block_content(content: &str, options: &RenderOptions) -> String {
    if options.inline_block_content {
        render_inline(content)
    } else {
        content.to_string()
    }
}

fn render_task_item(line: &str) -> BlockMatch {
    let Some(caps) = TASK_ITEM.captures(line) else {
        return BlockMatch::unmatched();
    };
    let checked = if &caps[1] == CHECKED_MARKER { "checked" } else { "" };
    let content = caps[2].trim();
    BlockMatch::single(format!(
        r#"<li><input type="checkbox" {checked} disabled>{content}</li>"#
    ))
}

fn render_plain(line: &str, options: &RenderOptions) -> BlockMatch {
    let mut html = render_inline(line);
    html.push_str(options.line_break.marker());
    BlockMatch::single(html)
}
