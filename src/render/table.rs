//! Pipe table detection and rendering.

use std::sync::LazyLock;

use regex::Regex;

use super::types::BlockMatch;

/// Lines needed before a table is considered: header, separator, one more.
pub const MIN_TABLE_LINES: usize = 3;

static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|.*\|\s*$").expect("table row pattern is valid"));

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|[\s\-:]*\|\s*$").expect("table separator pattern is valid")
});

/// Cheap precondition: a pipe row followed by a separator row, with at
/// least [`MIN_TABLE_LINES`] lines available.
pub fn is_table(lines: &[&str]) -> bool {
    lines.len() >= MIN_TABLE_LINES && ROW.is_match(lines[0]) && SEPARATOR.is_match(lines[1])
}

/// Consume a pipe table starting at `lines[0]`.
///
/// One header row, one or more separator rows, then every following pipe
/// row as body. Alignment markers are ignored and body rows are rendered
/// with whatever cells they carry.
pub fn consume_table(lines: &[&str]) -> BlockMatch {
    if !is_table(lines) {
        return BlockMatch::unmatched();
    }

    let header = &lines[..1];
    let separators = lines[1..]
        .iter()
        .take_while(|line| SEPARATOR.is_match(line))
        .count();
    let body_start = 1 + separators;
    let body_rows = lines[body_start..]
        .iter()
        .take_while(|line| ROW.is_match(line))
        .count();
    let body = &lines[body_start..body_start + body_rows];

    let thead = header
        .iter()
        .map(|row| render_cells(row, "th"))
        .collect::<Vec<_>>()
        .join("</tr><tr>");
    let tbody: String = body
        .iter()
        .map(|row| format!("<tr>{}</tr>", render_cells(row, "td")))
        .collect();

    BlockMatch::new(
        format!("<table><thead><tr>{thead}</tr></thead><tbody>{tbody}</tbody></table>"),
        body_start + body_rows,
    )
}

/// Split one pipe row into trimmed cells.
///
/// The fields outside the leading and trailing pipe are dropped.
pub fn split_cells(row: &str) -> Vec<&str> {
    let fields: Vec<&str> = row.trim().split('|').collect();
    if fields.len() < 2 {
        return Vec::new();
    }
    fields[1..fields.len() - 1].iter().map(|cell| cell.trim()).collect()
}

fn render_cells(row: &str, tag: &str) -> String {
    split_cells(row)
        .into_iter()
        .map(|cell| format!("<{tag}>{cell}</{tag}>"))
        .collect()
}
