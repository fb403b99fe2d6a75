//! Fenced code block consumer.

use std::sync::LazyLock;

use regex::Regex;

use super::types::BlockMatch;

/// The three-backtick fence token.
pub const FENCE: &str = "```";

static OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^```([A-Za-z0-9_-]*)[ \t]*$").expect("fence open pattern is valid")
});

static CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[ \t]*$").expect("fence close pattern is valid"));

/// Whether `line` starts a fence and should be handed to [`consume_fence`].
pub fn is_fence_start(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Consume a fenced code block starting at `lines[0]`.
///
/// The body is every line up to the first closing fence and is emitted
/// as-is, joined with `\n`. Returns [`BlockMatch::unmatched`] when the
/// opener is malformed or no closing fence follows.
pub fn consume_fence(lines: &[&str]) -> BlockMatch {
    let Some(opener) = lines.first() else {
        return BlockMatch::unmatched();
    };
    let Some(caps) = OPEN.captures(opener) else {
        return BlockMatch::unmatched();
    };
    let language = caps.get(1).map_or("", |m| m.as_str());

    let Some(close) = lines.iter().skip(1).position(|line| CLOSE.is_match(line)) else {
        return BlockMatch::unmatched();
    };
    let body = lines[1..=close].join("\n");

    BlockMatch::new(
        format!(r#"<pre><code class="{language}">{body}</code></pre>"#),
        close + 2,
    )
}
