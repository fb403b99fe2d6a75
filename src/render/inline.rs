//! Span-level rewrites applied to a single line.
//!
//! The chain is an ordered list of independent substitution passes. Each
//! pass replaces every non-overlapping match of its pattern, left to right,
//! and hands a fresh string to the next pass. Matched content is copied
//! verbatim: no nested processing, no escaping.
//!
//! Two orderings are load-bearing and pinned by [`CHAIN`]:
//! - bold before italic, so `**x**` is not read as two empty emphasis spans;
//! - strikethrough before subscript, so `~~x~~` is not read as two
//!   subscript markers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A span-level token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Bold,
    Italic,
    Link,
    Code,
    Strikethrough,
    Emoji,
    Highlight,
    Subscript,
    Superscript,
}

/// Application order of the inline passes.
pub const CHAIN: [InlineKind; 9] = [
    InlineKind::Bold,
    InlineKind::Italic,
    InlineKind::Link,
    InlineKind::Code,
    InlineKind::Strikethrough,
    InlineKind::Emoji,
    InlineKind::Highlight,
    InlineKind::Subscript,
    InlineKind::Superscript,
];

// Compile-time guard for the two ordering constraints.
const _: () = {
    assert!(chain_position(InlineKind::Bold) < chain_position(InlineKind::Italic));
    assert!(chain_position(InlineKind::Strikethrough) < chain_position(InlineKind::Subscript));
};

const fn chain_position(kind: InlineKind) -> usize {
    let mut i = 0;
    while i < CHAIN.len() {
        if CHAIN[i] as u8 == kind as u8 {
            return i;
        }
        i += 1;
    }
    CHAIN.len()
}

impl InlineKind {
    /// Delimiter pattern for this token class.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Bold => r"\*\*(.+?)\*\*",
            Self::Italic => r"\*(.+?)\*",
            Self::Link => r"\[(.*?)\]\((.*?)\)",
            Self::Code => r"`(.+?)`",
            Self::Strikethrough => r"~~(.+?)~~",
            Self::Emoji => r":([A-Za-z0-9_]+):",
            Self::Highlight => r"==(.+?)==",
            Self::Subscript => r"~(.+?)~",
            Self::Superscript => r"\^(.+?)\^",
        }
    }

    /// Replacement template, in `regex` expansion syntax.
    pub const fn template(self) -> &'static str {
        match self {
            Self::Bold => "<strong>${1}</strong>",
            Self::Italic => "<em>${1}</em>",
            Self::Link => r#"<a href="${2}">${1}</a>"#,
            Self::Code => "<code>${1}</code>",
            Self::Strikethrough => "<del>${1}</del>",
            Self::Emoji => r#"<span class="emoji">${1}</span>"#,
            Self::Highlight => "<mark>${1}</mark>",
            Self::Subscript => "<sub>${1}</sub>",
            Self::Superscript => "<sup>${1}</sup>",
        }
    }

    /// Apply this single pass to `line`.
    pub fn apply(self, line: &str) -> String {
        let rule = &RULES[chain_position(self)];
        rule.replace(line).into_owned()
    }
}

struct InlineRule {
    kind: InlineKind,
    pattern: Regex,
}

impl InlineRule {
    fn replace<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(line, self.kind.template())
    }
}

static RULES: LazyLock<Vec<InlineRule>> = LazyLock::new(|| {
    CHAIN
        .iter()
        .map(|&kind| InlineRule {
            kind,
            pattern: Regex::new(kind.pattern()).expect("inline pattern is valid"),
        })
        .collect()
});

/// Run the full inline chain over one line of text.
///
/// # Example
///
/// ```
/// use linemark::render::render_inline;
///
/// assert_eq!(render_inline("**hi** there"), "<strong>hi</strong> there");
/// ```
pub fn render_inline(line: &str) -> String {
    let mut current = line.to_string();
    for rule in RULES.iter() {
        current = rule.replace(&current).into_owned();
    }
    current
}
