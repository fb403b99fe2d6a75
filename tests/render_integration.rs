use linemark::render::{
    BlockKind, RenderOptions, classify, process_line, render_inline, render_lines, split_lines,
};
use linemark::{render, render_with};
use proptest::prelude::*;

#[test]
fn test_title_renders_as_h1() {
    assert_eq!(render("# Title"), "<h1>Title</h1>");
}

#[test]
fn test_header_with_bold_markers_is_not_inline_processed() {
    assert_eq!(render("## **Important**"), "<h2>**Important**</h2>");
}

#[test]
fn test_table_renders_and_consumes_three_lines() {
    let source = "| A | B |\n| - | - |\n| 1 | 2 |";
    let lines = split_lines(source);
    let block = process_line(&lines, 0, &RenderOptions::default());
    assert_eq!(
        block.html,
        "<table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
    assert_eq!(block.lines_consumed, 3);
    assert_eq!(render(source), block.html);
}

#[test]
fn test_fenced_code_consumes_three_lines_without_escaping() {
    assert_eq!(
        render("```js\nconst x=1;\n```"),
        r#"<pre><code class="js">const x=1;</code></pre>"#
    );
    let lines = split_lines("```js\nif (a < b) {}\n```");
    let block = process_line(&lines, 0, &RenderOptions::default());
    assert_eq!(block.lines_consumed, 3);
    assert!(block.html.contains("if (a < b) {}"));
}

#[test]
fn test_task_items() {
    assert_eq!(
        render("- [x] done"),
        r#"<li><input type="checkbox" checked disabled>done</li>"#
    );
    assert!(!render("- [ ] todo").contains("checked"));
}

#[test]
fn test_inline_chain_composition() {
    assert_eq!(
        render("**a** *b* ~~c~~ ==d== ^e^ ~f~"),
        "<strong>a</strong> <em>b</em> <del>c</del> <mark>d</mark> <sup>e</sup> <sub>f</sub><br>"
    );
}

#[test]
fn test_degenerate_inputs() {
    assert_eq!(render(""), "");
    assert_eq!(render(" \t "), " \t <br>");
    let unterminated = render("```\nnever closed\nstill open");
    assert!(unterminated.ends_with("never closed<br>still open<br>"));
}

#[test]
fn test_sample_document() {
    let html = render(include_str!("fixtures/sample.md"));

    assert!(html.starts_with("<h1>Release notes</h1><br>"));
    assert!(html.contains("<blockquote>Everything that changed since the last build.</blockquote>"));
    assert!(html.contains(
        r#"<li><input type="checkbox" checked disabled>Render **headers** and quotes</li>"#
    ));
    assert!(html.contains(
        "<pre><code class=\"rust\">fn main() {\n    println!(\"<hello>\");\n}</code></pre>"
    ));
    assert!(html.contains(
        "<table><thead><tr><th>Feature</th><th>Status</th></tr></thead>\
         <tbody><tr><td>Tables</td><td>done</td></tr><tr><td>Fences</td><td>done</td></tr></tbody></table>"
    ));
    assert!(html.contains(
        r#"Text with <em>emphasis</em>, <code>code</code>, a <a href="https://example.com">link</a> and <span class="emoji">tada</span>.<br>"#
    ));
    assert!(html.ends_with(
        "Chemistry: H<sub>2</sub>O, maths: x<sup>2</sup>, <mark>highlight</mark> and <del>strike</del>.<br>"
    ));
}

#[test]
fn test_sample_document_classification() {
    let source = include_str!("fixtures/sample.md");
    let lines = split_lines(source);
    assert_eq!(classify(&lines, 0), BlockKind::Header(1));
    assert_eq!(classify(&lines, 2), BlockKind::Blockquote);
    assert_eq!(classify(&lines, 6), BlockKind::TaskItem);
}

#[test]
fn test_inline_blocks_option() {
    let options = RenderOptions::default().with_inline_block_content(true);
    assert_eq!(
        render_with("> see `code`", &options),
        "<blockquote>see <code>code</code></blockquote>"
    );
}

fn markdownish() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r"[#>`|\-\[\]x *~=^:_()a-z\n]{0,200}").expect("valid strategy")
}

proptest! {
    #[test]
    fn plain_lines_only_gain_a_line_break(line in "[a-zA-Z0-9 ,.!?]{1,60}") {
        prop_assert_eq!(render(&line), format!("{line}<br>"));
    }

    #[test]
    fn plain_line_documents_render_line_by_line(
        lines in proptest::collection::vec("[a-zA-Z0-9 ,.]{1,30}", 1..20)
    ) {
        let document = lines.join("\n");
        let expected: String = lines.iter().map(|l| format!("{l}<br>")).collect();
        prop_assert_eq!(render(&document), expected);
    }

    #[test]
    fn every_step_advances_and_fragments_concatenate(source in markdownish()) {
        let lines = split_lines(&source);
        let options = RenderOptions::default();
        let mut index = 0;
        let mut covered = 0;
        let mut html = String::new();
        while index < lines.len() {
            let block = process_line(&lines, index, &options);
            prop_assert!(block.lines_consumed >= 1);
            prop_assert!(index + block.lines_consumed <= lines.len());
            covered += block.lines_consumed;
            index += block.lines_consumed;
            html.push_str(&block.html);
        }
        prop_assert_eq!(covered, lines.len());
        prop_assert_eq!(html, render_lines(&lines, &options));
    }

    #[test]
    fn inline_chain_is_deterministic(line in "[a-z *~=^:`\\[\\]()]{0,80}") {
        prop_assert_eq!(render_inline(&line), render_inline(&line));
    }
}
