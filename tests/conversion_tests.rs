use draftmark::{fragments, to_html, Fragment, ListKind};

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(to_html(""), "");
}

#[test]
fn heading_contains_exact_text() {
    assert_eq!(to_html("# Title"), "<h1>Title</h1>\n");
    for level in 2..=6 {
        let input = format!("{} Title", "#".repeat(level));
        assert_eq!(to_html(&input), format!("<h{level}>Title</h{level}>\n"));
    }
}

#[test]
fn consecutive_items_form_one_list() {
    let html = to_html("- one\n- two\n- three");
    assert_eq!(
        html,
        "<ul>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ul>\n"
    );
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
    assert_eq!(html.matches("</ul>").count(), 1);
}

#[test]
fn empty_item_stays_in_run() {
    let html = to_html("- a\n- \n- c");
    assert_eq!(html, "<ul>\n<li>a</li>\n<li></li>\n<li>c</li>\n</ul>\n");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);

    assert_eq!(
        to_html("1. a\n2. \n3. c"),
        "<ol>\n<li>a</li>\n<li></li>\n<li>c</li>\n</ol>\n"
    );
    assert_eq!(to_html("# "), "<h1></h1>\n");
}

#[test]
fn mixed_markers_share_a_run() {
    let html = to_html("- a\n* b\n+ c");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn list_kind_switch_opens_new_run() {
    assert_eq!(
        to_html("- bullet\n1. number"),
        "<ul>\n<li>bullet</li>\n</ul>\n<ol>\n<li>number</li>\n</ol>\n"
    );
}

#[test]
fn ordered_then_unordered_switch() {
    let out = fragments("1. a\n2. b\n- c\n3. d");
    let opens: Vec<_> = out
        .iter()
        .filter_map(|f| match f {
            Fragment::ListOpen(kind) => Some(*kind),
            _ => None,
        })
        .collect();
    assert_eq!(
        opens,
        vec![ListKind::Ordered, ListKind::Unordered, ListKind::Ordered]
    );
}

#[test]
fn blank_lines_separate_paragraphs() {
    assert_eq!(
        to_html("First paragraph.\n\n\n\nSecond paragraph."),
        "<p>First paragraph.</p>\n<p>Second paragraph.</p>\n"
    );
}

#[test]
fn nested_emphasis_inside_strong() {
    assert_eq!(
        to_html("**bold *and italic* text**"),
        "<p><strong>bold <em>and italic</em> text</strong></p>\n"
    );
}

#[test]
fn stray_asterisk_is_literal() {
    let html = to_html("Price: 5 * 3");
    assert_eq!(html, "<p>Price: 5 * 3</p>\n");
    assert!(!html.contains("<em>"));
}

#[test]
fn list_at_end_of_input_is_closed() {
    assert_eq!(
        to_html("Intro\n1. first\n2. second"),
        "<p>Intro</p>\n<ol>\n<li>first</li>\n<li>second</li>\n</ol>\n"
    );
}

#[test]
fn link_becomes_anchor() {
    assert_eq!(
        to_html("[DSN](https://example.com)"),
        "<p><a href=\"https://example.com\">DSN</a></p>\n"
    );
}

#[test]
fn plain_text_is_one_paragraph_per_line() {
    let html = to_html("alpha\nbeta\n\ngamma");
    assert_eq!(html, "<p>alpha</p>\n<p>beta</p>\n<p>gamma</p>\n");
}

#[test]
fn heading_closes_open_list() {
    assert_eq!(
        to_html("- a\n## Next"),
        "<ul>\n<li>a</li>\n</ul>\n<h2>Next</h2>\n"
    );
}

#[test]
fn rule_and_quote_close_open_list() {
    assert_eq!(
        to_html("- a\n---\n- b\n> quote"),
        "<ul>\n<li>a</li>\n</ul>\n<hr />\n<ul>\n<li>b</li>\n</ul>\n<blockquote>\n<p>quote</p>\n</blockquote>\n"
    );
}

#[test]
fn crlf_input() {
    assert_eq!(
        to_html("# Title\r\n\r\n- a\r\n- b\r\n"),
        "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn inline_markup_in_every_block() {
    let html = to_html("# A *b*\n> `c`\n- **d**\n1. [e](/f)\ng_h_");
    assert_eq!(
        html,
        "<h1>A <em>b</em></h1>\n\
         <blockquote>\n<p><code>c</code></p>\n</blockquote>\n\
         <ul>\n<li><strong>d</strong></li>\n</ul>\n\
         <ol>\n<li><a href=\"/f\">e</a></li>\n</ol>\n\
         <p>g<em>h</em></p>\n"
    );
}

#[test]
fn generated_article() {
    let input = "\
## Why observability matters

Modern systems are **distributed**, and failures are *rarely* local.

### Key practices

1. Emit structured logs
2. Trace requests across services
3. Alert on symptoms, not causes

> Measure what users feel.

- Read the [guide](https://example.com/guide)
- Try `otel-collector` locally
";
    let expected = "\
<h2>Why observability matters</h2>
<p>Modern systems are <strong>distributed</strong>, and failures are <em>rarely</em> local.</p>
<h3>Key practices</h3>
<ol>
<li>Emit structured logs</li>
<li>Trace requests across services</li>
<li>Alert on symptoms, not causes</li>
</ol>
<blockquote>
<p>Measure what users feel.</p>
</blockquote>
<ul>
<li>Read the <a href=\"https://example.com/guide\">guide</a></li>
<li>Try <code>otel-collector</code> locally</li>
</ul>
";
    assert_eq!(to_html(input), expected);
}
