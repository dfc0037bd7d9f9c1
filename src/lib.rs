//! draftmark: single-pass Markdown to editor markup converter
//!
//! Takes loosely-structured Markdown, typically the body of a text
//! generation response, and produces block-structured HTML that a
//! rich-text editor can load as a document.
//!
//! # Design Principles
//! - Total: every input converts, nothing panics, there is no error type
//! - Single pass: lines are classified once and folded into blocks
//! - No regex: byte-level scanning with `memchr`
//! - Degrade to paragraph: anything unrecognised is literal text
//!
//! # Supported Markdown
//! Headings (`#` to `######`), `---` rules, single-line `>` quotes, flat
//! `-`/`*`/`+` and `1.` lists, paragraphs, and inline `**strong**`,
//! `*emphasis*`, `` `code` `` and `[links](url)`.

pub mod block;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod render;

use log::debug;

// Re-export primary types
pub use block::{
    assemble, classify_line, fragments, step, BlockKind, Fragment, FragmentSink, ListKind,
    ListRunState,
};
pub use render::{HtmlWriter, Renderer};

/// Conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Escape `<`, `>`, `&` and `"` in block text before inline markup is
    /// applied. Off by default: raw characters pass straight through.
    pub escape_html: bool,
}

/// Convert Markdown to markup.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = draftmark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to markup with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to markup, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to markup into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut String, options: &Options) {
    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render_to_writer(input, &mut writer, options);
    *out = writer.into_string();
}

/// Render Markdown into an HtmlWriter.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    let start = writer.len();
    assemble(input, Renderer::new(writer, *options));
    debug!(
        "converted {} bytes ({} lines) into {} bytes of markup",
        input.len(),
        input.split('\n').count(),
        writer.len() - start
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(to_html("Hello, world!"), "<p>Hello, world!</p>\n");
    }

    #[test]
    fn test_raw_html_passes_through() {
        assert_eq!(
            to_html("<script>alert('x')</script>"),
            "<p><script>alert('x')</script></p>\n"
        );
    }

    #[test]
    fn test_escape_html_option() {
        let html = to_html_with_options("<b>&</b>", &Options { escape_html: true });
        assert_eq!(html, "<p>&lt;b&gt;&amp;&lt;/b&gt;</p>\n");
    }

    #[test]
    fn test_escaped_link_target() {
        let html = to_html_with_options(
            "[q](/search?a=1&b=\"2\")",
            &Options { escape_html: true },
        );
        assert_eq!(
            html,
            "<p><a href=\"/search?a=1&amp;b=&quot;2&quot;\">q</a></p>\n"
        );
    }

    #[test]
    fn test_heading_all_levels() {
        for level in 1..=6 {
            let input = format!("{} Heading", "#".repeat(level));
            assert_eq!(to_html(&input), format!("<h{level}>Heading</h{level}>\n"));
        }
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(to_html("---"), "<hr />\n");
        assert_eq!(to_html("***"), "<p><em>*</em></p>\n");
    }

    #[test]
    fn test_multiple_paragraphs() {
        assert_eq!(to_html("First\n\n\nSecond"), "<p>First</p>\n<p>Second</p>\n");
    }

    #[test]
    fn test_consecutive_lines_are_separate_paragraphs() {
        assert_eq!(to_html("Line 1\nLine 2"), "<p>Line 1</p>\n<p>Line 2</p>\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_only_whitespace() {
        assert_eq!(to_html("   \n\n   "), "");
    }

    #[test]
    fn test_to_html_into_reuses_buffer() {
        let mut buffer = String::from("old contents");
        to_html_into("# Test", &mut buffer);
        assert_eq!(buffer, "<h1>Test</h1>\n");
    }

    #[test]
    fn test_list_then_paragraph() {
        assert_eq!(
            to_html("- a\n- b\nafter"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>after</p>\n"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            to_html("> Quote **me**"),
            "<blockquote>\n<p>Quote <strong>me</strong></p>\n</blockquote>\n"
        );
    }

    #[test]
    fn test_complex_document() {
        let input = "# Main Title\n\nIntro with *emphasis*.\n\n## Steps\n\n1. First\n2. Second\n\n---\n\n- [Docs](https://example.com)\n";
        let expected = "<h1>Main Title</h1>\n\
                        <p>Intro with <em>emphasis</em>.</p>\n\
                        <h2>Steps</h2>\n\
                        <ol>\n<li>First</li>\n<li>Second</li>\n</ol>\n\
                        <hr />\n\
                        <ul>\n<li><a href=\"https://example.com\">Docs</a></li>\n</ul>\n";
        assert_eq!(to_html(input), expected);
    }
}
