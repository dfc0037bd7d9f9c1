//! Markup output.
//!
//! [`HtmlWriter`] is an append-only buffer with helpers for the block tags
//! the editor understands. [`Renderer`] feeds it assembled fragments,
//! running the inline transformer over each block's text on the way.

use std::borrow::Cow;

use crate::block::{Fragment, FragmentSink, ListKind};
use crate::escape::escape_text;
use crate::inline;
use crate::Options;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use draftmark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.paragraph_start();
/// writer.write_string("Hello");
/// writer.paragraph_end();
/// assert_eq!(writer.into_string(), "<p>Hello</p>\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Markup is typically ~1.25x the Markdown it came from.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Wrap an existing buffer, keeping its allocation.
    #[inline]
    pub fn from_buffer(mut out: String) -> Self {
        out.clear();
        Self { out }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Block tags ---

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>\n");
    }

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.out.push(char::from(b'0' + level));
        self.write_str(">\n");
    }

    /// Write horizontal rule: `<hr />\n`
    #[inline]
    pub fn horizontal_rule(&mut self) {
        self.write_str("<hr />\n");
    }

    /// Write blockquote start: `<blockquote>\n`
    #[inline]
    pub fn blockquote_start(&mut self) {
        self.write_str("<blockquote>\n");
    }

    /// Write blockquote end: `</blockquote>\n`
    #[inline]
    pub fn blockquote_end(&mut self) {
        self.write_str("</blockquote>\n");
    }

    /// Write list start: `<ul>\n` or `<ol>\n`
    #[inline]
    pub fn list_start(&mut self, kind: ListKind) {
        match kind {
            ListKind::Unordered => self.write_str("<ul>\n"),
            ListKind::Ordered => self.write_str("<ol>\n"),
        }
    }

    /// Write list end: `</ul>\n` or `</ol>\n`
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        match kind {
            ListKind::Unordered => self.write_str("</ul>\n"),
            ListKind::Ordered => self.write_str("</ol>\n"),
        }
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("<li>");
    }

    /// Write list item end: `</li>\n`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>\n");
    }
}

/// Renders fragments into an [`HtmlWriter`].
pub struct Renderer<'w> {
    writer: &'w mut HtmlWriter,
    options: Options,
}

impl<'w> Renderer<'w> {
    /// Create a renderer writing into `writer`.
    pub fn new(writer: &'w mut HtmlWriter, options: Options) -> Self {
        Self { writer, options }
    }

    /// Write block text: escaped first if requested, then inline-transformed.
    fn text(&mut self, text: &str) {
        let text = if self.options.escape_html {
            escape_text(text)
        } else {
            Cow::Borrowed(text)
        };
        self.writer.write_string(&inline::transform(&text));
    }
}

impl<'a> FragmentSink<'a> for Renderer<'_> {
    fn push(&mut self, fragment: Fragment<'a>) {
        match fragment {
            Fragment::ListOpen(kind) => self.writer.list_start(kind),
            Fragment::ListClose(kind) => self.writer.list_end(kind),
            Fragment::ListItem(text) => {
                self.writer.li_start();
                self.text(text);
                self.writer.li_end();
            }
            Fragment::Heading { level, text } => {
                self.writer.heading_start(level);
                self.text(text);
                self.writer.heading_end(level);
            }
            Fragment::HorizontalRule => self.writer.horizontal_rule(),
            Fragment::Blockquote(text) => {
                self.writer.blockquote_start();
                self.writer.paragraph_start();
                self.text(text);
                self.writer.paragraph_end();
                self.writer.blockquote_end();
            }
            Fragment::Paragraph(text) => {
                self.writer.paragraph_start();
                self.text(text);
                self.writer.paragraph_end();
            }
        }
    }
}
