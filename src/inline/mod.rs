//! Inline transformer.
//!
//! Rewrites emphasis, code and link notation inside one block's text by
//! whole-string passes, always in this order:
//! 1. Strong emphasis: `**text**`, then `__text__`
//! 2. Emphasis: `*text*`, then `_text_`
//! 3. Code: `` `text` ``
//! 4. Links: `[label](target)`
//!
//! Each pass sees the output of the previous one. Strong emphasis must run
//! before single emphasis, otherwise `**x**` would be read as two `*`
//! spans around an inner pair.
//!
//! No escaping happens here: `<`, `>` and `&` in `text` reach the output
//! as they are. See [`crate::Options::escape_html`].

mod delimited;
mod links;

use std::borrow::Cow;

pub use delimited::wrap_delimited;
pub use links::rewrite_links;

/// Opening and closing markup for a delimited span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Opening tag.
    pub open: &'static str,
    /// Closing tag.
    pub close: &'static str,
}

/// `<strong>…</strong>`
pub const STRONG: Tag = Tag {
    open: "<strong>",
    close: "</strong>",
};

/// `<em>…</em>`
pub const EMPHASIS: Tag = Tag {
    open: "<em>",
    close: "</em>",
};

/// `<code>…</code>`
pub const CODE: Tag = Tag {
    open: "<code>",
    close: "</code>",
};

/// One substitution pass.
#[derive(Debug, Clone, Copy)]
enum Pass {
    Delimited(&'static str, Tag),
    Links,
}

impl Pass {
    #[inline]
    fn apply(self, text: &str) -> Option<String> {
        match self {
            Self::Delimited(delim, tag) => wrap_delimited(text, delim, tag),
            Self::Links => rewrite_links(text),
        }
    }
}

/// Pass order. Later passes only ever see earlier output.
const PASSES: [Pass; 6] = [
    Pass::Delimited("**", STRONG),
    Pass::Delimited("__", STRONG),
    Pass::Delimited("*", EMPHASIS),
    Pass::Delimited("_", EMPHASIS),
    Pass::Delimited("`", CODE),
    Pass::Links,
];

/// Apply all inline passes to `text`.
///
/// Borrows the input when no pass changes anything.
///
/// # Example
/// ```
/// use draftmark::inline::transform;
///
/// assert_eq!(
///     transform("**bold *and italic* text**"),
///     "<strong>bold <em>and italic</em> text</strong>"
/// );
/// ```
pub fn transform(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);
    for pass in PASSES {
        if let Some(rewritten) = pass.apply(&out) {
            out = Cow::Owned(rewritten);
        }
    }
    out
}
