//! HTML text escaping.
//!
//! Fast-path optimized: scans for the first escapable byte with `memchr`,
//! then bulk-copies the segments between escapes. Used only when
//! [`crate::Options::escape_html`] is set.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

/// Lookup table for escapable bytes in text content.
/// `"` is included so escaped text is also safe inside `href="…"`.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into an output buffer.
///
/// Escapes `<`, `>`, `&` and `"`.
///
/// # Example
/// ```
/// use draftmark::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"<script>");
/// assert_eq!(out, b"&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut Vec<u8>, input: &[u8]) {
    let Some(mut pos) = first_text_escape(input) else {
        out.extend_from_slice(input);
        return;
    };

    out.extend_from_slice(&input[..pos]);

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !TEXT_ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }

        if let Some(&b) = input.get(pos) {
            out.extend_from_slice(escape_seq(b));
            pos += 1;
        }
    }
}

#[inline]
fn escape_seq(b: u8) -> &'static [u8] {
    match b {
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        b'&' => b"&amp;",
        b'"' => b"&quot;",
        _ => unreachable!("only table bytes are escaped"),
    }
}

/// Check if a byte slice needs any escaping.
#[inline]
pub fn needs_text_escape(input: &[u8]) -> bool {
    first_text_escape(input).is_some()
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Escape `input`, borrowing it when nothing needs escaping.
///
/// # Example
/// ```
/// use draftmark::escape::escape_text;
///
/// assert_eq!(escape_text("a & b"), "a &amp; b");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !needs_text_escape(input.as_bytes()) {
        return Cow::Borrowed(input);
    }
    let mut out = Vec::with_capacity(input.len() + input.len() / 8);
    escape_text_into(&mut out, input.as_bytes());
    // Only ASCII sequences replace ASCII bytes, so UTF-8 is preserved.
    Cow::Owned(String::from_utf8(out).unwrap_or_else(|e| {
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    }))
}
