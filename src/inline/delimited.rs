//! Symmetric delimiter spans: emphasis, strong emphasis and code.

use memchr::memmem;

use super::Tag;

/// Wrap every `delim … delim` span of `text` in `tag`.
///
/// Spans are matched left to right without overlap; each one takes the
/// nearest closing delimiter that leaves at least one character of
/// content. Delimiters without a partner are left as they are.
///
/// Returns `None` when nothing matched, so callers can keep borrowing.
pub fn wrap_delimited(text: &str, delim: &str, tag: Tag) -> Option<String> {
    debug_assert!(!delim.is_empty() && delim.is_ascii());

    let bytes = text.as_bytes();
    let width = delim.len();
    let mut out: Option<String> = None;
    let mut pos = 0;

    while let Some(rel) = memmem::find(&bytes[pos..], delim.as_bytes()) {
        let open = pos + rel;
        let content_start = open + width;

        let Some(first) = text[content_start..].chars().next() else {
            break;
        };
        // If no closer follows this opener, none follows a later one either.
        let search_from = content_start + first.len_utf8();
        let Some(rel_close) = memmem::find(&bytes[search_from..], delim.as_bytes()) else {
            break;
        };
        let close = search_from + rel_close;

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 32));
        buf.push_str(&text[pos..open]);
        buf.push_str(tag.open);
        buf.push_str(&text[content_start..close]);
        buf.push_str(tag.close);
        pos = close + width;
    }

    out.map(|mut buf| {
        buf.push_str(&text[pos..]);
        buf
    })
}
