//! Inline links: `[label](target)`.
//!
//! The label may not contain `]` and the target may not contain `)`; both
//! must be non-empty. There are no titles, images or reference links.

use memchr::memchr;

/// Rewrite every `[label](target)` in `text` as an anchor.
///
/// Returns `None` when there is no link, so callers can keep borrowing.
pub fn rewrite_links(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut pos = 0;
    let mut scan = 0;

    while let Some(rel) = memchr(b'[', &bytes[scan..]) {
        let open = scan + rel;

        // Every `[` before this `]` shares it, so a failure past this
        // point rules all of them out at once.
        let Some(rel_close) = memchr(b']', &bytes[open + 1..]) else {
            break;
        };
        let label_end = open + 1 + rel_close;
        if label_end == open + 1 || bytes.get(label_end + 1) != Some(&b'(') {
            scan = label_end + 1;
            continue;
        }

        let target_start = label_end + 2;
        let Some(rel_paren) = memchr(b')', &bytes[target_start..]) else {
            break;
        };
        let target_end = target_start + rel_paren;
        if target_end == target_start {
            scan = label_end + 1;
            continue;
        }

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 32));
        buf.push_str(&text[pos..open]);
        buf.push_str("<a href=\"");
        buf.push_str(&text[target_start..target_end]);
        buf.push_str("\">");
        buf.push_str(&text[open + 1..label_end]);
        buf.push_str("</a>");
        pos = target_end + 1;
        scan = pos;
    }

    out.map(|mut buf| {
        buf.push_str(&text[pos..]);
        buf
    })
}
