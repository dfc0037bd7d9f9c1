//! Line classifier.
//!
//! Looks at exactly one line and decides which block construct it is.
//! Rules are tried in a fixed order and the first match wins.

use crate::cursor::Cursor;

use super::event::{BlockKind, ListKind};

/// Heading markers, indexed by `level - 1`.
///
/// Classification walks this table from level 6 down to level 1. Every
/// marker ends in a mandatory space, so today no two levels can match the
/// same line; the longest-first walk is kept so that a future marker set
/// with colliding prefixes still resolves to the most specific level.
const HEADING_MARKERS: [&str; 6] = ["# ", "## ", "### ", "#### ", "##### ", "###### "];

/// Minimum run of `-` that forms a horizontal rule.
const MIN_RULE_LEN: usize = 3;

/// Classify a single input line.
///
/// A `\r` left by CRLF input is dropped before any rule is tried. Other
/// trailing whitespace still counts as the separator after a marker, so
/// `"- "` is an empty list item; it is only trimmed from the returned text.
///
/// # Example
/// ```
/// use draftmark::{classify_line, BlockKind};
///
/// assert_eq!(classify_line("## Setup"), BlockKind::Heading { level: 2, text: "Setup" });
/// assert_eq!(classify_line("---"), BlockKind::HorizontalRule);
/// assert_eq!(classify_line("plain words"), BlockKind::Paragraph("plain words"));
/// ```
pub fn classify_line(line: &str) -> BlockKind<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if let Some(kind) = try_heading(line) {
        return kind;
    }
    if is_horizontal_rule(line) {
        return BlockKind::HorizontalRule;
    }
    if let Some(text) = try_blockquote(line) {
        return BlockKind::Blockquote(text.trim_end());
    }
    if let Some(text) = try_list_item(line, ListKind::Unordered) {
        return BlockKind::UnorderedListItem(text.trim_end());
    }
    if let Some(text) = try_list_item(line, ListKind::Ordered) {
        return BlockKind::OrderedListItem(text.trim_end());
    }

    let line = line.trim_end();
    if line.is_empty() {
        return BlockKind::Blank;
    }
    BlockKind::Paragraph(line)
}

fn try_heading(line: &str) -> Option<BlockKind<'_>> {
    HEADING_MARKERS
        .iter()
        .enumerate()
        .rev()
        .find_map(|(idx, marker)| {
            line.strip_prefix(*marker).map(|text| BlockKind::Heading {
                level: idx as u8 + 1,
                text: text.trim_end(),
            })
        })
}

fn is_horizontal_rule(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= MIN_RULE_LEN && line.bytes().all(|b| b == b'-')
}

/// `>` followed by at most one stripped space.
fn try_blockquote(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Match a list marker of the given kind, returning the item text.
///
/// Leading spaces and tabs are allowed. The marker must be followed by at
/// least one space or tab, all of which are stripped from the text.
fn try_list_item(line: &str, kind: ListKind) -> Option<&str> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();

    match kind {
        ListKind::Unordered => {
            if !cursor.at_any(b"-*+") {
                return None;
            }
            cursor.bump();
        }
        ListKind::Ordered => {
            if cursor.skip_while(|b| b.is_ascii_digit()) == 0 || !cursor.eat(b'.') {
                return None;
            }
        }
    }

    if cursor.skip_whitespace() == 0 {
        return None;
    }
    Some(cursor.rest())
}
