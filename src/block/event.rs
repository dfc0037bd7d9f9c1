//! Block-level types shared by the classifier and the assembler.

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Unordered list (`-`, `*` or `+` markers).
    Unordered,
    /// Ordered list (`1.` style markers).
    Ordered,
}

/// Classification of a single input line.
///
/// Text-carrying variants borrow the line with the marker prefix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'a> {
    /// ATX heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text.
        text: &'a str,
    },
    /// A line of three or more `-`.
    HorizontalRule,
    /// A `>` quoted line.
    Blockquote(&'a str),
    /// An unordered list item.
    UnorderedListItem(&'a str),
    /// An ordered list item.
    OrderedListItem(&'a str),
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else.
    Paragraph(&'a str),
}

/// List state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListRunState {
    /// No list is open.
    #[default]
    None,
    /// A list of the given kind is open.
    InList(ListKind),
}

/// One unit of output markup, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Opening tag of a list run.
    ListOpen(ListKind),
    /// Closing tag of a list run.
    ListClose(ListKind),
    /// A list item with its raw text.
    ListItem(&'a str),
    /// A heading with its raw text.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text.
        text: &'a str,
    },
    /// A horizontal rule.
    HorizontalRule,
    /// A blockquote wrapping one paragraph.
    Blockquote(&'a str),
    /// A paragraph.
    Paragraph(&'a str),
}
