//! Block-level conversion.
//!
//! Line-oriented and single pass:
//! - [`classify_line`] decides what one line is, without context
//! - [`step`] folds the list state over classified lines and emits
//!   [`Fragment`]s in input order
//!
//! Recognised blocks are headings, horizontal rules, single-line
//! blockquotes, flat unordered/ordered lists and paragraphs. Anything the
//! classifier does not recognise becomes a paragraph.

mod assemble;
mod classify;
mod event;

pub use assemble::{assemble, finish, fragments, step, FragmentSink, Fragments};
pub use classify::classify_line;
pub use event::{BlockKind, Fragment, ListKind, ListRunState};
