//! Block assembler.
//!
//! Groups classified lines into blocks. The only state that survives from
//! one line to the next is the [`ListRunState`]; it is threaded through a
//! left fold over the lines together with the output sink, so a run can
//! never outlive the line that ends it.

use log::trace;
use smallvec::SmallVec;

use super::classify::classify_line;
use super::event::{BlockKind, Fragment, ListKind, ListRunState};

/// Fragments emitted for one line: at most a run close, a run open and the
/// line's own block.
pub type Fragments<'a> = SmallVec<[Fragment<'a>; 3]>;

/// Destination for assembled fragments.
pub trait FragmentSink<'a> {
    /// Append one fragment. Fragments arrive in output order.
    fn push(&mut self, fragment: Fragment<'a>);
}

impl<'a> FragmentSink<'a> for Vec<Fragment<'a>> {
    #[inline]
    fn push(&mut self, fragment: Fragment<'a>) {
        Vec::push(self, fragment);
    }
}

/// Advance the list state by one classified line.
///
/// Returns the new state and the fragments the line produces. Pure: the
/// same inputs always give the same outputs.
///
/// # Example
/// ```
/// use draftmark::{step, BlockKind, Fragment, ListKind, ListRunState};
///
/// let (state, out) = step(ListRunState::None, BlockKind::UnorderedListItem("a"));
/// assert_eq!(state, ListRunState::InList(ListKind::Unordered));
/// assert_eq!(&out[..], &[Fragment::ListOpen(ListKind::Unordered), Fragment::ListItem("a")]);
/// ```
pub fn step<'a>(state: ListRunState, kind: BlockKind<'a>) -> (ListRunState, Fragments<'a>) {
    let block = match kind {
        BlockKind::UnorderedListItem(text) => return list_item(state, ListKind::Unordered, text),
        BlockKind::OrderedListItem(text) => return list_item(state, ListKind::Ordered, text),
        BlockKind::Heading { level, text } => Some(Fragment::Heading { level, text }),
        BlockKind::HorizontalRule => Some(Fragment::HorizontalRule),
        BlockKind::Blockquote(text) => Some(Fragment::Blockquote(text)),
        BlockKind::Paragraph(text) => Some(Fragment::Paragraph(text)),
        BlockKind::Blank => None,
    };

    let mut out = Fragments::new();
    close_run(state, &mut out);
    out.extend(block);
    (ListRunState::None, out)
}

fn list_item<'a>(
    state: ListRunState,
    list: ListKind,
    text: &'a str,
) -> (ListRunState, Fragments<'a>) {
    let mut out = Fragments::new();
    if state != ListRunState::InList(list) {
        close_run(state, &mut out);
        out.push(Fragment::ListOpen(list));
    }
    out.push(Fragment::ListItem(text));
    (ListRunState::InList(list), out)
}

/// Fragments needed to close whatever is still open at end of input.
pub fn finish<'a>(state: ListRunState) -> Fragments<'a> {
    let mut out = Fragments::new();
    close_run(state, &mut out);
    out
}

#[inline]
fn close_run(state: ListRunState, out: &mut Fragments<'_>) {
    if let ListRunState::InList(list) = state {
        out.push(Fragment::ListClose(list));
    }
}

/// Run the assembler over `input`, pushing every fragment into `sink`.
///
/// Lines are split on `\n`. The sink is handed back once the final run,
/// if any, has been closed.
pub fn assemble<'a, S: FragmentSink<'a>>(input: &'a str, sink: S) -> S {
    let (state, mut sink) = input.split('\n').enumerate().fold(
        (ListRunState::None, sink),
        |(state, mut sink), (line_no, line)| {
            let kind = classify_line(line);
            trace!("line {}: {:?}", line_no + 1, kind);

            let (next, fragments) = step(state, kind);
            if next != state {
                trace!("list run {:?} -> {:?}", state, next);
            }
            fragments.into_iter().for_each(|f| sink.push(f));
            (next, sink)
        },
    );

    finish(state).into_iter().for_each(|f| sink.push(f));
    sink
}

/// Collect the fragments for `input` into a `Vec`.
pub fn fragments(input: &str) -> Vec<Fragment<'_>> {
    assemble(input, Vec::new())
}
