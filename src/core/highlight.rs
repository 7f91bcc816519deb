//! Marking a sub-range of an entry name for emphasis
//!
//! The core only decides *which* bytes to mark. How they look is up to the
//! [`Highlighter`] handed in by the caller.

use std::ops::Range;

/// Styles one already-selected piece of a name
pub trait Highlighter {
    fn emphasize(&self, text: &[u8]) -> Vec<u8>;
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Highlighter for Plain {
    fn emphasize(&self, text: &[u8]) -> Vec<u8> {
        text.to_vec()
    }
}

/// Return `text` with the bytes in `range` passed through `highlighter`.
///
/// Out of bounds ranges leave the text unchanged.
pub fn mark_range(text: &[u8], range: Range<usize>, highlighter: &dyn Highlighter) -> Vec<u8> {
    let Some(matched) = text.get(range.clone()) else {
        return text.to_vec();
    };

    let mut marked = text[..range.start].to_vec();
    marked.extend(highlighter.emphasize(matched));
    marked.extend_from_slice(&text[range.end..]);
    marked
}
