//! The accessible-text query surface supplied by the access bridge.
//!
//! The bridge exposes exactly two text queries this layer cares about: an
//! at-offset item query whose word anchoring is unreliable, and a literal
//! range query that is authoritative. Everything in `jabberwock` is built on
//! treating the first as a hint and the second as ground truth.

use crate::error::Result;

/// The accessibility API family an element originates from.
///
/// Overlay decisions are scoped to the Java Access Bridge; elements reached
/// through any other path keep their host-assigned behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BridgeFamily {
    /// The Java Access Bridge (Swing/AWT applications).
    JavaAccessBridge,
    /// Any other accessibility API.
    Other,
}

/// The bridge's answer to an at-offset item query.
///
/// Mirrors the bridge's own record: the letter, word, and sentence touching
/// one offset, fetched in a single round-trip. The word's placement relative
/// to the queried offset is unspecified; only its content can be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItems {
    /// The character at the offset, if the bridge reported one.
    pub letter: Option<char>,
    /// The word touching the offset. Content is reliable, anchoring is not.
    pub word: String,
    /// The sentence containing the offset.
    pub sentence: String,
}

impl TextItems {
    /// Construct items carrying only a word, for callers that have nothing
    /// else to report.
    pub fn from_word(word: impl Into<String>) -> Self {
        Self {
            letter: None,
            word: word.into(),
            sentence: String::new(),
        }
    }
}

/// Read-only text queries against one element of a bridged application.
///
/// Implementations wrap a live bridge context (one synchronous inter-process
/// round-trip per call) or, in tests, a scripted buffer. Offsets are
/// zero-based *character* indices, the bridge's unit.
///
/// Range bounds are INCLUSIVE on both ends, matching the bridge's native
/// query; a range whose end precedes its start yields the empty string.
pub trait AccessibleText {
    /// Total number of characters in the element's text.
    fn char_count(&self) -> Result<usize>;

    /// The letter/word/sentence touching `offset`.
    ///
    /// The returned word is a best-effort guess: the bridge is trusted to
    /// return *some* word string but not to place it correctly relative to
    /// `offset`.
    fn text_items(&self, offset: usize) -> Result<TextItems>;

    /// The literal characters in `[start, end]`, inclusive. Authoritative.
    fn text_range(&self, start: usize, end: usize) -> Result<String>;
}
