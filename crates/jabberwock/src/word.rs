//! Word-boundary resolution strategies.
//!
//! The bridge has no "give me word boundaries" query. It offers a word
//! string with unreliable anchoring ([`AccessibleText::text_items`]) and an
//! exact range query ([`AccessibleText::text_range`]). The strategies here
//! either ignore the word hint entirely ([`GenericWordBoundaries`]) or use
//! the range query to recover the hint's true anchor
//! ([`IntellijWordBoundaries`]).

use jabberwock_core::logging::targets;
use jabberwock_core::{AccessibleText, Result};
use unicode_segmentation::UnicodeSegmentation;

/// A strategy that computes word boundaries within one element's text.
///
/// Implementations are stateless with respect to the text: calling
/// [`word_offsets`](Self::word_offsets) twice with the same offset against an
/// unchanged buffer yields the same pair.
pub trait WordBoundaries {
    /// The half-open `[start, end)` character range of the word touching
    /// `offset`.
    ///
    /// The caller guarantees `offset` is within the element's text. Bridge
    /// failures propagate unchanged; no strategy reports "not found".
    fn word_offsets(&self, text: &dyn AccessibleText, offset: usize) -> Result<(usize, usize)>;
}

/// The default word-boundary algorithm.
///
/// Fetches the element's text through the authoritative range query and
/// segments it by UAX #29 word boundaries, returning the segment containing
/// the offset. Whitespace and punctuation runs count as segments of their
/// own, so every in-bounds offset belongs to exactly one result.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericWordBoundaries;

impl WordBoundaries for GenericWordBoundaries {
    fn word_offsets(&self, text: &dyn AccessibleText, offset: usize) -> Result<(usize, usize)> {
        let len = text.char_count()?;
        if len == 0 {
            return Ok((0, 0));
        }
        let buffer = text.text_range(0, len - 1)?;

        let mut start = 0;
        for segment in buffer.split_word_bounds() {
            let end = start + segment.chars().count();
            if offset < end {
                return Ok((start, end));
            }
            start = end;
        }
        Ok((start, start))
    }
}

/// Word boundaries for JetBrains IntelliJ-Platform editors.
///
/// In this application family the bridge returns the right word *string* but
/// anchors it unreliably. This strategy treats the string as a hint of known
/// length `L` and probes all viable left-shifts of it against the exact
/// range query; the first shift whose range reproduces the hint
/// character-for-character is accepted. Smallest shift wins, so among
/// repeated tokens the occurrence closest to the bridge's own anchor is
/// preferred.
///
/// When no shift matches, the hint is untrustworthy at that offset and the
/// composed fallback strategy answers instead. The fallback is the *generic*
/// default, never another specialization, so a probe failure degrades to
/// exactly the behavior unspecialized elements get.
///
/// Note that a successful probe does not guarantee `start <= offset < end`:
/// at the largest shift the word lies entirely left of the queried offset.
/// That is intentional. The bridge's anchor was off, and the recovered
/// range is where the word actually is.
pub struct IntellijWordBoundaries {
    fallback: Box<dyn WordBoundaries>,
}

impl IntellijWordBoundaries {
    /// Create the resolver with the generic default as fallback.
    pub fn new() -> Self {
        Self {
            fallback: Box::new(GenericWordBoundaries),
        }
    }

    /// Create the resolver with a host-supplied fallback strategy.
    pub fn with_fallback(fallback: Box<dyn WordBoundaries>) -> Self {
        Self { fallback }
    }
}

impl Default for IntellijWordBoundaries {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBoundaries for IntellijWordBoundaries {
    fn word_offsets(&self, text: &dyn AccessibleText, offset: usize) -> Result<(usize, usize)> {
        let word = text.text_items(offset)?.word;
        let len = word.chars().count();

        if len == 0 {
            // A zero-length hint matches the empty range at shift 0.
            return Ok((offset, offset));
        }

        // The word can be on either side of the offset, so probe every
        // left-shift of it. Shifts past the buffer start cannot match.
        for shift in 0..=len {
            if shift > offset {
                break;
            }
            let start = offset - shift;
            if text.text_range(start, offset + len - shift - 1)? == word {
                tracing::trace!(
                    target: targets::WORD,
                    offset,
                    shift,
                    word = %word,
                    "probe matched"
                );
                return Ok((start, start + len));
            }
        }

        tracing::debug!(
            target: targets::WORD,
            offset,
            word = %word,
            "no shift reproduced the bridge's word; using the generic fallback"
        );
        self.fallback.word_offsets(text, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jabberwock_core::TextItems;

    /// A bridge stub over a fixed buffer, reporting a scripted word for
    /// every at-offset query. The range query is honest; the word hint is
    /// whatever the test wants the bridge to claim.
    struct ScriptedBridge {
        chars: Vec<char>,
        word: String,
    }

    impl ScriptedBridge {
        fn new(buffer: &str, word: &str) -> Self {
            Self {
                chars: buffer.chars().collect(),
                word: word.to_string(),
            }
        }
    }

    impl AccessibleText for ScriptedBridge {
        fn char_count(&self) -> Result<usize> {
            Ok(self.chars.len())
        }

        fn text_items(&self, _offset: usize) -> Result<TextItems> {
            Ok(TextItems::from_word(self.word.clone()))
        }

        fn text_range(&self, start: usize, end: usize) -> Result<String> {
            if end < start || start >= self.chars.len() {
                return Ok(String::new());
            }
            let end = end.min(self.chars.len() - 1);
            Ok(self.chars[start..=end].iter().collect())
        }
    }

    /// A fallback that always answers a fixed pair, for observing exactly
    /// when delegation happens.
    struct PinnedFallback(usize, usize);

    impl WordBoundaries for PinnedFallback {
        fn word_offsets(&self, _text: &dyn AccessibleText, _offset: usize) -> Result<(usize, usize)> {
            Ok((self.0, self.1))
        }
    }

    #[test]
    fn test_probe_accepts_bridge_anchor_when_range_confirms_it() {
        // The stub's buffer really does hold "dog" at chars 5..8, so the
        // zero-shift probe range [5, 7] reproduces the hint.
        let bridge = ScriptedBridge::new("12345dogxyz", "dog");
        let resolver = IntellijWordBoundaries::new();
        assert_eq!(resolver.word_offsets(&bridge, 5).unwrap(), (5, 8));
    }

    #[test]
    fn test_probe_recovers_misanchored_word() {
        // "dog" occupies chars 4..7; the bridge anchored it one to the
        // right. Shift 0 fails ("og "), shift 1 matches.
        let bridge = ScriptedBridge::new("cat dog bird", "dog");
        let resolver = IntellijWordBoundaries::new();
        assert_eq!(resolver.word_offsets(&bridge, 5).unwrap(), (4, 7));
    }

    #[test]
    fn test_probe_result_reproduces_the_word() {
        let bridge = ScriptedBridge::new("cat dog bird", "dog");
        let resolver = IntellijWordBoundaries::new();
        let (start, end) = resolver.word_offsets(&bridge, 5).unwrap();
        assert_eq!(bridge.text_range(start, end - 1).unwrap(), "dog");
    }

    #[test]
    fn test_probe_prefers_smallest_shift_for_repeated_tokens() {
        // "aa" appears at 0..2 and 3..5; both shifts 1 and 4 would match
        // for offset 4. The smaller correction wins.
        let bridge = ScriptedBridge::new("aa aa x", "aa");
        let resolver = IntellijWordBoundaries::new();
        assert_eq!(resolver.word_offsets(&bridge, 4).unwrap(), (3, 5));
    }

    #[test]
    fn test_probe_may_resolve_word_left_of_offset() {
        // The only match puts the word entirely left of the queried offset,
        // so offset == end. Intentional: the recovered range is where the
        // word actually is.
        let bridge = ScriptedBridge::new("dog c", "dog");
        let resolver = IntellijWordBoundaries::new();
        assert_eq!(resolver.word_offsets(&bridge, 3).unwrap(), (0, 3));
    }

    #[test]
    fn test_probe_exhaustion_delegates_to_fallback() {
        // The bridge claims a word the buffer nowhere contains.
        let bridge = ScriptedBridge::new("ab cd", "xyz");
        let resolver = IntellijWordBoundaries::with_fallback(Box::new(PinnedFallback(7, 9)));
        assert_eq!(resolver.word_offsets(&bridge, 1).unwrap(), (7, 9));
    }

    #[test]
    fn test_probe_exhaustion_matches_generic_answer_exactly() {
        let bridge = ScriptedBridge::new("alpha beta", "zzz");
        let resolver = IntellijWordBoundaries::new();
        let expected = GenericWordBoundaries.word_offsets(&bridge, 7).unwrap();
        assert_eq!(resolver.word_offsets(&bridge, 7).unwrap(), expected);
    }

    #[test]
    fn test_probe_is_idempotent() {
        let bridge = ScriptedBridge::new("cat dog bird", "dog");
        let resolver = IntellijWordBoundaries::new();
        let first = resolver.word_offsets(&bridge, 5).unwrap();
        let second = resolver.word_offsets(&bridge, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_word_hint_is_zero_width() {
        let bridge = ScriptedBridge::new("cat", "");
        let resolver = IntellijWordBoundaries::new();
        assert_eq!(resolver.word_offsets(&bridge, 1).unwrap(), (1, 1));
    }

    #[test]
    fn test_generic_returns_word_segment() {
        let bridge = ScriptedBridge::new("cat dog bird", "unused");
        assert_eq!(GenericWordBoundaries.word_offsets(&bridge, 5).unwrap(), (4, 7));
        assert_eq!(GenericWordBoundaries.word_offsets(&bridge, 0).unwrap(), (0, 3));
        assert_eq!(GenericWordBoundaries.word_offsets(&bridge, 8).unwrap(), (8, 12));
    }

    #[test]
    fn test_generic_treats_whitespace_as_its_own_segment() {
        let bridge = ScriptedBridge::new("cat dog", "unused");
        assert_eq!(GenericWordBoundaries.word_offsets(&bridge, 3).unwrap(), (3, 4));
    }

    #[test]
    fn test_generic_on_empty_buffer() {
        let bridge = ScriptedBridge::new("", "unused");
        assert_eq!(GenericWordBoundaries.word_offsets(&bridge, 0).unwrap(), (0, 0));
    }
}
