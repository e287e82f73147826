//! Overlay selection for bridged elements.
//!
//! When the host discovers an element it assembles an ordered list of
//! behavior classes, most specific first, and offers this layer the chance
//! to prepend a specialization. The decision is a pure classification over
//! (bridge family, role); the host alone decides when the hook fires and
//! what it builds from the returned sequence.

use jabberwock_core::logging::targets;
use jabberwock_core::{BridgeFamily, Role, UiElement};

use crate::word::{GenericWordBoundaries, IntellijWordBoundaries, WordBoundaries};

/// A behavior class the host can construct text handling from.
///
/// Ordered lists of these are most-specific-first; the host typically uses
/// the front entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OverlayClass {
    /// Word boundaries probed against the bridge's exact range query, for
    /// JetBrains IntelliJ-Platform editors.
    IntellijText,
    /// The generic word-boundary behavior.
    GenericText,
}

impl OverlayClass {
    /// Construct the word-boundary strategy this class stands for.
    ///
    /// Selection happens here, at construction time; the returned strategy
    /// never re-dispatches on the element.
    pub fn word_boundaries(self) -> Box<dyn WordBoundaries> {
        match self {
            OverlayClass::IntellijText => Box::new(IntellijWordBoundaries::new()),
            OverlayClass::GenericText => Box::new(GenericWordBoundaries),
        }
    }
}

/// Whether an element needs the probing word-boundary specialization.
///
/// True exactly for editable text reached through the Java Access Bridge,
/// the family whose native word anchoring is unreliable.
pub fn needs_word_probe(family: BridgeFamily, role: Role) -> bool {
    family == BridgeFamily::JavaAccessBridge && role == Role::EditableText
}

/// Offer this layer's specializations for a newly discovered element.
///
/// Prepends [`OverlayClass::IntellijText`] when [`needs_word_probe`] holds;
/// otherwise the sequence is left exactly as the host passed it. A non-match
/// is the normal, silent case.
pub fn choose_overlay_classes(element: &dyn UiElement, classes: &mut Vec<OverlayClass>) {
    if needs_word_probe(element.bridge_family(), element.role()) {
        tracing::debug!(
            target: targets::OVERLAY,
            role = %element.role(),
            name = element.name().as_deref().unwrap_or(""),
            "applying IntelliJ text specialization"
        );
        classes.insert(0, OverlayClass::IntellijText);
    }
}
