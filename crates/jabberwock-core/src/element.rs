//! The host-owned view of one accessibility-tree node.

use crate::bridge::BridgeFamily;
use crate::role::Role;

/// Trait implemented by the host runtime on its accessibility-tree nodes.
///
/// This layer never creates or destroys elements; it only reads enough of
/// them to classify: where the element came from and what role it declares.
/// The optional accessors exist for diagnostics and default to nothing.
pub trait UiElement {
    /// The accessibility API family this element was discovered through.
    fn bridge_family(&self) -> BridgeFamily;

    /// The element's declared role.
    fn role(&self) -> Role;

    /// A human-readable name for the element, if the host tracks one.
    fn name(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EditorPane;

    impl UiElement for EditorPane {
        fn bridge_family(&self) -> BridgeFamily {
            BridgeFamily::JavaAccessBridge
        }

        fn role(&self) -> Role {
            Role::EditableText
        }
    }

    #[test]
    fn test_element_defaults() {
        let pane = EditorPane;
        assert_eq!(pane.role(), Role::EditableText);
        assert!(pane.name().is_none());
    }
}
