//! Element roles reported by the access bridge.

use std::fmt;

/// The role of an element in the bridged application's accessibility tree.
///
/// This enum covers the roles this layer makes decisions about, plus the
/// common ones worth naming in diagnostics. The Java Access Bridge reports
/// roles as localizable strings; [`Role::from_jab_name`] parses the
/// en-US forms and anything unrecognized collapses to [`Role::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Role {
    /// A role this layer has no name for.
    #[default]
    Unknown,

    /// An editable text component (editor panes, text fields in edit mode).
    EditableText,

    /// A non-editable text component.
    Text,

    /// A static label.
    Label,

    /// A password text field.
    PasswordText,

    /// A push button.
    PushButton,

    /// A checkbox.
    CheckBox,

    /// A combo box.
    ComboBox,

    /// A list of items.
    List,

    /// An item within a list.
    ListItem,

    /// A menu (popup or submenu).
    Menu,

    /// A menu item.
    MenuItem,

    /// A tree view.
    Tree,

    /// A generic panel.
    Panel,

    /// A top-level frame.
    Frame,

    /// A dialog box.
    Dialog,

    /// A scroll pane.
    ScrollPane,

    /// A tool bar.
    ToolBar,
}

impl Role {
    /// Parse a role from the bridge's role string.
    pub fn from_jab_name(name: &str) -> Self {
        match name {
            "editable text" => Role::EditableText,
            "text" => Role::Text,
            "label" => Role::Label,
            "password text" => Role::PasswordText,
            "push button" => Role::PushButton,
            "check box" => Role::CheckBox,
            "combo box" => Role::ComboBox,
            "list" => Role::List,
            "list item" => Role::ListItem,
            "menu" => Role::Menu,
            "menu item" => Role::MenuItem,
            "tree" => Role::Tree,
            "panel" => Role::Panel,
            "frame" => Role::Frame,
            "dialog" => Role::Dialog,
            "scroll pane" => Role::ScrollPane,
            "tool bar" => Role::ToolBar,
            _ => Role::Unknown,
        }
    }

    /// The bridge's en-US string for this role.
    pub fn as_jab_name(self) -> &'static str {
        match self {
            Role::Unknown => "unknown",
            Role::EditableText => "editable text",
            Role::Text => "text",
            Role::Label => "label",
            Role::PasswordText => "password text",
            Role::PushButton => "push button",
            Role::CheckBox => "check box",
            Role::ComboBox => "combo box",
            Role::List => "list",
            Role::ListItem => "list item",
            Role::Menu => "menu",
            Role::MenuItem => "menu item",
            Role::Tree => "tree",
            Role::Panel => "panel",
            Role::Frame => "frame",
            Role::Dialog => "dialog",
            Role::ScrollPane => "scroll pane",
            Role::ToolBar => "tool bar",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_jab_name())
    }
}
