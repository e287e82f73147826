//! Core types for Jabberwock.
//!
//! This crate provides the bridge-facing foundation of the Jabberwock
//! support layer:
//!
//! - **Roles**: categorical element tags parsed from the bridge's role strings
//! - **Bridge surface**: the [`AccessibleText`] query trait and the
//!   [`TextItems`] record it returns
//! - **Elements**: the [`UiElement`] view the host implements on its
//!   accessibility-tree nodes
//! - **Errors**: [`BridgeError`] for failed bridge round-trips
//!
//! The crate holds no state and performs no I/O of its own; every query is
//! delegated to whatever implements [`AccessibleText`].
//!
//! # Example
//!
//! ```
//! use jabberwock_core::{BridgeFamily, Role};
//!
//! let role = Role::from_jab_name("editable text");
//! assert_eq!(role, Role::EditableText);
//! assert_ne!(BridgeFamily::JavaAccessBridge, BridgeFamily::Other);
//! ```

pub mod bridge;
pub mod element;
pub mod error;
pub mod logging;
pub mod role;

pub use bridge::{AccessibleText, BridgeFamily, TextItems};
pub use element::UiElement;
pub use error::{BridgeError, Result};
pub use role::Role;
