//! Jabberwock - assistive-technology support for Java Access Bridge
//! applications, specialized for JetBrains IntelliJ-Platform IDEs.
//!
//! A screen reader's generic Java support works everywhere the Java Access
//! Bridge reports honest data. JetBrains editors are the exception that
//! motivates this crate: the bridge returns the right word *string* for an
//! offset but anchors it unreliably, so word-by-word reading stutters. This
//! layer classifies bridged elements, binds JetBrains processes to a
//! specialization, and recovers true word boundaries by probing the bridge's
//! exact range query.
//!
//! # Example
//!
//! ```
//! use jabberwock::app_module::app_module_for_executable;
//! use jabberwock::overlay::OverlayClass;
//!
//! // On process discovery:
//! let module = app_module_for_executable("idea64.exe").expect("a JetBrains IDE");
//!
//! // On element discovery the host offers its behavior-class list to the
//! // module, then constructs word handling from the front entry:
//! // module.choose_overlay_classes(&element, &mut classes);
//! // let resolver = classes[0].word_boundaries();
//! # let _ = (module, OverlayClass::GenericText);
//! ```

pub use jabberwock_core::*;

pub mod app_module;
pub mod config;
pub mod overlay;
pub mod word;

pub use app_module::{app_module_for_executable, AppModule, IntellijAppModule};
pub use config::{ConfigError, SupportConfig};
pub use overlay::{choose_overlay_classes, needs_word_probe, OverlayClass};
pub use word::{GenericWordBoundaries, IntellijWordBoundaries, WordBoundaries};
