//! Logging conventions for Jabberwock.
//!
//! Jabberwock uses the `tracing` crate for instrumentation. The layer itself
//! never installs a subscriber; that is the host application's decision:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Call sites pass an explicit `target:` from [`targets`] so hosts can
//! filter per subsystem, e.g. `RUST_LOG=jabberwock::word=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Bridge query surface.
    pub const BRIDGE: &str = "jabberwock_core::bridge";
    /// Overlay selection decisions.
    pub const OVERLAY: &str = "jabberwock::overlay";
    /// Word-boundary resolution.
    pub const WORD: &str = "jabberwock::word";
    /// Application-module binding.
    pub const APP_MODULE: &str = "jabberwock::app_module";
    /// Settings loading.
    pub const CONFIG: &str = "jabberwock::config";
}
