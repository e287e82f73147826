//! Per-application binding of specializations.
//!
//! The host assigns each bridged application an app module by its process
//! executable name. Only one module exists today, the JetBrains family, but
//! the registry accepts extra executable names at runtime so renamed or EAP
//! builds can opt in without a rebuild.

use jabberwock_core::logging::targets;
use jabberwock_core::UiElement;
use parking_lot::RwLock;

use crate::overlay::{self, OverlayClass};

/// Executables of JetBrains IntelliJ-Platform IDEs, lowercased, without
/// the `.exe` suffix.
const JETBRAINS_EXECUTABLES: &[&str] = &[
    "appcode",
    "clion",
    "clion64",
    "datagrip",
    "datagrip64",
    "dataspell",
    "dataspell64",
    "goland",
    "goland64",
    "idea",
    "idea64",
    "phpstorm",
    "phpstorm64",
    "pycharm",
    "pycharm64",
    "rider",
    "rider64",
    "rubymine",
    "rubymine64",
    "studio",
    "studio64",
    "webstorm",
    "webstorm64",
];

/// Executable names registered at runtime, normalized like the built-ins.
static EXTRA_EXECUTABLES: RwLock<Vec<String>> = RwLock::new(Vec::new());

/// Normalize an executable name for matching: lowercase, `.exe` stripped.
pub(crate) fn executable_stem(exe: &str) -> String {
    let lower = exe.to_ascii_lowercase();
    lower.strip_suffix(".exe").unwrap_or(&lower).to_owned()
}

/// Bind an additional executable name to the IntelliJ module.
pub fn register_executable(exe: &str) {
    let stem = executable_stem(exe);
    let mut extra = EXTRA_EXECUTABLES.write();
    if !extra.iter().any(|known| *known == stem) {
        tracing::debug!(target: targets::APP_MODULE, executable = %stem, "registered executable");
        extra.push(stem);
    }
}

/// Whether an executable name belongs to the JetBrains IDE family.
///
/// Matching is case-insensitive and ignores a trailing `.exe`. Includes
/// names added through [`register_executable`].
pub fn is_jetbrains_executable(exe: &str) -> bool {
    let stem = executable_stem(exe);
    JETBRAINS_EXECUTABLES.binary_search(&stem.as_str()).is_ok()
        || EXTRA_EXECUTABLES.read().iter().any(|known| *known == stem)
}

/// A per-application specialization module.
///
/// The host calls [`choose_overlay_classes`](Self::choose_overlay_classes)
/// once per newly discovered element of the bound application.
pub trait AppModule {
    /// The module's name, for diagnostics.
    fn name(&self) -> &str;

    /// Offer specializations for one element. See
    /// [`overlay::choose_overlay_classes`].
    fn choose_overlay_classes(&self, element: &dyn UiElement, classes: &mut Vec<OverlayClass>);
}

/// The app module for JetBrains IntelliJ-Platform IDEs.
#[derive(Debug, Clone, Copy)]
pub struct IntellijAppModule {
    word_probe: bool,
}

impl IntellijAppModule {
    /// Create the module with the word-probe specialization enabled.
    pub fn new() -> Self {
        Self { word_probe: true }
    }

    /// Create the module with the word-probe specialization toggled.
    ///
    /// With the probe off, editors keep the generic behavior; the user has
    /// asked for no specialization at all.
    pub fn with_word_probe(word_probe: bool) -> Self {
        Self { word_probe }
    }
}

impl Default for IntellijAppModule {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for IntellijAppModule {
    fn name(&self) -> &str {
        "intellij"
    }

    fn choose_overlay_classes(&self, element: &dyn UiElement, classes: &mut Vec<OverlayClass>) {
        if self.word_probe {
            overlay::choose_overlay_classes(element, classes);
        }
    }
}

/// Look up the app module for a process executable name.
///
/// Returns `None` for applications this layer has no specialization for;
/// that is the normal case.
pub fn app_module_for_executable(exe: &str) -> Option<Box<dyn AppModule>> {
    if is_jetbrains_executable(exe) {
        tracing::debug!(target: targets::APP_MODULE, executable = %exe, module = "intellij", "bound app module");
        Some(Box::new(IntellijAppModule::new()))
    } else {
        None
    }
}
