//! User settings for the support layer.
//!
//! A small TOML file lets users tune the JetBrains specialization without
//! rebuilding the host:
//!
//! ```toml
//! word_probe = true
//! extra_executables = ["idea-eap", "pycharm-custom.exe"]
//! ```

use std::path::{Path, PathBuf};

use jabberwock_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::app_module::{
    self, executable_stem, is_jetbrains_executable, AppModule, IntellijAppModule,
};

/// Errors that can occur loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the support layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Whether JetBrains editors get the probing word-boundary resolver.
    /// Off means every element keeps the generic behavior.
    pub word_probe: bool,

    /// Additional executable names to treat as JetBrains IDEs.
    pub extra_executables: Vec<String>,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            word_probe: true,
            extra_executables: Vec::new(),
        }
    }
}

impl SupportConfig {
    /// Parse settings from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load settings from a TOML file.
    ///
    /// A missing file is reported as [`ConfigError::Io`]; callers that treat
    /// absence as "defaults" should check for the file themselves.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&input)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            word_probe = config.word_probe,
            extra = config.extra_executables.len(),
            "loaded settings"
        );
        Ok(config)
    }

    /// Feed the executable registry with this configuration's extras.
    pub fn apply(&self) {
        for exe in &self.extra_executables {
            app_module::register_executable(exe);
        }
    }

    /// Config-aware app-module lookup.
    ///
    /// Like [`app_module::app_module_for_executable`], but also matches this
    /// configuration's own extras and carries the `word_probe` toggle into
    /// the returned module.
    pub fn app_module_for(&self, exe: &str) -> Option<Box<dyn AppModule>> {
        let stem = executable_stem(exe);
        let known = is_jetbrains_executable(exe)
            || self
                .extra_executables
                .iter()
                .any(|extra| executable_stem(extra) == stem);
        if known {
            Some(Box::new(IntellijAppModule::with_word_probe(self.word_probe)))
        } else {
            None
        }
    }
}
