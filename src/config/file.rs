//! TOML config-file schema and loading. A completely empty file must still
//! produce a working logger, so every field carries a serde default.

use crate::config::SharedConfig;
use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk counterpart of [`SharedConfig`]: the same four knobs, one section
/// per concern.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    /// Process-wide gating that applies to every sink.
    pub general: GeneralSection,
    /// Console sink toggle.
    pub console: ConsoleSection,
    /// File sink toggle and target path.
    pub file: FileSection,
}

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralSection {
    /// Whether DEBUG-level messages are emitted at all.
    pub debug: bool,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self { debug: true }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleSection {
    /// Enable console output.
    pub enabled: bool,
}

impl Default for ConsoleSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileSection {
    /// Enable file output.
    pub enabled: bool,
    /// Append-mode target, tilde-expanded. Absent means no file is opened.
    pub path: Option<String>,
}

impl ConfigFile {
    /// XDG-compliant default location under the user's config directory.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn default_path() -> Result<PathBuf, Error> {
        directories::ProjectDirs::from("", "", "taglog")
            .map(|dirs| dirs.config_dir().join("taglog.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Loads the default location, falling back to defaults when the file is
    /// absent so zero-config works out of the box.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, Error> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads an explicit path instead of the default location. Useful for
    /// tests and embedding hosts that keep config elsewhere.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Pushes every field into the shared state. Applying a file is a full
    /// reset: a missing `file.path` clears any currently open log file.
    ///
    /// # Errors
    /// Returns `Error::Io` when the configured log file cannot be opened.
    pub fn apply(&self, config: &SharedConfig) -> Result<(), Error> {
        config.set_debug_enabled(self.general.debug);
        config.set_console_enabled(self.console.enabled);
        config.set_file_enabled(self.file.enabled);
        config.set_file_path(self.file.path.as_deref().unwrap_or(""))?;
        Ok(())
    }
}
