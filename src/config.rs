//! Launcher configuration module.
//!
//! Handles loading and validating the optional `config.toml` in the user
//! data root. It supplies the fallbacks used when neither the command line
//! nor the document front matter chooses a profile or output pattern, and
//! can relocate the bundled profile root.
//!
//! ## Config File Location
//!
//! ```text
//! ~/.pandoc/pandoctools/            # %APPDATA%\pandoc\pandoctools on Windows
//! ├── config.toml                   # Launcher config (optional)
//! ├── Profile-Default.sh            # User profile (overrides the bundled one)
//! └── Profile-Slides.sh
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! profile = "Default"   # Profile when no --profile and no front matter
//! out = "*.html"        # Output pattern when no --out and no front matter
//! # core_root = "/usr/share/pandoctools/sh"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Launcher configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Profile name or path used when nothing else selects one.
    pub profile: String,
    /// Output pattern used when nothing else selects one.
    pub out: String,
    /// Bundled profile root. When absent it is derived from the install prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_root: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            profile: "Default".to_string(),
            out: "*.html".to_string(),
            core_root: None,
        }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.trim().is_empty() {
            return Err(ConfigError::Validation("profile must not be empty".into()));
        }
        if self.out.trim().is_empty() {
            return Err(ConfigError::Validation("out must not be empty".into()));
        }
        Ok(())
    }
}

/// Load `config.toml` from the user data root.
///
/// A missing file yields the stock defaults. A file that exists but is not
/// valid TOML, has unknown keys, or fails validation is an error.
pub fn load_config(user_root: &Path) -> Result<LauncherConfig, ConfigError> {
    let path = user_root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(LauncherConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: LauncherConfig = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded launcher config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Printed by `pandoctools gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Pandoctools Configuration
# =========================
# Place this file in the user data folder:
#   ~/.pandoc/pandoctools/config.toml            (Linux, macOS)
#   %APPDATA%\pandoc\pandoctools\config.toml     (Windows)
#
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.
#
# Precedence for profile and out:
#   command line > document front matter > this file > built-in default

# Profile name (looked up as Profile-<name>.sh / .bat) or path to a script.
profile = "Default"

# Output file pattern. "*" is replaced by the input file name,
# relative patterns are resolved against the input file's folder.
out = "*.html"

# Folder with the bundled profiles. Derived from the install location
# when omitted.
# core_root = "/usr/share/pandoctools/sh"
"##
}
