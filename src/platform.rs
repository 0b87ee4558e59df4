//! Platform capability table.
//!
//! Profiles are shell scripts on Unix and batch files on Windows, and the
//! helper scripts exported to them differ between the two. Everything that
//! varies lives in one static [`PlatformSpec`] per [`Platform`], chosen once
//! at startup with [`Platform::current`].
//!
//! | | Unix | Windows |
//! |---|---|---|
//! | Profile extension | `sh` | `bat` |
//! | Scripts dir | `bin` | `Scripts` |
//! | Core dir | `sh` | `bat` |
//! | Helper value | `/env/bin/pandoctools-import` | `call "C:\env\Scripts\pandoctools-import.bat"` |
//! | User data | `$HOME/.pandoc/pandoctools` | `%APPDATA%\pandoc\pandoctools` |

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Supported platform families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Unix,
    Windows,
}

/// How a helper script is referenced in its environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperStyle {
    /// The bare path, meant to be sourced or executed by the profile.
    Path,
    /// A `call "<path>"` statement, meant to be expanded in a batch file.
    Call,
}

/// A helper script exported to profiles under a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helper {
    pub var: &'static str,
    pub script: &'static str,
}

/// Everything that differs between platform families.
#[derive(Debug)]
pub struct PlatformSpec {
    /// Extension of profile files: `Profile-<name>.<script_ext>`.
    pub script_ext: &'static str,
    /// Directory under the install root that holds the helper scripts.
    pub scripts_dir: &'static str,
    /// Directory name of the bundled profiles for this platform.
    pub core_dir: &'static str,
    pub helper_style: HelperStyle,
    pub helpers: &'static [Helper],
}

const UNIX: PlatformSpec = PlatformSpec {
    script_ext: "sh",
    scripts_dir: "bin",
    core_dir: "sh",
    helper_style: HelperStyle::Path,
    helpers: &[
        Helper { var: "import", script: "pandoctools-import" },
        Helper { var: "source", script: "path-source" },
        Helper { var: "resolve", script: "pandoctools-resolve" },
    ],
};

const WINDOWS: PlatformSpec = PlatformSpec {
    script_ext: "bat",
    scripts_dir: "Scripts",
    core_dir: "bat",
    helper_style: HelperStyle::Call,
    helpers: &[
        Helper { var: "import", script: "pandoctools-import.bat" },
        Helper { var: "source", script: "path-source.bat" },
        Helper { var: "r", script: "path-run.bat" },
        Helper { var: "set_resolve", script: "pandoctools-resolve.bat" },
    ],
};

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn spec(self) -> &'static PlatformSpec {
        match self {
            Platform::Unix => &UNIX,
            Platform::Windows => &WINDOWS,
        }
    }

    /// File name of a named profile, e.g. `Profile-Default.sh`.
    pub fn profile_file_name(self, name: &str) -> String {
        format!("Profile-{}.{}", name, self.spec().script_ext)
    }

    /// Render a helper script reference in this platform's style.
    pub fn helper_value(self, scripts: &Path, helper: &Helper) -> String {
        let path = scripts.join(helper.script);
        match self.spec().helper_style {
            HelperStyle::Path => path.display().to_string(),
            HelperStyle::Call => format!("call \"{}\"", path.display()),
        }
    }

    /// Default user data root, where user profiles and `config.toml` live.
    ///
    /// Returns `None` when the home (Unix) or roaming app data (Windows)
    /// directory cannot be determined.
    pub fn default_user_root(self) -> Option<PathBuf> {
        match self {
            Platform::Unix => dirs::home_dir().map(|h| h.join(".pandoc").join("pandoctools")),
            Platform::Windows => dirs::config_dir().map(|d| d.join("pandoc").join("pandoctools")),
        }
    }
}

/// Filesystem locations published to profiles and used for profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolRoots {
    /// Install root of the launcher (parent of the scripts dir).
    pub env_path: PathBuf,
    /// Directory holding the helper scripts.
    pub scripts: PathBuf,
    /// User profile root, searched first.
    pub user: PathBuf,
    /// Bundled profile root, searched second.
    pub core: PathBuf,
}

impl ToolRoots {
    /// Derive the roots from the directory of the running executable.
    ///
    /// When the executable sits in the platform's scripts dir (`<env>/bin`),
    /// its parent is the install root; otherwise the executable's own
    /// directory is. The core root defaults to
    /// `<env_path>/share/pandoctools/<core_dir>`.
    pub fn from_exe_dir(platform: Platform, exe_dir: &Path, user: PathBuf) -> Self {
        let spec = platform.spec();
        let in_scripts_dir = exe_dir
            .file_name()
            .is_some_and(|n| n.eq_ignore_ascii_case(spec.scripts_dir));
        let env_path = match exe_dir.parent() {
            Some(parent) if in_scripts_dir => parent.to_path_buf(),
            _ => exe_dir.to_path_buf(),
        };
        let scripts = env_path.join(spec.scripts_dir);
        let core = env_path
            .join("share")
            .join("pandoctools")
            .join(spec.core_dir);
        Self {
            env_path,
            scripts,
            user,
            core,
        }
    }

    /// Replace the core root, e.g. from the `core_root` config key.
    pub fn with_core(mut self, core: PathBuf) -> Self {
        self.core = core;
        self
    }
}
