//! Shared test utilities for the pandoctools test suite.
//!
//! Provides a throwaway directory layout with user and core profile roots,
//! a profile writer, and a scripted [`Console`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let roots = ProfileRoots::new();
//! write_profile(roots.core(), "Default", "cat");
//! let mut console = MockConsole::with_input(&["y", ""]);
//! ```

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::console::Console;
use crate::platform::{Platform, ToolRoots};

// =========================================================================
// Filesystem layout
// =========================================================================

/// A temp dir holding `user/`, `core/` and `docs/`.
pub struct ProfileRoots {
    tmp: TempDir,
    user: PathBuf,
    core: PathBuf,
    docs: PathBuf,
}

impl ProfileRoots {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let user = tmp.path().join("user");
        let core = tmp.path().join("core");
        let docs = tmp.path().join("docs");
        for dir in [&user, &core, &docs] {
            std::fs::create_dir_all(dir).unwrap();
        }
        Self {
            tmp,
            user,
            core,
            docs,
        }
    }

    pub fn user(&self) -> &Path {
        &self.user
    }

    pub fn core(&self) -> &Path {
        &self.core
    }

    pub fn doc_dir(&self) -> PathBuf {
        self.docs.clone()
    }

    /// Tool roots whose user and core roots are this layout's.
    pub fn tool_roots(&self) -> ToolRoots {
        ToolRoots::from_exe_dir(Platform::Unix, &self.tmp.path().join("bin"), self.user.clone())
            .with_core(self.core.clone())
    }
}

/// Write an executable `Profile-<name>.sh` into `dir` and return its path.
///
/// `body` goes below a `#!/bin/sh` line.
pub fn write_profile(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(Platform::Unix.profile_file_name(name));
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

// =========================================================================
// Scripted console
// =========================================================================

/// Console that answers from a fixed list of lines and records everything
/// shown or written. Runs out of input like a closed stdin.
#[derive(Default)]
pub struct MockConsole {
    input: VecDeque<String>,
    shown: Vec<String>,
    written: String,
}

impl MockConsole {
    pub fn with_input(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Every `show` call, in order.
    pub fn shown(&self) -> Vec<String> {
        self.shown.clone()
    }

    /// Everything passed to `write_text`, concatenated.
    pub fn written(&self) -> &str {
        &self.written
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for MockConsole {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.written.push_str(text);
        Ok(())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.shown.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}
