//! Running a profile.
//!
//! The profile is spawned directly as a program with the run's
//! [`Environment`] on top of the inherited one. The document goes to its
//! stdin and both output streams are captured. The exit status is recorded
//! and logged but never turned into an error: whatever the profile printed is
//! what the user sees.

use crate::environment::Environment;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Failed to start profile {path}: {source}")]
    Spawn { path: PathBuf, source: io::Error },
    #[error("IO error while running profile: {0}")]
    Io(#[from] io::Error),
}

/// Output of a finished profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

/// Run `profile_path` with `document` on stdin and wait for it to finish.
pub fn invoke(
    profile_path: &Path,
    document: &str,
    environment: &Environment,
) -> Result<Captured, InvokeError> {
    let mut command = Command::new(profile_path);
    environment.apply(&mut command);
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(profile = %profile_path.display(), "spawning profile");
    let mut child = command.spawn().map_err(|source| InvokeError::Spawn {
        path: profile_path.to_path_buf(),
        source,
    })?;

    // The child may fill its stdout pipe before it drains stdin.
    let stdin = child.stdin.take();
    let input = document.to_owned();
    let writer = thread::spawn(move || -> io::Result<()> {
        let Some(mut stdin) = stdin else {
            return Ok(());
        };
        match stdin.write_all(input.as_bytes()) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    });

    let output = child.wait_with_output()?;
    match writer.join() {
        Ok(result) => result?,
        Err(_) => return Err(io::Error::other("stdin writer thread panicked").into()),
    }

    let captured = Captured {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    };
    if !output.status.success() {
        tracing::warn!(
            profile = %profile_path.display(),
            status = %output.status,
            "profile exited unsuccessfully"
        );
    }
    Ok(captured)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::environment::FilePair;
    use crate::platform::{Platform, ToolRoots};
    use crate::test_helpers::{ProfileRoots, write_profile};

    fn environment() -> Environment {
        let roots = ToolRoots::from_exe_dir(
            Platform::Unix,
            Path::new("/env/bin"),
            PathBuf::from("/home/u/.pandoc/pandoctools"),
        );
        let files = FilePair::new(
            PathBuf::from("/docs/report.md"),
            PathBuf::from("/docs/report.md.html"),
        );
        Environment::build(&files, &roots, Platform::Unix)
    }

    #[test]
    fn document_goes_to_stdin() {
        let roots = ProfileRoots::new();
        let path = write_profile(roots.core(), "Upper", "tr a-z A-Z");

        let captured = invoke(&path, "hello\n", &environment()).unwrap();
        assert_eq!(captured.stdout, "HELLO\n");
        assert_eq!(captured.stderr, "");
        assert_eq!(captured.exit_code, Some(0));
    }

    #[test]
    fn environment_is_visible_to_profile() {
        let roots = ProfileRoots::new();
        let path = write_profile(
            roots.core(),
            "Env",
            "printf '%s %s %s' \"$output_file\" \"$in_ext\" \"$out_ext_full\"",
        );

        let captured = invoke(&path, "", &environment()).unwrap();
        assert_eq!(captured.stdout, "/docs/report.md.html md md.html");
    }

    #[test]
    fn stderr_is_captured_and_failure_is_not_an_error() {
        let roots = ProfileRoots::new();
        let path = write_profile(roots.core(), "Fail", "echo oops >&2\nexit 3");

        let captured = invoke(&path, "doc", &environment()).unwrap();
        assert_eq!(captured.stdout, "");
        assert_eq!(captured.stderr, "oops\n");
        assert_eq!(captured.exit_code, Some(3));
    }

    #[test]
    fn profile_ignoring_stdin_is_fine() {
        let roots = ProfileRoots::new();
        let path = write_profile(roots.core(), "Quiet", "echo done");
        let big = "x".repeat(1 << 20);

        let captured = invoke(&path, &big, &environment()).unwrap();
        assert_eq!(captured.stdout, "done\n");
    }

    #[test]
    fn missing_profile_is_spawn_error() {
        let result = invoke(Path::new("/does/not/exist.sh"), "", &environment());
        assert!(matches!(result, Err(InvokeError::Spawn { .. })));
    }
}
