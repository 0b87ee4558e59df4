//! Text shown to the user.
//!
//! Every function here is pure and returns a `String`; writing happens through
//! [`crate::console::Console`] so the exact wording is testable.
//!
//! # Interactive run
//!
//! ```text
//! Profile code:
//!
//! #!/bin/sh
//! pandoc -f markdown -t html -o "$output_file"
//!
//! Type 'y/yes' to continue with:
//!     Profile: Default
//!     Profile path: /home/u/.pandoc/pandoctools/Profile-Default.sh
//! Or type 'n/no' to exit. Then press Enter.
//! ```

use crate::invoke::Captured;
use crate::launch::Plan;
use std::path::Path;

pub const RETRY_HINT: &str = "Please respond with 'y' or 'n'.";
pub const PAUSE_PROMPT: &str = "Press Enter to continue...";

/// Header plus the full source of the profile about to run.
pub fn format_profile_code(code: &str) -> String {
    format!("Profile code:\n\n{code}")
}

/// The yes/no question naming the profile and where it was found.
pub fn format_confirmation(profile_name: &str, profile_path: &Path) -> String {
    format!(
        "Type 'y/yes' to continue with:\n    Profile: {}\n    Profile path: {}\nOr type 'n/no' to exit. Then press Enter.",
        profile_name,
        profile_path.display()
    )
}

/// The child's stdout followed by its stderr, as one block of text.
pub fn format_relay(captured: &Captured) -> String {
    let mut text = captured.stdout.clone();
    if !captured.stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&captured.stderr);
    }
    text
}

/// The resolved plan as pretty-printed JSON, for `--dry-run`.
pub fn format_plan(plan: &Plan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(stdout: &str, stderr: &str) -> Captured {
        Captured {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code: Some(0),
        }
    }

    #[test]
    fn profile_code_has_header() {
        assert_eq!(format_profile_code("echo hi\n"), "Profile code:\n\necho hi\n");
    }

    #[test]
    fn confirmation_names_profile_and_path() {
        let text = format_confirmation("Default", Path::new("/p/Profile-Default.sh"));
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "Type 'y/yes' to continue with:",
                "    Profile: Default",
                "    Profile path: /p/Profile-Default.sh",
                "Or type 'n/no' to exit. Then press Enter.",
            ]
        );
    }

    #[test]
    fn relay_puts_stderr_after_stdout() {
        assert_eq!(format_relay(&captured("out\n", "err\n")), "out\nerr\n");
    }

    #[test]
    fn relay_separates_unterminated_stdout() {
        assert_eq!(format_relay(&captured("out", "err")), "out\nerr");
    }

    #[test]
    fn relay_of_stdout_only_is_verbatim() {
        assert_eq!(format_relay(&captured("<html/>", "")), "<html/>");
        assert_eq!(format_relay(&captured("", "")), "");
    }

    #[test]
    fn relay_of_stderr_only_is_verbatim() {
        assert_eq!(format_relay(&captured("", "warning\n")), "warning\n");
    }
}
