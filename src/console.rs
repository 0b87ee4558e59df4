//! User interaction: the confirmation gate and the closing pause.
//!
//! Interactive runs show the profile's source code and ask before running
//! it, then wait for Enter after relaying the output. Both go through the
//! [`Console`] trait so the launcher can be driven by a scripted console in
//! tests; [`StdConsole`] is the terminal implementation.

use crate::output;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// A line-oriented text console.
pub trait Console {
    /// Write `text` verbatim.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Print `text` followed by a newline.
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.write_text(text)?;
        self.write_text("\n")
    }

    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// [`Console`] over any reader/writer pair.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Answer to the yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
}

fn parse_answer(input: &str) -> Option<Answer> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Answer::Yes),
        "n" | "no" => Some(Answer::No),
        _ => None,
    }
}

/// Show the profile source and ask whether to run it.
///
/// Re-asks until the answer is `y`/`yes` or `n`/`no` (any case). End of input
/// counts as `no`.
pub fn confirm(
    console: &mut dyn Console,
    profile_path: &Path,
    profile_name: &str,
) -> io::Result<bool> {
    let code = fs::read_to_string(profile_path)?;
    console.show(&output::format_profile_code(&code))?;
    console.show(&output::format_confirmation(profile_name, profile_path))?;
    loop {
        let Some(input) = console.read_line()? else {
            tracing::warn!("input closed while waiting for confirmation, not running profile");
            return Ok(false);
        };
        match parse_answer(&input) {
            Some(Answer::Yes) => return Ok(true),
            Some(Answer::No) => return Ok(false),
            None => console.show(output::RETRY_HINT)?,
        }
    }
}

/// Wait for the user to press Enter.
pub fn pause(console: &mut dyn Console) -> io::Result<()> {
    console.show(output::PAUSE_PROMPT)?;
    console.read_line()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{MockConsole, ProfileRoots, write_profile};

    #[test]
    fn parse_answers() {
        assert_eq!(parse_answer("y"), Some(Answer::Yes));
        assert_eq!(parse_answer("YES"), Some(Answer::Yes));
        assert_eq!(parse_answer(" No "), Some(Answer::No));
        assert_eq!(parse_answer("n"), Some(Answer::No));
        assert_eq!(parse_answer("ok"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn confirm_shows_code_then_question() {
        let roots = ProfileRoots::new();
        let path = write_profile(roots.core(), "Default", "pandoc -t html");
        let mut console = MockConsole::with_input(&["y"]);

        assert!(confirm(&mut console, &path, "Default").unwrap());

        let shown = console.shown();
        assert!(shown[0].starts_with("Profile code:"));
        assert!(shown[0].contains("pandoc -t html"));
        assert!(shown[1].contains("Profile: Default"));
        assert!(shown[1].contains(&path.display().to_string()));
    }

    #[test]
    fn confirm_no() {
        let roots = ProfileRoots::new();
        let path = write_profile(roots.core(), "Default", "true");
        let mut console = MockConsole::with_input(&["NO"]);
        assert!(!confirm(&mut console, &path, "Default").unwrap());
    }

    #[test]
    fn confirm_reprompts_on_unrecognized_input() {
        let roots = ProfileRoots::new();
        let path = write_profile(roots.core(), "Default", "true");
        let mut console = MockConsole::with_input(&["maybe", "", "sure", "Yes"]);

        assert!(confirm(&mut console, &path, "Default").unwrap());
        let hints = console
            .shown()
            .iter()
            .filter(|s| s.as_str() == output::RETRY_HINT)
            .count();
        assert_eq!(hints, 3);
    }

    #[test]
    fn confirm_end_of_input_declines() {
        let roots = ProfileRoots::new();
        let path = write_profile(roots.core(), "Default", "true");
        let mut console = MockConsole::with_input(&["what"]);
        assert!(!confirm(&mut console, &path, "Default").unwrap());
    }

    #[test]
    fn confirm_unreadable_profile_is_error() {
        let roots = ProfileRoots::new();
        let mut console = MockConsole::with_input(&["y"]);
        let result = confirm(&mut console, &roots.core().join("missing.sh"), "missing");
        assert!(result.is_err());
        assert!(console.shown().is_empty());
    }

    #[test]
    fn pause_waits_for_one_line() {
        let mut console = MockConsole::with_input(&["", "left over"]);
        pause(&mut console).unwrap();
        assert_eq!(console.shown(), [output::PAUSE_PROMPT]);
        assert_eq!(console.remaining_input(), 1);
    }

    #[test]
    fn std_console_strips_line_endings() {
        let input = b"yes\r\nno\n" as &[u8];
        let mut out = Vec::new();
        let mut console = StdConsole::new(input, &mut out);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("yes"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("no"));
        assert_eq!(console.read_line().unwrap(), None);
        console.show("hello").unwrap();
        console.write_text("<raw>").unwrap();
        assert_eq!(out, b"hello\n<raw>");
    }
}
