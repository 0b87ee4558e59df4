//! # Pandoctools
//!
//! A Pandoc profile manager. A *profile* is a script holding one command-line
//! filter pipeline (`Profile-Default.sh`, `Profile-Slides.bat`). For each
//! document the launcher decides which profile to run and where the output
//! goes, hands the profile the document on stdin with the file details in its
//! environment, and relays what it prints.
//!
//! # A Run
//!
//! ```text
//! 1. Options      --profile/--out/--std → front matter → config.toml → defaults
//! 2. Paths        input + out pattern  →  output path, extensions
//! 3. Environment  paths + tool roots   →  variables for the profile
//! 4. Profile      name → user root → core root (fatal if missing)
//! 5. Confirm      show profile code, ask y/n      (interactive only)
//! 6. Invoke       document → profile stdin, stdout + stderr → stdout
//! 7. Pause        "Press Enter to continue..."    (interactive only)
//! ```
//!
//! Steps 1 to 4 are pure decisions collected in a [`launch::Plan`]; nothing
//! is shown or spawned until all of them succeed.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`paths`] | Output path from an `out` pattern, extension splitting |
//! | [`platform`] | Per-platform table: script extension, helper scripts, roots |
//! | [`profile`] | Profile name → script path across user and core roots |
//! | [`metadata`] | `pandoctools` settings from YAML front matter |
//! | [`options`] | Precedence merge of explicit options, front matter, config |
//! | [`environment`] | Variables exported to the profile process |
//! | [`console`] | Console port, confirmation prompt, closing pause |
//! | [`invoke`] | Spawning the profile and capturing its output |
//! | [`config`] | Optional `config.toml` in the user root |
//! | [`output`] | Wording of everything shown to the user |
//! | [`launch`] | Ties the steps together for one document |
//!
//! # Design Decisions
//!
//! ## Front Matter Never Fails a Run
//!
//! Documents are written by people, and front matter is often copied between
//! them. A broken or missing block is read as "no settings", so the command
//! line and config fallbacks decide instead of aborting a conversion.
//!
//! ## Environment Built, Not Exported
//!
//! The variables for the profile live in an [`environment::Environment`] value
//! and are applied to the child [`std::process::Command`] only. The launcher's
//! own environment is never touched, which keeps every step a plain function
//! of its inputs and makes `--dry-run` show exactly what the profile would get.
//!
//! ## One Table Per Platform
//!
//! Unix and Windows differ in profile extension, helper script names and how
//! helpers are referenced. [`platform::Platform`] selects one static table at
//! startup instead of branching throughout the code.

pub mod config;
pub mod console;
pub mod environment;
pub mod invoke;
pub mod launch;
pub mod metadata;
pub mod options;
pub mod output;
pub mod paths;
pub mod platform;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_helpers;
