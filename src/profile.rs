//! Profile lookup.
//!
//! A profile identifier is either a bare name (`Default`, `Slides`) or a path
//! to a script (`./my-profile.sh`, `/opt/profiles/pdf.sh`). Bare names map to
//! `Profile-<name>.<ext>` and are searched in two roots, user first:
//!
//! ```text
//! ~/.pandoc/pandoctools/Profile-Default.sh          # user override
//! <prefix>/share/pandoctools/sh/Profile-Default.sh  # bundled
//! ```
//!
//! A bare name found in neither root is fatal. Paths are returned as given.

use crate::platform::Platform;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile '{name}' not found (searched {})", format_searched(.searched))]
    NotFound { name: String, searched: Vec<PathBuf> },
}

fn format_searched(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether `identifier` is a bare profile name rather than a path.
///
/// A bare name is its own file stem: no directory part and no extension.
pub fn is_bare_name(identifier: &str) -> bool {
    Path::new(identifier)
        .file_stem()
        .is_some_and(|stem| stem == identifier)
}

/// Resolve a profile identifier to a script path.
///
/// Bare names are looked up in `user_root`, then `core_root`. Anything else is
/// treated as an explicit path and returned unchanged, without checking that
/// it exists.
pub fn resolve_profile(
    identifier: &str,
    user_root: &Path,
    core_root: &Path,
    platform: Platform,
) -> Result<PathBuf, ProfileError> {
    if !is_bare_name(identifier) {
        return Ok(PathBuf::from(identifier));
    }
    let file_name = platform.profile_file_name(identifier);
    let searched = vec![user_root.join(&file_name), core_root.join(&file_name)];
    match searched.iter().find(|candidate| candidate.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(ProfileError::NotFound {
            name: identifier.to_string(),
            searched,
        }),
    }
}
