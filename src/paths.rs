//! Output path derivation and extension splitting.
//!
//! ## Output patterns
//!
//! The output location is described by a pattern relative to the input file.
//! Every `*` in the pattern is replaced by the input's base name (extension
//! included), and a relative result is anchored at the input's directory:
//!
//! ```text
//! input: /docs/report.md
//!   "*.html"          → /docs/report.md.html
//!   "./out/*.pdf"     → /docs/out/report.md.pdf
//!   "../build/doc.tex"→ /build/doc.tex
//!   "/tmp/x.html"     → /tmp/x.html
//! ```
//!
//! ## Extensions
//!
//! Two extensions are derived for each path. `ext` is the conventional last
//! extension, `full_ext` is everything after the first dot of the base name,
//! which keeps compound extensions like `r.ipynb` or `tar.gz` intact.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// The two extension views of a file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extensions {
    /// Text after the last dot of the base name (`"ipynb"` for `doc.r.ipynb`).
    pub ext: String,
    /// Text after the first dot of the base name (`"r.ipynb"` for `doc.r.ipynb`).
    pub full_ext: String,
}

/// Derive the output path from an input path and an output pattern.
///
/// Every `*` in `pattern` becomes the base name of `input`. A relative result
/// is joined onto the directory of `input`; the result is then normalized.
pub fn compute_output_path(input: &Path, pattern: &str) -> PathBuf {
    let base_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let substituted = PathBuf::from(pattern.replace('*', &base_name));
    if substituted.is_absolute() {
        return normalize(&substituted);
    }
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    normalize(&dir.join(substituted))
}

/// Split the base name of `path` into its last and full extensions.
///
/// ```text
/// report.md      → ext "md",    full_ext "md"
/// doc.r.ipynb    → ext "ipynb", full_ext "r.ipynb"
/// Makefile       → ext "",      full_ext ""
/// ```
pub fn split_extensions(path: &Path) -> Extensions {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = name
        .rfind('.')
        .map(|pos| name[pos + 1..].to_string())
        .unwrap_or_default();
    let full_ext = name
        .find('.')
        .map(|pos| name[pos + 1..].to_string())
        .unwrap_or_default();
    Extensions { ext, full_ext }
}

/// Lexically normalize a path: drop `.` components and let `..` consume the
/// preceding normal component.
///
/// A `..` directly under the root is dropped (`/..` is `/`); leading `..` in a
/// relative path are kept. The filesystem is never consulted, so symlinks are
/// not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
