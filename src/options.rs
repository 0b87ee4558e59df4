//! Option resolution.
//!
//! The profile, output pattern and silent flag each come from the first
//! source that sets them:
//!
//! ```text
//! profile:  --profile → front matter `profile` → config `profile` ("Default")
//! out:      --out     → front matter `out`     → config `out`     ("*.html")
//! std:      --std, possibly overridden by front matter `std`
//! ```
//!
//! ## The `std` rule
//!
//! `std` is a command-line switch, so "not given" and "false" look the same.
//! When front matter is consulted and has a `std` value:
//!
//! - `"FALSE"` in any case leaves the command-line flag as it is;
//! - otherwise the document decides: `true`, `yes`, `on` and `1` turn silent
//!   mode on, `no`, `off` and `0` turn it off;
//! - text that is neither leaves the command-line flag as it is.
//!
//! So `std: False` in a document never re-enables the prompt for a caller
//! that passed `--std`, but `std: no` does.
//!
//! ## When front matter is read
//!
//! Only when at least one of the three options is missing (profile or out
//! unset, or `--std` not passed). A fully explicit call never parses the
//! document.

use crate::config::LauncherConfig;
use crate::metadata::ToolMeta;
use serde::Serialize;

/// Options exactly as the caller passed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitOptions {
    pub profile: Option<String>,
    pub out: Option<String>,
    pub std: bool,
}

impl ExplicitOptions {
    /// Whether every option was supplied, so front matter can be skipped.
    pub fn is_complete(&self) -> bool {
        self.profile.is_some() && self.out.is_some() && self.std
    }
}

/// The final options for a run. Built once, never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    pub profile: String,
    pub out: String,
    pub std: bool,
}

/// Merge explicit options with the document's front matter and the config
/// fallbacks.
pub fn resolve_options(
    explicit: &ExplicitOptions,
    document: &str,
    defaults: &LauncherConfig,
) -> ResolvedOptions {
    let meta = if explicit.is_complete() {
        ToolMeta::default()
    } else {
        ToolMeta::extract(document)
    };
    let resolved = merge(explicit, meta, defaults);
    tracing::debug!(
        profile = %resolved.profile,
        out = %resolved.out,
        std = resolved.std,
        "resolved options"
    );
    resolved
}

fn merge(explicit: &ExplicitOptions, meta: ToolMeta, defaults: &LauncherConfig) -> ResolvedOptions {
    let profile = explicit
        .profile
        .clone()
        .or(meta.profile)
        .unwrap_or_else(|| defaults.profile.clone());
    let out = explicit
        .out
        .clone()
        .or(meta.out)
        .unwrap_or_else(|| defaults.out.clone());
    let std = match meta.std.as_deref() {
        Some(value) if !value.trim().eq_ignore_ascii_case("FALSE") => {
            parse_switch(value).unwrap_or(explicit.std)
        }
        _ => explicit.std,
    };
    ResolvedOptions { profile, out, std }
}

/// Read a front-matter switch. `None` for text that is not a known switch word.
fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
