//! Document front-matter extraction.
//!
//! A document may carry launcher settings in a YAML block, either at the very
//! start or right after any newline:
//!
//! ```text
//! ---
//! title: Report
//! pandoctools:
//!   profile: Default
//!   out: "*.pdf"
//!   std: False
//! ...
//! ```
//!
//! The block opens with a `---` line and closes with the first following
//! `---` or `...` line. Only the `pandoctools` sub-mapping is read.
//!
//! ## Degradation
//!
//! Front matter never fails a run. No block, invalid YAML, a YAML document
//! that is not a mapping, or a `pandoctools` key that is not a mapping all
//! read as "no settings", so the regular fallbacks apply.

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

/// Key of the launcher's sub-mapping in the front matter.
pub const NAMESPACE_KEY: &str = "pandoctools";

static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:\A|\n)---\n(.+?)\n(?:---|\.\.\.)(?:\n|\z)")
        .expect("front matter pattern must compile")
});

/// Launcher settings read from the `pandoctools` front-matter mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolMeta {
    pub profile: Option<String>,
    pub out: Option<String>,
    /// Raw `std` value, compared textually by the option resolver.
    pub std: Option<String>,
}

impl ToolMeta {
    /// Extract launcher settings straight from document text.
    pub fn extract(document: &str) -> Self {
        Self::from_front_matter(&extract_front_matter(document))
    }

    /// Read the `pandoctools` sub-mapping of parsed front matter.
    pub fn from_front_matter(front_matter: &Mapping) -> Self {
        let Some(Value::Mapping(settings)) = front_matter.get(NAMESPACE_KEY) else {
            return Self::default();
        };
        Self {
            profile: scalar_text(settings.get("profile")),
            out: scalar_text(settings.get("out")),
            std: scalar_text(settings.get("std")),
        }
    }
}

/// Parse the front-matter block of `document` into a mapping.
///
/// Returns an empty mapping when there is no block or it does not parse to a
/// YAML mapping.
pub fn extract_front_matter(document: &str) -> Mapping {
    let Some(block) = FRONT_MATTER.captures(document).and_then(|c| c.get(1)) else {
        return Mapping::new();
    };
    match serde_yaml::from_str::<Value>(block.as_str()) {
        Ok(Value::Mapping(map)) => map,
        Ok(_) => Mapping::new(),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unparsable front matter");
            Mapping::new()
        }
    }
}

/// Textual form of a scalar value. YAML reads `False` as a bool and `2024` as
/// a number; both are kept as the text the author wrote.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
