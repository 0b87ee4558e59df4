//! Environment published to the profile process.
//!
//! Profiles learn about the document and the installed helpers only through
//! environment variables. The names are a contract with every profile script:
//!
//! | Variable | Value |
//! |---|---|
//! | `input_file`, `output_file` | Resolved input and output paths |
//! | `in_ext`, `in_ext_full` | Last and full extension of the input |
//! | `out_ext`, `out_ext_full` | Last and full extension of the output |
//! | `env_path` | Install root |
//! | `scripts` | Helper scripts dir |
//! | `_user_config`, `_core_config` | User and bundled profile roots |
//! | `import`, `source`, ... | Helper scripts, see [`crate::platform`] |
//!
//! The map is built once per run and only exported into a
//! [`std::process::Command`] right before spawning; the launcher's own
//! process environment is never modified.

use crate::paths::{Extensions, split_extensions};
use crate::platform::{Platform, ToolRoots};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;

/// Input and output paths of a run with their extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePair {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_ext: Extensions,
    pub output_ext: Extensions,
}

impl FilePair {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        let input_ext = split_extensions(&input);
        let output_ext = split_extensions(&output);
        Self {
            input,
            output,
            input_ext,
            output_ext,
        }
    }
}

/// Variables exported to the profile process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn build(files: &FilePair, roots: &ToolRoots, platform: Platform) -> Self {
        let mut vars = BTreeMap::new();
        let mut set = |key: &str, value: String| {
            vars.insert(key.to_string(), value);
        };

        set("env_path", roots.env_path.display().to_string());
        set("scripts", roots.scripts.display().to_string());
        set("_user_config", roots.user.display().to_string());
        set("_core_config", roots.core.display().to_string());
        for helper in platform.spec().helpers {
            set(helper.var, platform.helper_value(&roots.scripts, helper));
        }

        set("input_file", files.input.display().to_string());
        set("output_file", files.output.display().to_string());
        set("in_ext", files.input_ext.ext.clone());
        set("in_ext_full", files.input_ext.full_ext.clone());
        set("out_ext", files.output_ext.ext.clone());
        set("out_ext_full", files.output_ext.full_ext.clone());

        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Export every variable into `command`, on top of the inherited
    /// environment.
    pub fn apply(&self, command: &mut Command) {
        command.envs(&self.vars);
    }
}
