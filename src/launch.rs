//! One run of the launcher, from document text to relayed profile output.
//!
//! ```text
//! resolve options → output path → environment → profile path   (plan)
//!   → confirm (interactive only) → invoke → relay → pause (interactive only)
//! ```
//!
//! Everything up to the profile path is computed by [`Launcher::plan`] before
//! anything is shown or spawned, so configuration errors abort the run
//! without side effects.

use crate::config::{self, LauncherConfig};
use crate::console::{self, Console};
use crate::environment::{Environment, FilePair};
use crate::invoke::{self, Captured, InvokeError};
use crate::options::{ExplicitOptions, ResolvedOptions, resolve_options};
use crate::output;
use crate::paths::{compute_output_path, normalize};
use crate::platform::{Platform, ToolRoots};
use crate::profile::{ProfileError, resolve_profile};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input file name used when the document comes from stdin without a path.
pub const UNTITLED: &str = "untitled";

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Invoke(#[from] InvokeError),
    #[error("Cannot determine the user data folder (no home directory)")]
    NoUserRoot,
    #[error(
        "The document was read from stdin, so there is no input left for the \
         confirmation prompt; pass INPUT_FILE or --std"
    )]
    PromptNeedsInputFile,
}

/// What the caller asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub input: Option<PathBuf>,
    pub options: ExplicitOptions,
}

/// Everything decided before the profile runs.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub options: ResolvedOptions,
    pub profile_path: PathBuf,
    pub files: FilePair,
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined to run the profile.
    Cancelled,
    Completed(Captured),
}

/// Read the document text.
///
/// An input file is read unless in silent mode; otherwise, and when there is
/// no input file, the document is all of `stdin`. In silent mode the input
/// file only names the document.
pub fn read_document(
    input: Option<&Path>,
    std_mode: bool,
    stdin: &mut dyn Read,
) -> io::Result<String> {
    match input {
        Some(path) if !std_mode => fs::read_to_string(path),
        _ => {
            let mut document = String::new();
            stdin.read_to_string(&mut document)?;
            Ok(document)
        }
    }
}

/// Resolves and runs profiles for one platform and set of roots.
#[derive(Debug, Clone)]
pub struct Launcher {
    platform: Platform,
    roots: ToolRoots,
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(platform: Platform, roots: ToolRoots, config: LauncherConfig) -> Self {
        Self {
            platform,
            roots,
            config,
        }
    }

    /// Build a launcher for the running executable: user root from the home
    /// directory, `config.toml` from the user root, roots from the
    /// executable's location unless the config relocates the core root.
    pub fn from_installation(platform: Platform) -> Result<Self, LaunchError> {
        let user = platform
            .default_user_root()
            .ok_or(LaunchError::NoUserRoot)?;
        let config = config::load_config(&user)?;
        let exe = std::env::current_exe()?;
        let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        let mut roots = ToolRoots::from_exe_dir(platform, exe_dir, user);
        if let Some(core) = &config.core_root {
            roots = roots.with_core(core.clone());
        }
        tracing::debug!(?roots, "launcher roots");
        Ok(Self::new(platform, roots, config))
    }

    /// Decide options, paths, environment and profile for a document.
    pub fn plan(&self, request: &Request, document: &str) -> Result<Plan, LaunchError> {
        let options = resolve_options(&request.options, document, &self.config);

        let input = request
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(UNTITLED));
        let input = normalize(&std::path::absolute(&input)?);
        let output = compute_output_path(&input, &options.out);
        let files = FilePair::new(input, output);
        let environment = Environment::build(&files, &self.roots, self.platform);

        let profile_path =
            resolve_profile(&options.profile, &self.roots.user, &self.roots.core, self.platform)?;
        tracing::debug!(profile = %profile_path.display(), "resolved profile");

        Ok(Plan {
            options,
            profile_path,
            files,
            environment,
        })
    }

    /// Plan, confirm, run the profile and relay its output.
    pub fn run(
        &self,
        request: &Request,
        document: &str,
        console: &mut dyn Console,
    ) -> Result<Outcome, LaunchError> {
        let plan = self.plan(request, document)?;
        let interactive = !plan.options.std;
        if interactive && request.input.is_none() {
            return Err(LaunchError::PromptNeedsInputFile);
        }

        if interactive
            && !console::confirm(console, &plan.profile_path, &plan.options.profile)?
        {
            return Ok(Outcome::Cancelled);
        }

        let captured = invoke::invoke(&plan.profile_path, document, &plan.environment)?;
        console.write_text(&output::format_relay(&captured))?;

        if interactive {
            console::pause(console)?;
        }
        Ok(Outcome::Completed(captured))
    }
}
