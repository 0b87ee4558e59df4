use clap::{Parser, Subcommand};
use pandoctools::console::StdConsole;
use pandoctools::launch::{self, Launcher, Outcome, Request};
use pandoctools::options::ExplicitOptions;
use pandoctools::platform::Platform;
use pandoctools::{config, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pandoctools")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Pandoc profile manager that stores CLI filter pipelines")]
#[command(long_about = "\
Pandoc profile manager that stores CLI filter pipelines.

Profiles are scripts named Profile-<name>.sh (Profile-<name>.bat on Windows).
They are searched in the user data folder first:
  ~/.pandoc/pandoctools            (%APPDATA%\\pandoc\\pandoctools on Windows)
then in the bundled profiles folder. Profiles read the document from stdin
and usually write to stdout.

Some options can be set in the document's front matter:

  ---
  pandoctools:
    profile: Default
    out: \"*.html\"
    std: False
  ...

Precedence: command line > front matter > config.toml > built-in defaults.
A front matter std value (true/yes/on/1 or no/off/0) overrides --std;
std: False leaves the command line flag as it is.

Profiles receive input_file, output_file, in_ext, in_ext_full, out_ext,
out_ext_full and the helper script variables in their environment.

Run 'pandoctools gen-config' to print a documented config.toml.")]
struct Cli {
    /// Input file (default: "untitled", read from stdin)
    input_file: Option<PathBuf>,

    /// Profile name or profile file path (default: "Default")
    #[arg(short, long)]
    profile: Option<String>,

    /// Output file path like "./out/doc.html" or pattern like "*.html",
    /// "./out/*.r.ipynb" (default: "*.html")
    #[arg(short, long)]
    out: Option<String>,

    /// Silent mode: read the document from stdin, write to stdout, no
    /// confirmation. INPUT_FILE then only names the document
    #[arg(short, long)]
    std: bool,

    /// Print the resolved profile, paths and environment as JSON and exit
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let request = Request {
        input: cli.input_file,
        options: ExplicitOptions {
            profile: cli.profile,
            out: cli.out,
            std: cli.std,
        },
    };
    let launcher = Launcher::from_installation(Platform::current())?;

    let document = launch::read_document(
        request.input.as_deref(),
        request.options.std,
        &mut std::io::stdin().lock(),
    )?;

    if cli.dry_run {
        let plan = launcher.plan(&request, &document)?;
        println!("{}", output::format_plan(&plan)?);
        return Ok(());
    }

    let mut console = StdConsole::stdio();
    match launcher.run(&request, &document, &mut console)? {
        Outcome::Cancelled => tracing::debug!("run cancelled by user"),
        Outcome::Completed(captured) => {
            tracing::debug!(exit_code = ?captured.exit_code, "profile finished")
        }
    }
    Ok(())
}
