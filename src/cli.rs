//! Command-line interface implementation for modgen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for modgen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "modgen: template-driven module scaffolding tool",
    long_about = None
)]
pub struct Args {
    /// Either the `add-module` command or a path to the template description
    #[arg(value_name = "COMMAND_OR_PATH")]
    pub command_or_path: Option<String>,

    /// Custom template description path, used together with `add-module`
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Directory where the module is generated, overrides `configs.rootDir`
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read answers from stdin as a JSON or YAML mapping of variable names to strings
    #[arg(short, long)]
    pub stdin: bool,

    /// Accept configured defaults without prompting.
    /// Variables without a default are still prompted for.
    #[arg(short = 'y', long)]
    pub use_defaults: bool,

    /// Print the planned folders and files without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
