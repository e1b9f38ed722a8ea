//! Command-line definition.
//!
//! Stacksmith is a single-command tool: everything that shapes the
//! generated stack lives in the environment (`.env`), so the surface here
//! is just the optional name override, `--dry-run`, and output controls.

use clap::{Args, Parser};

/// Generate a full-stack project from a single declarative `.env`.
#[derive(Debug, Parser)]
#[command(
    name = "stacksmith",
    author,
    version,
    about = "Generate an Angular + backend + database + docker-compose stack from one .env",
    long_about = "Reads the full project description from environment variables \
(a .env file in the working directory is loaded automatically), then scaffolds \
the frontend, backend, database service, docker-compose descriptor, and README \
under OUTPUT_ROOT.\n\nRe-running deletes and recreates the project directory."
)]
pub struct Cli {
    /// Project name, overriding PROJECT_NAME from the environment.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Print the generation plan as JSON and exit without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available on every invocation.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors only
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,
}
