//! # Stacksmith CLI
//!
//! Full-stack project generator driven by a single `.env`.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` into the process environment.
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Build [`Settings`] from the environment (all-or-nothing).
//! 5. Run the orchestrator, or print the plan for `--dry-run`.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::collections::BTreeMap;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, instrument};

use stacksmith_adapters::{LocalFilesystem, ProcessRunner};
use stacksmith_core::prelude::*;

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod error;
mod logging;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist (CI and scripted runs use
    // real environment variables, not .env files).
    let _ = dotenvy::dotenv();

    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        dry_run = cli.dry_run,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;
    match run(cli) {
        Ok(()) => {
            info!("stacksmith completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Build settings and drive one generation run.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let settings = Arc::new(Settings::from_env_with(cli.name.as_deref())?);

    if cli.dry_run {
        return print_plan(&settings);
    }

    let timeout = settings.command_timeout()?;
    let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessRunner::new(timeout));

    let orchestrator = Orchestrator::new(settings.clone(), fs, runner);
    orchestrator.run()?;

    if !cli.global.quiet {
        println!(
            "Generated '{}' at {}",
            settings.project_name(),
            orchestrator.workspace().root.display()
        );
    }
    Ok(())
}

/// What one run would do, as JSON on stdout. Secrets are masked.
#[derive(Debug, Serialize)]
struct Plan<'a> {
    project: &'a str,
    backend: String,
    database: String,
    ui: String,
    stages: BTreeMap<&'static str, bool>,
    configuration: BTreeMap<&'static str, String>,
}

fn print_plan(settings: &Settings) -> CliResult<()> {
    let target = GenerationTarget::from_settings(settings)?;
    let plan = Plan {
        project: settings.project_name(),
        backend: target.backend.to_string(),
        database: target.database.to_string(),
        ui: target.ui.to_string(),
        stages: BTreeMap::from([
            ("frontend", settings.flag(ConfigKey::EnableGenerateFrontend)),
            ("backend", settings.flag(ConfigKey::EnableGenerateBackend)),
            ("docker", settings.flag(ConfigKey::EnableGenerateDocker)),
            ("readme", settings.flag(ConfigKey::EnableGenerateReadme)),
        ]),
        configuration: settings.redacted(),
    };
    let rendered = serde_json::to_string_pretty(&plan).map_err(|e| CliError::Io {
        message: format!("failed to render plan: {e}"),
    })?;
    println!("{rendered}");
    Ok(())
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // Write directly to stderr so the message appears even when stdout is
    // redirected. Colour is disabled when stderr is not a TTY (same logic
    // as logging.rs).
    let use_color = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    let msg = if use_color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
