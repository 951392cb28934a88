//! Registrar — course registration driver.
//!
//! # Usage
//!
//! ```text
//! registrar demo
//! registrar report <roster.yaml> [--json]
//! registrar show <roster.yaml> student|instructor|course <key>
//! ```
//!
//! `-v/--verbose` logs every registry decision to stderr; `RUST_LOG`
//! overrides the filter entirely.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{report::ReportArgs, show::ShowArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "registrar",
    version,
    about = "Enroll students, assign instructors and report on course rosters",
    long_about = None,
)]
struct Cli {
    /// Log registry decisions (enrollments, refusals, lookups) to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scripted registration walkthrough on a built-in campus.
    Demo,

    /// Load a roster file, replay it and print the resulting registry.
    Report(ReportArgs),

    /// Show one student, instructor or course from a roster file.
    Show(ShowArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Demo => commands::demo::run(),
        Commands::Report(args) => args.run(),
        Commands::Show(args) => args.run(),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "warn,registrar_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
