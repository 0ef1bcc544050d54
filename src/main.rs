//! ScaleKeys - pick a root and a scale, see which keys of one octave belong to it
//!
//! Command-line host for the scale engine. Every invocation restores the last
//! selection from the settings document, applies at most one change, saves it,
//! and prints the resulting keyboard highlight.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::{ConfigArgs, ExitCode, HostContext, RootArgs, ScaleArgs, ScalesArgs, ShowArgs};
use scalekeys::constants::APP_BINARY_NAME;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ScaleKeys - highlight the notes of a scale on a one-octave keyboard
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Settings document to use instead of the configured one
    #[arg(long, value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display the current root, scale and highlighted keys (default)
    Show(ShowArgs),
    /// Change the root note
    Root(RootArgs),
    /// Change the scale
    Scale(ScaleArgs),
    /// List available scales
    Scales(ScalesArgs),
    /// Manage host configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so JSON on stdout stays parseable
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> cli::CliResult<()> {
    let ctx = HostContext::resolve(cli.settings.as_deref())?;

    match cli.command {
        None => ShowArgs::default().execute(&ctx),
        Some(Command::Show(args)) => args.execute(&ctx),
        Some(Command::Root(args)) => args.execute(&ctx),
        Some(Command::Scale(args)) => args.execute(&ctx),
        Some(Command::Scales(args)) => args.execute(),
        Some(Command::Config(args)) => args.execute(&ctx),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.code
        }
    };

    if code != ExitCode::Success {
        std::process::exit(code as i32);
    }

    Ok(())
}
