//! kavap - class descriptor probe.
//!
//! Validates, inspects and erases JVM field and method descriptors using the
//! `kava-symbols` table. Parses arguments with clap and dispatches to the
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_erase, run_inspect, CheckArgs, EraseArgs, InspectArgs};
use config::Config;
use error::{KavapError, Result};

/// kavap - inspect and validate JVM descriptors
#[derive(Parser, Debug)]
#[command(name = "kavap")]
#[command(author = "Kava Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and validate JVM field descriptors and method signatures", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "KAVAP_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KAVAP_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "KAVAP_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate descriptors
    ///
    /// Inputs starting with `(` are checked as method descriptors, everything
    /// else as field descriptors. Exits with failure if any input is invalid.
    Check(CheckCommand),

    /// Describe one field or method descriptor
    Inspect(InspectCommand),

    /// Print the basic (erased) form of a method descriptor
    Erase(EraseCommand),
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Descriptors to validate
    descriptors: Vec<String>,

    /// Read additional descriptors from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Accept field types as Java-language names (java.lang.String, int)
    #[arg(short, long)]
    dotted: bool,
}

#[derive(Parser, Debug)]
struct InspectCommand {
    /// Field or method descriptor
    descriptor: String,

    /// Keep the last parameter when showing the basic signature
    #[arg(long)]
    keep_last_arg: bool,
}

#[derive(Parser, Debug)]
struct EraseCommand {
    /// Method descriptor
    signature: String,

    /// Copy the last parameter unchanged
    #[arg(short, long)]
    keep_last_arg: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let code = execute_command(cli.command, &config)?;
    Ok(code)
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| KavapError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: &Config) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Check(args) => {
            let check_args = CheckArgs {
                inputs: args.descriptors,
                file: args.file,
                dotted: args.dotted,
            };
            let summary = run_check(check_args, config, &mut out)?;
            if summary.all_valid() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Inspect(args) => {
            let inspect_args = InspectArgs {
                descriptor: args.descriptor,
                keep_last_arg: args.keep_last_arg,
            };
            run_inspect(inspect_args, config, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Erase(args) => {
            let erase_args = EraseArgs {
                signature: args.signature,
                keep_last_arg: args.keep_last_arg,
            };
            run_erase(erase_args, config, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
