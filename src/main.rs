//! Broadside CLI - play, script and inspect Broadside matches.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use broadside::Player;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::filter::EnvFilter;

/// Broadside - a one-boat Battleship variant with move-or-fire turns
#[derive(Parser, Debug)]
#[command(name = "broadside")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a hot-seat match on the terminal
    Play {
        /// Random seed for boat placement (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON game config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a script of commands to a fresh match
    Run {
        /// Script file, or `-` for stdin
        #[arg(required = true)]
        script: PathBuf,

        /// Random seed for boat placement (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON game config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress per-action output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a freshly placed match
    Show {
        /// Random seed for boat placement (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON game config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show only what this player sees (1 or 2, default: both boats)
        #[arg(short, long)]
        player: Option<Player>,

        /// Output format: text, json, or briefing
        #[arg(short, long, default_value = "text")]
        format: cli::ShowFormat,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("").add_directive(Level::INFO.into()),
        2 => EnvFilter::new("").add_directive(Level::DEBUG.into()),
        _ => EnvFilter::new("").add_directive(Level::TRACE.into()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Play { seed, config } => cli::play::execute(seed, config.as_deref()),

        Commands::Run {
            script,
            seed,
            config,
            format,
            quiet,
        } => cli::run::execute(&script, seed, config.as_deref(), format, quiet),

        Commands::Show {
            seed,
            config,
            player,
            format,
        } => cli::show::execute(seed, config.as_deref(), player, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
