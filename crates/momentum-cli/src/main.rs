//! Momentum CLI - a local-first habit and daily-task tracker
//!
//! This is the command-line interface for Momentum. It wires the core
//! ledger library to subcommands, output modes, and the config file.

mod app;
mod cli;
mod clock;
mod commands;
mod config;
mod constants;
mod errors;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use momentum_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match &cli.command {
        Some(Commands::Habit(args)) => commands::habits::handle_habit(&ctx, args),
        Some(Commands::Task(args)) => commands::tasks::handle_task(&ctx, args),
        Some(Commands::Dashboard(args)) => commands::dashboard::handle_dashboard(&ctx, args),
        Some(Commands::Export(args)) => commands::export::handle_export(&ctx, args),
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args.shell),
        None => {
            println!("Momentum v{}", VERSION);
            println!("\nRun `momentum --help` for usage information.");
            Ok(())
        }
    }
}

/// Route diagnostics to stderr, filtered by RUST_LOG (warnings by
/// default, so a mangled store blob is visible without drowning
/// command output).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
