//! Command-line front end for headless encounters.
//!
//! Run with: `cargo run -p encounter-cli -- <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Record, Replay, Simulate, Verify};

/// Deterministic encounter tools
#[derive(Parser)]
#[command(name = "encounter")]
#[command(about = "Simulate, record, and replay deterministic encounters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play many autopilot games in parallel and print a JSON summary
    Simulate(Simulate),

    /// Replay a scenario and print its narration
    Replay(Replay),

    /// Play one seeded autopilot game and write its action log
    Record(Record),

    /// Re-execute an action log and check every state root
    Verify(Verify),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.execute(),
        Command::Record(cmd) => cmd.execute(),
        Command::Verify(cmd) => cmd.execute(),
    }
}
