use anyhow::Result;
use clap::Parser;
use fairway_cli::cli::{Args, Command};
use fairway_cli::commands;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warn when RUST_LOG is unset
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fairway_cli=warn,fairway_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let setup = args.setup.as_deref();
    match args.command {
        Some(Command::Leaderboard { format }) => commands::leaderboard::run(setup, format),
        Some(Command::Scorecard) => commands::scorecard::run(setup),
        Some(Command::Course) => commands::course::run(setup),
        Some(Command::Play) | None => commands::play::run(setup),
    }
}
