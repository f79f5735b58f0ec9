//! CLI argument definitions for fairway.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "fairway")]
#[command(about = "Golf scorecard tracker", version)]
pub struct Args {
    /// Game setup file (TOML); the built-in demo course is used if omitted
    #[arg(long, value_name = "FILE", env = "FAIRWAY_SETUP")]
    pub setup: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a round interactively (default)
    Play,
    /// Show the standings
    Leaderboard {
        /// Output format
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print the hole-by-hole scorecard as TSV
    Scorecard,
    /// Show the course holes and pars
    Course,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
