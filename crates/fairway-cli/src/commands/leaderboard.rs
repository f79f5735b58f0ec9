//! Leaderboard command implementation.

use std::path::Path;

use anyhow::Result;
use fairway_core::{build_leaderboard, format_leaderboard_console, format_leaderboard_json};

use crate::cli::OutputFormat;
use crate::cli_utils::load_game;

/// Run the leaderboard command
pub fn run(setup: Option<&Path>, format: OutputFormat) -> Result<()> {
    let game = load_game(setup)?;
    let entries = build_leaderboard(&game);

    match format {
        OutputFormat::Json => println!("{}", format_leaderboard_json(&entries)?),
        OutputFormat::Table => {
            println!(
                "{}",
                format_leaderboard_console(game.course().name(), &entries)
            )
        }
    }

    Ok(())
}
