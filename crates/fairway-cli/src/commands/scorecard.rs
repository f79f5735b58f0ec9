//! Scorecard command implementation.

use std::path::Path;

use anyhow::Result;
use fairway_core::format_scorecard_tsv;

use crate::cli_utils::load_game;

/// Run the scorecard command
pub fn run(setup: Option<&Path>) -> Result<()> {
    let game = load_game(setup)?;
    println!("{}", format_scorecard_tsv(&game));
    Ok(())
}
