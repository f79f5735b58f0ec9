//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use fairway_core::{Game, GameSetup};
use tracing::debug;

/// Build the game from a setup file, or the built-in demo when none is given.
pub fn load_game(setup: Option<&Path>) -> Result<Game> {
    let setup = match setup {
        Some(path) => GameSetup::load(path)
            .with_context(|| format!("Failed to load setup from {}", path.display()))?,
        None => {
            debug!("No setup file given, using built-in course");
            GameSetup::default()
        }
    };
    Ok(setup.build()?)
}
