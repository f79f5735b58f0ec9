//! Course command implementation.

use std::path::Path;

use anyhow::Result;

use crate::cli_utils::load_game;

/// Run the course command
pub fn run(setup: Option<&Path>) -> Result<()> {
    let game = load_game(setup)?;
    let course = game.course();

    println!("{}", course.name());
    for (index, hole) in course.holes().iter().enumerate() {
        println!("  Hole {:>2}  par {}", index + 1, hole.par());
    }
    println!("  Total    par {}", course.total_par());

    Ok(())
}
