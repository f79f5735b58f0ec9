//! Game state types.
//!
//! - `Game` - a course plus the roster playing it
//! - `HoleCursor` - clamped navigation over the course's holes

mod cursor;

pub use cursor::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::course::Course;
use crate::error::{Error, Result};
use crate::player::{Player, PlayerId};
use crate::score::check_strokes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    course: Course,
    players: Vec<Player>,
}

impl Game {
    /// Build a game, assigning each player an id equal to its roster position.
    ///
    /// Every player must carry exactly one score slot per hole.
    pub fn new(course: Course, players: Vec<Player>) -> Result<Self> {
        let holes = course.len();
        let players = players
            .into_iter()
            .enumerate()
            .map(|(index, mut player)| {
                if player.scores.len() != holes {
                    return Err(Error::ScoreCountMismatch {
                        player: player.first_name,
                        expected: holes,
                        actual: player.scores.len(),
                    });
                }
                player.id = PlayerId(index);
                Ok(player)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { course, players })
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// First player whose first name matches, ignoring ASCII case
    pub fn find_by_first_name(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.first_name.eq_ignore_ascii_case(name))
    }

    /// Return a copy of the game with one score slot replaced.
    ///
    /// All other players and holes are left exactly as they were.
    pub fn record_score(&self, id: PlayerId, hole_index: usize, score: u32) -> Result<Self> {
        if hole_index >= self.course.len() {
            return Err(Error::HoleOutOfRange {
                index: hole_index,
                holes: self.course.len(),
            });
        }
        if self.player(id).is_none() {
            return Err(Error::PlayerNotFound(id));
        }
        let score = check_strokes(score)?;

        let mut next = self.clone();
        if let Some(slot) = next.players[id.index()].scores.get_mut(hole_index) {
            *slot = Some(score);
        }
        debug!(
            "Recorded {} for player {} on hole {}",
            score,
            id,
            hole_index + 1
        );
        Ok(next)
    }
}
