//! Player roster types.
//!
//! - `PlayerId` - stable roster position, independent of the display name
//! - `Player` - a player with per-hole score slots
//! - `display_initials` - short label for a player button

mod initials;

pub use initials::*;

use serde::{Deserialize, Serialize};

use crate::course::MAX_HOLES;
use crate::error::{Error, Result};
use crate::score::{HoleScore, check_strokes};

/// Identifier of a player within a game (its position in the roster)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: Option<String>,
    /// One slot per hole; `None` until a score is recorded
    pub scores: Vec<HoleScore>,
}

impl Player {
    /// Create a player with `holes` unrecorded score slots.
    ///
    /// The id is provisional until the player is placed in a `Game`.
    pub fn new(first_name: &str, last_name: Option<&str>, holes: usize) -> Result<Self> {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(Error::EmptyFirstName);
        }
        if holes > MAX_HOLES {
            return Err(Error::TooManyHoles {
                holes,
                max: MAX_HOLES,
            });
        }

        let last_name = last_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self {
            id: PlayerId::default(),
            first_name: first_name.to_string(),
            last_name,
            scores: vec![None; holes],
        })
    }

    /// Same as `new`, with the leading holes already recorded
    pub fn with_scores(
        first_name: &str,
        last_name: Option<&str>,
        holes: usize,
        recorded: &[u32],
    ) -> Result<Self> {
        let mut player = Self::new(first_name, last_name, holes)?;
        if recorded.len() > holes {
            return Err(Error::ScoreCountMismatch {
                player: player.first_name,
                expected: holes,
                actual: recorded.len(),
            });
        }
        for (slot, &score) in player.scores.iter_mut().zip(recorded) {
            *slot = Some(check_strokes(score)?);
        }
        Ok(player)
    }

    pub fn score_at(&self, hole_index: usize) -> HoleScore {
        self.scores.get(hole_index).copied().flatten()
    }

    /// Full name for display ("John Doe" or "Jane")
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    pub fn initials(&self) -> String {
        display_initials(self)
    }
}
