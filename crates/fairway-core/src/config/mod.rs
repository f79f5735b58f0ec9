//! Game setup files.
//!
//! A setup file describes the course and the roster in TOML:
//!
//! ```toml
//! [course]
//! name = "Example course"
//! pars = [3, 4, 5]
//!
//! [[players]]
//! first_name = "John"
//! last_name = "Doe"
//! scores = [3, 4]
//! ```
//!
//! Instead of `pars`, a course may give `holes` and a single `par` for
//! every hole.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::course::{Course, MAX_HOLES};
use crate::error::{Error, Result};
use crate::game::Game;
use crate::player::Player;

/// Built-in demo roster and course
pub mod defaults {
    pub const COURSE_NAME: &str = "Example course";
    pub const HOLES: usize = 18;
    pub const PAR: u32 = 3;
    pub const PLAYERS: [(&str, Option<&str>); 4] = [
        ("John", Some("Doe")),
        ("Jane", None),
        ("Bob", Some("Smith")),
        ("Alice", None),
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseSetup {
    pub name: String,
    #[serde(default)]
    pub pars: Option<Vec<u32>>,
    #[serde(default)]
    pub holes: Option<usize>,
    #[serde(default)]
    pub par: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerSetup {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Strokes already played, starting at hole 1
    #[serde(default)]
    pub scores: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSetup {
    pub course: CourseSetup,
    #[serde(default)]
    pub players: Vec<PlayerSetup>,
}

impl CourseSetup {
    pub fn build(&self) -> Result<Course> {
        match (&self.pars, self.holes, self.par) {
            (Some(pars), None, None) => Course::new(&self.name, pars),
            (None, Some(holes), _) if holes > MAX_HOLES => Err(Error::ConfigParseError(format!(
                "course {:?} has {} holes, at most {} allowed",
                self.name, holes, MAX_HOLES
            ))),
            (None, Some(holes), par) => {
                Course::uniform(&self.name, holes, par.unwrap_or(defaults::PAR))
            }
            (None, None, _) => Err(Error::ConfigParseError(format!(
                "course {:?} needs either `pars` or `holes`",
                self.name
            ))),
            (Some(_), _, _) => Err(Error::ConfigParseError(format!(
                "course {:?} sets `pars` together with `holes`/`par`",
                self.name
            ))),
        }
    }
}

impl GameSetup {
    /// Load a setup from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let setup = Self::parse(&content)?;
        info!(
            "Loaded setup from {:?}: {} ({} players)",
            path.as_ref(),
            setup.course.name,
            setup.players.len()
        );
        Ok(setup)
    }

    /// Parse a setup from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the game this setup describes
    pub fn build(&self) -> Result<Game> {
        let course = self.course.build()?;
        let holes = course.len();
        let players = self
            .players
            .iter()
            .map(|p| Player::with_scores(&p.first_name, p.last_name.as_deref(), holes, &p.scores))
            .collect::<Result<Vec<_>>>()?;
        Game::new(course, players)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            course: CourseSetup {
                name: defaults::COURSE_NAME.to_string(),
                pars: None,
                holes: Some(defaults::HOLES),
                par: Some(defaults::PAR),
            },
            players: defaults::PLAYERS
                .iter()
                .map(|(first, last)| PlayerSetup {
                    first_name: first.to_string(),
                    last_name: last.map(str::to_string),
                    scores: Vec::new(),
                })
                .collect(),
        }
    }
}
