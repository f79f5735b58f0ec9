use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid score input: {0:?}")]
    InvalidScoreInput(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Hole index {index} out of range (course has {holes} holes)")]
    HoleOutOfRange { index: usize, holes: usize },

    #[error("No player selected")]
    NoPlayerSelected,

    #[error("Course has no holes")]
    EmptyCourse,

    #[error("Course has {holes} holes, at most {max} allowed")]
    TooManyHoles { holes: usize, max: usize },

    #[error("Invalid par {par} for hole {hole}")]
    InvalidPar { hole: usize, par: u32 },

    #[error("Player first name must not be empty")]
    EmptyFirstName,

    #[error("Player {player} has {actual} score slots, expected {expected}")]
    ScoreCountMismatch {
        player: String,
        expected: usize,
        actual: usize,
    },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
