//! # fairway-core
//!
//! Core library for the fairway golf scorecard.
//!
//! This crate provides:
//! - Course and roster types (Hole, Course, Player, Game)
//! - Score recording, totals, ranking and crown tiers
//! - Display initials for player buttons
//! - A scoring session with clamped hole navigation
//! - TOML game setup and leaderboard export

pub mod config;
pub mod course;
pub mod error;
pub mod export;
pub mod game;
pub mod player;
pub mod score;
pub mod session;
pub mod tracker;

pub use config::{CourseSetup, GameSetup, PlayerSetup};
pub use course::{Course, Hole};
pub use error::{Error, Result};
pub use export::{
    LeaderboardEntry, build_leaderboard, format_leaderboard_console, format_leaderboard_json,
    format_scorecard_tsv, format_selected_player_console, format_to_par,
};
pub use game::{Game, HoleCursor};
pub use player::{Player, PlayerId, display_initials};
pub use score::{CrownTier, HoleScore, parse_score};
pub use session::{ScoreSession, SelectedPlayerView};
pub use tracker::{
    crown_of, holes_played, rank_of, rank_players, record_score, score_to_par, total_score,
};
