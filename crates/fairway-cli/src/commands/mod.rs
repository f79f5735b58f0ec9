//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod course;
pub mod leaderboard;
pub mod play;
pub mod scorecard;
