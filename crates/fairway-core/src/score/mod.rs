//! Score-related types.
//!
//! This module contains:
//! - `HoleScore` - a per-hole score slot (`None` until recorded)
//! - `CrownTier` - leaderboard badges for the top four places
//! - `parse_score` - strict parsing of typed score input

mod crown;
mod input;

pub use crown::*;
pub use input::*;

/// Most strokes that can be recorded on a single hole
pub const MAX_STROKES: u32 = 999;

/// Strokes recorded on one hole, or `None` if the hole has not been scored yet
pub type HoleScore = Option<u32>;
