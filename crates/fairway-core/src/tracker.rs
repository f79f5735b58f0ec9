//! Scoring and ranking over a game's roster.

use crate::course::Course;
use crate::error::Result;
use crate::game::Game;
use crate::player::{Player, PlayerId};
use crate::score::CrownTier;

pub use crate::player::display_initials;

/// Record `score` for a player on a hole, returning the updated game
pub fn record_score(game: &Game, id: PlayerId, hole_index: usize, score: u32) -> Result<Game> {
    game.record_score(id, hole_index, score)
}

/// Sum of all recorded strokes; unrecorded holes count as 0.
///
/// Saturates at `u32::MAX` for hand-built players whose slots bypass
/// the stroke limit.
pub fn total_score(player: &Player) -> u32 {
    player
        .scores
        .iter()
        .flatten()
        .fold(0u32, |total, &score| total.saturating_add(score))
}

pub fn holes_played(player: &Player) -> usize {
    player.scores.iter().flatten().count()
}

/// Strokes relative to par over recorded holes only (negative is under par)
pub fn score_to_par(player: &Player, course: &Course) -> i64 {
    player
        .scores
        .iter()
        .zip(course.holes())
        .filter_map(|(score, hole)| score.map(|s| i64::from(s) - i64::from(hole.par())))
        .sum()
}

/// Players ordered by total score, lowest first.
///
/// Ties keep roster order. The input slice is not reordered.
pub fn rank_players(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by_key(|p| total_score(p));
    ranked
}

/// 0-based place in `rank_players` of the player at slice position `id`,
/// or `None` if the slice is shorter.
///
/// Inside a `Game` the id and the roster position are the same; for other
/// slices the position is what counts, not `Player::id`.
pub fn rank_of(players: &[Player], id: PlayerId) -> Option<usize> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by_key(|&index| total_score(&players[index]));
    order.iter().position(|&index| index == id.index())
}

pub fn crown_of(players: &[Player], id: PlayerId) -> Option<CrownTier> {
    rank_of(players, id).and_then(CrownTier::from_rank)
}
