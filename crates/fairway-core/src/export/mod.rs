//! Export formats for leaderboards and scorecards.

mod console;

pub use console::*;

use serde::Serialize;

use crate::error::Result;
use crate::game::Game;
use crate::player::PlayerId;
use crate::score::CrownTier;
use crate::tracker::{holes_played, rank_players, score_to_par, total_score};

/// One row of the standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based place
    pub place: usize,
    pub crown: Option<CrownTier>,
    pub player_id: PlayerId,
    pub name: String,
    pub initials: String,
    pub total: u32,
    pub holes_played: usize,
    pub to_par: i64,
}

/// Ranked standings for every player in the game
pub fn build_leaderboard(game: &Game) -> Vec<LeaderboardEntry> {
    rank_players(game.players())
        .into_iter()
        .enumerate()
        .map(|(rank, player)| LeaderboardEntry {
            place: rank + 1,
            crown: CrownTier::from_rank(rank),
            player_id: player.id,
            name: player.full_name(),
            initials: player.initials(),
            total: total_score(player),
            holes_played: holes_played(player),
            to_par: score_to_par(player, game.course()),
        })
        .collect()
}

pub fn format_leaderboard_json(entries: &[LeaderboardEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// "E" for even, "+3" over, "-2" under
pub fn format_to_par(to_par: i64) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{}", n),
        n => n.to_string(),
    }
}

/// TSV header for a hole-by-hole scorecard
pub fn format_scorecard_tsv_header(holes: usize) -> String {
    let mut columns = vec!["player".to_string()];
    columns.extend((1..=holes).map(|h| h.to_string()));
    columns.push("total".to_string());
    columns.join("\t")
}

/// Full scorecard: par row first, then one row per player in roster order.
///
/// Unrecorded holes are written as "-".
pub fn format_scorecard_tsv(game: &Game) -> String {
    let course = game.course();
    let mut lines = vec![format_scorecard_tsv_header(course.len())];

    let mut par_row = vec!["par".to_string()];
    par_row.extend(course.holes().iter().map(|h| h.par().to_string()));
    par_row.push(course.total_par().to_string());
    lines.push(par_row.join("\t"));

    for player in game.players() {
        let mut row = vec![player.full_name()];
        row.extend(player.scores.iter().map(|s| match s {
            Some(score) => score.to_string(),
            None => "-".to_string(),
        }));
        row.push(total_score(player).to_string());
        lines.push(row.join("\t"));
    }

    lines.join("\n")
}
