//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::score::CrownTier;
use crate::session::SelectedPlayerView;

use super::{LeaderboardEntry, format_to_par};

/// Format standings as a boxed, colored table
pub fn format_leaderboard_console(course_name: &str, entries: &[LeaderboardEntry]) -> String {
    let mut output = String::new();

    let border_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(course_name.chars().count())
        + 30;
    let border = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {}", course_name.bold());
    let _ = writeln!(output, "{}", border_dim);
    for entry in entries {
        let crown = match entry.crown {
            Some(tier) => format_colored_crown(&tier),
            None => "   ".to_string(),
        };
        let _ = writeln!(
            output,
            "  {} {:>2}. {:<4} {}  {} ({}, {} holes)",
            crown,
            entry.place,
            entry.initials,
            entry.name,
            entry.total,
            format_to_par(entry.to_par),
            entry.holes_played
        );
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format the selected player's panel: name, hole score and running total
pub fn format_selected_player_console(view: &SelectedPlayerView) -> String {
    let score = match view.hole_score {
        Some(score) => score.to_string(),
        None => "-".dimmed().to_string(),
    };
    format!(
        "Selected Player: {}\nScore: {}\nTotal score: {}",
        view.first_name.bold(),
        score,
        view.total
    )
}

/// Format crown with color
fn format_colored_crown(tier: &CrownTier) -> String {
    let name = tier.short_name();
    match tier {
        CrownTier::First => name.truecolor(255, 200, 0).bold().to_string(),
        CrownTier::Second => name.truecolor(192, 192, 192).to_string(),
        CrownTier::Third => name.truecolor(205, 127, 50).to_string(),
        CrownTier::Fourth => name.cyan().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;

    fn entry(place: usize, name: &str, initials: &str, total: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            place,
            crown: CrownTier::from_rank(place - 1),
            player_id: PlayerId(place - 1),
            name: name.to_string(),
            initials: initials.to_string(),
            total,
            holes_played: 3,
            to_par: 0,
        }
    }

    #[test]
    fn test_format_leaderboard_console_lists_players_in_order() {
        let entries = vec![entry(1, "Jane", "Ja", 8), entry(2, "John Doe", "JD", 10)];
        let output = format_leaderboard_console("Example course", &entries);

        assert!(output.contains("Example course"));
        let jane = output.find("Jane").unwrap();
        let john = output.find("John Doe").unwrap();
        assert!(jane < john);
        assert!(output.contains("1st"));
        assert!(output.contains("2nd"));
    }

    #[test]
    fn test_format_leaderboard_console_no_crown_past_fourth() {
        let entries: Vec<_> = (1..=5).map(|i| entry(i, "P", "P", i as u32)).collect();
        let output = format_leaderboard_console("Course", &entries);
        assert!(output.contains("4th"));
        assert!(!output.contains("5th"));
    }

    #[test]
    fn test_format_selected_player_console() {
        let view = SelectedPlayerView {
            player_id: PlayerId(0),
            first_name: "John".to_string(),
            hole: 3,
            hole_score: Some(4),
            total: 11,
        };
        let output = format_selected_player_console(&view);
        assert!(output.contains("John"));
        assert!(output.contains("Score: 4"));
        assert!(output.contains("Total score: 11"));
    }
}
