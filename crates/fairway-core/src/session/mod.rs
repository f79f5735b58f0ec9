//! Scoring session: the state behind the scoring screen.
//!
//! A session owns the game, the current hole, the selected player and the
//! score text typed so far.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::export::{LeaderboardEntry, build_leaderboard};
use crate::game::{Game, HoleCursor};
use crate::player::PlayerId;
use crate::score::{HoleScore, parse_score};
use crate::tracker::total_score;

/// What the screen shows for the selected player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPlayerView {
    pub player_id: PlayerId,
    pub first_name: String,
    /// 1-based hole number
    pub hole: usize,
    pub hole_score: HoleScore,
    pub total: u32,
}

pub struct ScoreSession {
    game: Game,
    cursor: HoleCursor,
    selected: Option<PlayerId>,
    input: String,
}

impl ScoreSession {
    pub fn new(game: Game) -> Self {
        let cursor = HoleCursor::new(game.course().len());
        info!(
            "Session started on {} ({} holes, {} players)",
            game.course().name(),
            game.course().len(),
            game.players().len()
        );
        Self {
            game,
            cursor,
            selected: None,
            input: String::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn cursor(&self) -> &HoleCursor {
        &self.cursor
    }

    pub fn current_hole(&self) -> usize {
        self.cursor.index()
    }

    pub fn selected(&self) -> Option<PlayerId> {
        self.selected
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Select a player; any pending score text is discarded
    pub fn select_player(&mut self, id: PlayerId) -> Result<()> {
        if self.game.player(id).is_none() {
            return Err(Error::PlayerNotFound(id));
        }
        self.selected = Some(id);
        self.input.clear();
        debug!("Selected player {}", id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.input.clear();
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Record the pending input for the selected player on the current hole.
    ///
    /// On success the input is cleared and the selection kept. On failure
    /// nothing changes.
    pub fn submit_score(&mut self) -> Result<u32> {
        let id = self.selected.ok_or(Error::NoPlayerSelected)?;
        let score = parse_score(&self.input)?;
        self.game = self.game.record_score(id, self.cursor.index(), score)?;
        self.input.clear();
        Ok(score)
    }

    /// Set the input and submit it in one step
    pub fn enter_score(&mut self, text: &str) -> Result<u32> {
        self.set_input(text);
        self.submit_score()
    }

    pub fn next_hole(&mut self) -> bool {
        let moved = self.cursor.advance();
        if moved {
            debug!("Moved to hole {}", self.cursor.number());
        }
        moved
    }

    pub fn prev_hole(&mut self) -> bool {
        let moved = self.cursor.retreat();
        if moved {
            debug!("Moved to hole {}", self.cursor.number());
        }
        moved
    }

    pub fn selected_view(&self) -> Option<SelectedPlayerView> {
        let player = self.game.player(self.selected?)?;
        Some(SelectedPlayerView {
            player_id: player.id,
            first_name: player.first_name.clone(),
            hole: self.cursor.number(),
            hole_score: player.score_at(self.cursor.index()),
            total: total_score(player),
        })
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        build_leaderboard(&self.game)
    }

    pub fn into_game(self) -> Game {
        self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Course;
    use crate::player::Player;

    fn create_session() -> ScoreSession {
        let course = Course::uniform("Example course", 3, 3).unwrap();
        let players = vec![
            Player::new("John", Some("Doe"), 3).unwrap(),
            Player::new("Jane", None, 3).unwrap(),
        ];
        ScoreSession::new(Game::new(course, players).unwrap())
    }

    #[test]
    fn test_new_session() {
        let session = create_session();
        assert_eq!(session.current_hole(), 0);
        assert!(session.selected().is_none());
        assert!(session.selected_view().is_none());
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_submit_without_selection() {
        let mut session = create_session();
        session.set_input("4");
        assert!(matches!(
            session.submit_score(),
            Err(Error::NoPlayerSelected)
        ));
        assert_eq!(session.input(), "4");
    }

    #[test]
    fn test_submit_records_on_current_hole() {
        let mut session = create_session();
        session.select_player(PlayerId(1)).unwrap();
        session.next_hole();
        session.set_input("5");
        assert_eq!(session.submit_score().unwrap(), 5);

        assert_eq!(session.input(), "");
        assert_eq!(session.selected(), Some(PlayerId(1)));
        let jane = session.game().player(PlayerId(1)).unwrap();
        assert_eq!(jane.scores, vec![None, Some(5), None]);

        let view = session.selected_view().unwrap();
        assert_eq!(view.hole, 2);
        assert_eq!(view.hole_score, Some(5));
        assert_eq!(view.total, 5);
    }

    #[test]
    fn test_invalid_input_keeps_state() {
        let mut session = create_session();
        session.select_player(PlayerId(0)).unwrap();
        let before = session.game().clone();

        let err = session.enter_score("abc").unwrap_err();
        assert!(matches!(err, Error::InvalidScoreInput(_)));
        assert_eq!(session.input(), "abc");
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_select_clears_input() {
        let mut session = create_session();
        session.set_input("7");
        session.select_player(PlayerId(0)).unwrap();
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_clear_selection() {
        let mut session = create_session();
        session.select_player(PlayerId(0)).unwrap();
        session.set_input("3");
        session.clear_selection();
        assert!(session.selected().is_none());
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_select_unknown_player() {
        let mut session = create_session();
        assert!(matches!(
            session.select_player(PlayerId(7)),
            Err(Error::PlayerNotFound(PlayerId(7)))
        ));
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_hole_navigation_clamps() {
        let mut session = create_session();
        assert!(!session.prev_hole());
        assert!(session.next_hole());
        assert!(session.next_hole());
        assert!(!session.next_hole());
        assert_eq!(session.current_hole(), 2);
    }

    #[test]
    fn test_leaderboard_follows_scores() {
        let mut session = create_session();
        session.select_player(PlayerId(0)).unwrap();
        session.enter_score("6").unwrap();
        session.select_player(PlayerId(1)).unwrap();
        session.enter_score("3").unwrap();

        let board = session.leaderboard();
        assert_eq!(board[0].player_id, PlayerId(1));
        assert_eq!(board[1].player_id, PlayerId(0));
    }
}
