//! Tests for scoring and ranking through the public API
//!
//! Covers totals, stable ranking, single-cell score updates and initials.

use fairway_core::{
    Course, CrownTier, Error, Game, Player, PlayerId, display_initials, rank_of, rank_players,
    record_score, total_score,
};

fn four_player_game() -> Game {
    let course = Course::uniform("Example course", 2, 3).unwrap();
    let players = vec![
        Player::with_scores("John", Some("Doe"), 2, &[5, 5]).unwrap(),
        Player::with_scores("Jane", None, 2, &[4, 4]).unwrap(),
        Player::with_scores("Bob", Some("Smith"), 2, &[3, 5]).unwrap(),
        Player::with_scores("Alice", None, 2, &[6, 6]).unwrap(),
    ];
    Game::new(course, players).unwrap()
}

mod totals {
    use super::*;

    #[test]
    fn test_total_is_sum_of_recorded_scores() {
        let game = four_player_game();
        let totals: Vec<u32> = game.players().iter().map(total_score).collect();
        assert_eq!(totals, [10, 8, 8, 12]);
    }

    #[test]
    fn test_fresh_player_totals_zero() {
        let player = Player::new("Jane", None, 18).unwrap();
        assert_eq!(total_score(&player), 0);
    }
}

mod ranking {
    use super::*;

    #[test]
    fn test_ranking_example() {
        let game = four_player_game();
        let names: Vec<&str> = rank_players(game.players())
            .iter()
            .map(|p| p.first_name.as_str())
            .collect();
        assert_eq!(names, ["Jane", "Bob", "John", "Alice"]);
    }

    #[test]
    fn test_ranking_does_not_reorder_roster() {
        let game = four_player_game();
        let _ = rank_players(game.players());
        let _ = rank_players(game.players());
        let names: Vec<&str> = game
            .players()
            .iter()
            .map(|p| p.first_name.as_str())
            .collect();
        assert_eq!(names, ["John", "Jane", "Bob", "Alice"]);
    }

    #[test]
    fn test_all_tied_keeps_roster_order() {
        let course = Course::uniform("Example course", 18, 3).unwrap();
        let players = ["John", "Jane", "Bob", "Alice"]
            .iter()
            .map(|name| Player::new(name, None, 18).unwrap())
            .collect();
        let game = Game::new(course, players).unwrap();

        let ids: Vec<PlayerId> = rank_players(game.players()).iter().map(|p| p.id).collect();
        assert_eq!(ids, [PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)]);
    }

    #[test]
    fn test_rank_of_drives_crowns() {
        let game = four_player_game();
        let crowns: Vec<Option<CrownTier>> = game
            .players()
            .iter()
            .map(|p| rank_of(game.players(), p.id).and_then(CrownTier::from_rank))
            .collect();
        assert_eq!(
            crowns,
            [
                Some(CrownTier::Third),
                Some(CrownTier::First),
                Some(CrownTier::Second),
                Some(CrownTier::Fourth),
            ]
        );
    }

    #[test]
    fn test_same_first_name_players_are_distinct() {
        let course = Course::uniform("Example course", 1, 3).unwrap();
        let players = vec![
            Player::with_scores("John", Some("Doe"), 1, &[5]).unwrap(),
            Player::with_scores("John", Some("Roe"), 1, &[3]).unwrap(),
        ];
        let game = Game::new(course, players).unwrap();
        assert_eq!(rank_of(game.players(), PlayerId(1)), Some(0));
        assert_eq!(rank_of(game.players(), PlayerId(0)), Some(1));
    }
}

mod recording {
    use super::*;

    #[test]
    fn test_record_changes_exactly_one_cell() {
        let course = Course::uniform("Example course", 18, 3).unwrap();
        let players = ["John", "Jane", "Bob", "Alice"]
            .iter()
            .map(|name| Player::new(name, None, 18).unwrap())
            .collect();
        let game = Game::new(course, players).unwrap();

        let updated = record_score(&game, PlayerId(0), 2, 5).unwrap();

        for (before, after) in game.players().iter().zip(updated.players()) {
            for hole in 0..18 {
                if before.id == PlayerId(0) && hole == 2 {
                    assert_eq!(after.score_at(hole), Some(5));
                } else {
                    assert_eq!(after.score_at(hole), before.score_at(hole));
                }
            }
            assert_eq!(after.first_name, before.first_name);
        }
        assert_eq!(updated.course(), game.course());
        assert_eq!(total_score(updated.player(PlayerId(0)).unwrap()), 5);
    }

    #[test]
    fn test_record_overwrites_previous_value() {
        let game = four_player_game();
        let updated = record_score(&game, PlayerId(1), 0, 2).unwrap();
        assert_eq!(total_score(updated.player(PlayerId(1)).unwrap()), 6);
    }

    #[test]
    fn test_record_rejects_bad_targets() {
        let game = four_player_game();
        assert!(matches!(
            record_score(&game, PlayerId(4), 0, 3),
            Err(Error::PlayerNotFound(PlayerId(4)))
        ));
        assert!(matches!(
            record_score(&game, PlayerId(0), 2, 3),
            Err(Error::HoleOutOfRange { index: 2, holes: 2 })
        ));
    }
}

mod initials {
    use super::*;

    #[test]
    fn test_initials_examples() {
        let john = Player::new("John", Some("Doe"), 1).unwrap();
        let jane = Player::new("Jane", None, 1).unwrap();
        assert_eq!(display_initials(&john), "JD");
        assert_eq!(display_initials(&jane), "Ja");
    }

    #[test]
    fn test_initials_single_letter_name() {
        let player = Player::new("Q", None, 1).unwrap();
        assert_eq!(display_initials(&player), "Q");
    }
}
