//! Interactive scoring mode.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use fairway_core::{
    PlayerId, ScoreSession, crown_of, format_leaderboard_console, format_selected_player_console,
};
use tracing::{debug, warn};

use crate::cli_utils::load_game;

const HELP: &str = "\
Commands:
  select <n|name>  select a player by roster number or first name
  score <n>        record strokes for the selected player (a bare number works too)
  clear            deselect the current player
  next / prev      move between holes
  board            show the standings
  players          list the roster
  help             show this message
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayCommand {
    Select(String),
    Score(String),
    Clear,
    Next,
    Prev,
    Board,
    Players,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<PlayCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "select" | "s" => PlayCommand::Select(rest.to_string()),
        "score" => PlayCommand::Score(rest.to_string()),
        "clear" => PlayCommand::Clear,
        "next" | "n" => PlayCommand::Next,
        "prev" | "p" => PlayCommand::Prev,
        "board" | "b" => PlayCommand::Board,
        "players" => PlayCommand::Players,
        "help" | "?" => PlayCommand::Help,
        "quit" | "q" | "exit" => PlayCommand::Quit,
        _ => PlayCommand::Score(line.to_string()),
    };
    Some(command)
}

/// Run the interactive scoring loop on stdin/stdout
pub fn run(setup: Option<&Path>) -> Result<()> {
    let game = load_game(setup)?;
    let mut session = ScoreSession::new(game);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock())
}

fn run_loop<R: BufRead, W: Write>(session: &mut ScoreSession, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", session.game().course().name())?;
    write_players(session, &mut out)?;
    write_hole(session, &mut out)?;
    writeln!(out, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };
        debug!("Command: {:?}", command);

        match command {
            PlayCommand::Select(target) => match resolve_player(session, &target) {
                Some(id) => match session.select_player(id) {
                    Ok(()) => write_selected(session, &mut out)?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                },
                None => writeln!(out, "No player matches {:?}", target)?,
            },
            PlayCommand::Score(text) => match session.enter_score(&text) {
                Ok(_) => write_selected(session, &mut out)?,
                Err(e) => {
                    warn!("Score rejected: {}", e);
                    writeln!(out, "Error: {}", e)?;
                }
            },
            PlayCommand::Clear => session.clear_selection(),
            PlayCommand::Next => {
                if session.next_hole() {
                    write_hole(session, &mut out)?;
                    write_selected(session, &mut out)?;
                } else {
                    writeln!(out, "Already on the last hole")?;
                }
            }
            PlayCommand::Prev => {
                if session.prev_hole() {
                    write_hole(session, &mut out)?;
                    write_selected(session, &mut out)?;
                } else {
                    writeln!(out, "Already on the first hole")?;
                }
            }
            PlayCommand::Board => {
                let entries = session.leaderboard();
                writeln!(
                    out,
                    "{}",
                    format_leaderboard_console(session.game().course().name(), &entries)
                )?;
            }
            PlayCommand::Players => write_players(session, &mut out)?,
            PlayCommand::Help => writeln!(out, "{}", HELP)?,
            PlayCommand::Quit => break,
        }
    }

    out.flush()?;
    Ok(())
}

/// Roster number (1-based) or first name
fn resolve_player(session: &ScoreSession, target: &str) -> Option<PlayerId> {
    if let Ok(number) = target.parse::<usize>() {
        return number.checked_sub(1).map(PlayerId);
    }
    session.game().find_by_first_name(target).map(|p| p.id)
}

fn write_hole<W: Write>(session: &ScoreSession, out: &mut W) -> Result<()> {
    let cursor = session.cursor();
    let par = session
        .game()
        .course()
        .hole(cursor.index())
        .map(|h| h.par())
        .unwrap_or_default();
    writeln!(out, "Hole {} (par {}) ⛳", cursor.number(), par)?;
    Ok(())
}

fn write_players<W: Write>(session: &ScoreSession, out: &mut W) -> Result<()> {
    let players = session.game().players();
    for player in players {
        let marker = if session.selected() == Some(player.id) {
            "*"
        } else {
            " "
        };
        let crown = crown_of(players, player.id)
            .map(|tier| format!(" [{}]", tier))
            .unwrap_or_default();
        writeln!(
            out,
            "{} {}. {} ({}){}",
            marker,
            player.id.index() + 1,
            player.initials(),
            player.full_name(),
            crown
        )?;
    }
    Ok(())
}

fn write_selected<W: Write>(session: &ScoreSession, out: &mut W) -> Result<()> {
    if let Some(view) = session.selected_view() {
        writeln!(out, "{}", format_selected_player_console(&view))?;
    }
    Ok(())
}
