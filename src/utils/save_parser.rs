//! Save-file-to-GameState parser.
//!
//! A save file holds five whitespace-separated decimal values in fixed order:
//! the four bitboards (player 1 men, player 1 kings, player 2 men, player 2
//! kings) and the turn code. A load either yields a complete state or fails;
//! callers keep their previous state on failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::game_state::{checkers_types::*, game_state::GameState};

#[derive(Debug, Error)]
pub enum SaveLoadError {
    #[error("could not open save file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid save file (line {line}): value is missing")]
    MissingField { line: usize },
    #[error("invalid save file (line {line}): {token:?} is not a valid {expected}")]
    Malformed {
        line: usize,
        token: String,
        expected: &'static str,
    },
}

impl SaveLoadError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        SaveLoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Parses the five save fields. A turn code other than 1 or 2 becomes player 1.
pub fn parse_save_text(text: &str) -> Result<GameState, SaveLoadError> {
    let mut tokens = text.split_whitespace();

    let player1_men = parse_bitboard(tokens.next(), 1)?;
    let player1_kings = parse_bitboard(tokens.next(), 2)?;
    let player2_men = parse_bitboard(tokens.next(), 3)?;
    let player2_kings = parse_bitboard(tokens.next(), 4)?;
    let turn_code = parse_turn_code(tokens.next(), 5)?;

    if turn_code != 1 && turn_code != 2 {
        warn!("save file turn code {turn_code} is not 1 or 2; defaulting to player 1");
    }

    Ok(GameState::from_bitboards(
        player1_men,
        player1_kings,
        player2_men,
        player2_kings,
        Player::from_turn_number(turn_code),
    ))
}

/// Reads and parses a save file.
pub fn load_game(path: &Path) -> Result<GameState, SaveLoadError> {
    let text = fs::read_to_string(path).map_err(|err| SaveLoadError::io(path, err))?;
    let game_state = parse_save_text(&text)?;

    if let Err(violation) = game_state.validate() {
        warn!("loaded state from {} is inconsistent: {violation}", path.display());
    }
    info!("game loaded from {}", path.display());

    Ok(game_state)
}

/// Boolean load contract: replaces `game_state` on success, leaves it
/// untouched on any failure.
pub fn load_into(path: &Path, game_state: &mut GameState) -> bool {
    match load_game(path) {
        Ok(loaded) => {
            *game_state = loaded;
            true
        }
        Err(err) => {
            warn!("{err}");
            false
        }
    }
}

fn parse_bitboard(token: Option<&str>, line: usize) -> Result<u64, SaveLoadError> {
    let token = token.ok_or(SaveLoadError::MissingField { line })?;
    token.parse::<u64>().map_err(|_| SaveLoadError::Malformed {
        line,
        token: token.to_owned(),
        expected: "unsigned 64-bit bitboard",
    })
}

fn parse_turn_code(token: Option<&str>, line: usize) -> Result<i64, SaveLoadError> {
    let token = token.ok_or(SaveLoadError::MissingField { line })?;
    token.parse::<i64>().map_err(|_| SaveLoadError::Malformed {
        line,
        token: token.to_owned(),
        expected: "turn number",
    })
}
