//! Shared value types for the checkers engine.
//!
//! Sides, piece classes, board squares and game outcomes live here so the
//! state model, move engine and collaborators agree on one vocabulary.

use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Board square index (`0..=63`, row = index / 8, col = index % 8).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Row delta sign a man of this side is allowed to travel.
    #[inline]
    pub const fn forward_row_step(self) -> i8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => -1,
        }
    }

    /// Row on which a man of this side is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::Player1 => 7,
            Player::Player2 => 0,
        }
    }

    /// Numeric turn code used by the save file (`1` or `2`).
    #[inline]
    pub const fn turn_number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }

    /// Decodes a saved turn code. Anything other than `2` falls back to player 1.
    #[inline]
    pub const fn from_turn_number(turn: i64) -> Self {
        match turn {
            2 => Player::Player2,
            _ => Player::Player1,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Player::Player1 => "Player 1 (Red)",
            Player::Player2 => "Player 2 (Black)",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Piece class (side is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceClass {
    Man,
    King,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left.
    Elimination,
    /// The loser is to move and has no legal step or capture.
    OpponentBlocked,
}

/// Outcome of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won { winner: Player, reason: WinReason },
}

impl GameStatus {
    #[inline]
    pub const fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[inline]
pub const fn square_row(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_col(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}

/// Converts on-board `(row, col)` coordinates to a square index.
#[inline]
pub fn square_at(row: i8, col: i8) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row * 8 + col) as Square)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips_between_the_two_sides() {
        assert_eq!(Player::Player1.opposite(), Player::Player2);
        assert_eq!(Player::Player2.opposite(), Player::Player1);
    }

    #[test]
    fn turn_number_decoding_normalizes_unknown_codes() {
        assert_eq!(Player::from_turn_number(1), Player::Player1);
        assert_eq!(Player::from_turn_number(2), Player::Player2);
        assert_eq!(Player::from_turn_number(9), Player::Player1);
        assert_eq!(Player::from_turn_number(-3), Player::Player1);
    }

    #[test]
    fn square_at_rejects_off_board_coordinates() {
        assert_eq!(square_at(0, 1), Some(1));
        assert_eq!(square_at(7, 6), Some(62));
        assert_eq!(square_at(-1, 3), None);
        assert_eq!(square_at(4, 8), None);
    }
}
