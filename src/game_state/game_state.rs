//! Core bitboard board state.
//!
//! `GameState` is the single value the engine works on: one bitboard per
//! piece class per side plus the side to move. It is `Copy`, so "what-if"
//! evaluations run on copies instead of mutating the authoritative state.

use thiserror::Error;

use crate::game_state::checkers_rules::{DARK_SQUARES, PLAYER1_START, PLAYER2_START};
use crate::game_state::checkers_types::*;
use crate::utils::save_generator::generate_save_text;
use crate::utils::save_parser::{parse_save_text, SaveLoadError};

/// Bitboard game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    // Player 1 (red): "r" men, "R" kings.
    pub player1_men: u64,
    pub player1_kings: u64,

    // Player 2 (black): "b" men, "B" kings.
    pub player2_men: u64,
    pub player2_kings: u64,

    pub current_turn: Player,
}

/// First broken invariant found by [`GameState::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("square {0} is claimed by more than one bitboard")]
    OverlappingPieces(Square),
    #[error("square {0} is a light square but holds a piece")]
    PieceOnLightSquare(Square),
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player1_men: 0,
            player1_kings: 0,
            player2_men: 0,
            player2_kings: 0,
            current_turn: Player::Player1,
        }
    }
}

impl GameState {
    /// Empty board, player 1 to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Starting layout: player 1 on rows 0-2, player 2 on rows 5-7, player 1 to move.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            player1_men: PLAYER1_START,
            player1_kings: 0,
            player2_men: PLAYER2_START,
            player2_kings: 0,
            current_turn: Player::Player1,
        }
    }

    #[inline]
    pub fn from_bitboards(
        player1_men: u64,
        player1_kings: u64,
        player2_men: u64,
        player2_kings: u64,
        current_turn: Player,
    ) -> Self {
        Self {
            player1_men,
            player1_kings,
            player2_men,
            player2_kings,
            current_turn,
        }
    }

    #[inline]
    pub fn from_save_text(text: &str) -> Result<Self, SaveLoadError> {
        parse_save_text(text)
    }

    #[inline]
    pub fn get_save_text(&self) -> String {
        generate_save_text(self)
    }

    /// Discards every piece placement and starts a fresh game.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opposite();
    }

    /// Copy of this state with the other side to move.
    #[inline]
    pub fn with_turn_flipped(&self) -> Self {
        let mut next = *self;
        next.switch_turn();
        next
    }

    #[inline]
    pub fn bitboard(&self, side: Player, class: PieceClass) -> u64 {
        match (side, class) {
            (Player::Player1, PieceClass::Man) => self.player1_men,
            (Player::Player1, PieceClass::King) => self.player1_kings,
            (Player::Player2, PieceClass::Man) => self.player2_men,
            (Player::Player2, PieceClass::King) => self.player2_kings,
        }
    }

    #[inline]
    pub fn bitboard_mut(&mut self, side: Player, class: PieceClass) -> &mut u64 {
        match (side, class) {
            (Player::Player1, PieceClass::Man) => &mut self.player1_men,
            (Player::Player1, PieceClass::King) => &mut self.player1_kings,
            (Player::Player2, PieceClass::Man) => &mut self.player2_men,
            (Player::Player2, PieceClass::King) => &mut self.player2_kings,
        }
    }

    /// Men and kings of one side.
    #[inline]
    pub fn pieces_of(&self, side: Player) -> u64 {
        self.bitboard(side, PieceClass::Man) | self.bitboard(side, PieceClass::King)
    }

    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.player1_men | self.player1_kings | self.player2_men | self.player2_kings
    }

    #[inline]
    pub fn piece_count(&self, side: Player) -> u32 {
        self.pieces_of(side).count_ones()
    }

    /// Class and side of the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<(Player, PieceClass)> {
        let mask = square_mask(square);
        for side in [Player::Player1, Player::Player2] {
            for class in [PieceClass::Man, PieceClass::King] {
                if (self.bitboard(side, class) & mask) != 0 {
                    return Some((side, class));
                }
            }
        }
        None
    }

    /// Checks that the bitboards are pairwise disjoint and only use dark squares.
    pub fn validate(&self) -> Result<(), StateViolation> {
        let boards = [
            self.player1_men,
            self.player1_kings,
            self.player2_men,
            self.player2_kings,
        ];

        let mut seen = 0u64;
        for board in boards {
            let overlap = seen & board;
            if overlap != 0 {
                return Err(StateViolation::OverlappingPieces(overlap.trailing_zeros() as Square));
            }
            seen |= board;
        }

        let light = seen & !DARK_SQUARES;
        if light != 0 {
            return Err(StateViolation::PieceOnLightSquare(light.trailing_zeros() as Square));
        }

        Ok(())
    }
}
