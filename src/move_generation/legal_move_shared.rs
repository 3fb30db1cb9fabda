//! Board queries and direction rules shared by move validation, application
//! and the terminal-condition scan.
//!
//! Public queries take raw `i32` indices: anything outside `0..=63` is simply
//! "not playable / not occupied / not owned" rather than an error.

use crate::game_state::checkers_rules::DARK_SQUARES;
use crate::game_state::{checkers_types::*, game_state::GameState};

/// Diagonal unit steps as `(row, col)`: down-right, down-left, up-right, up-left.
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Narrows a raw index to an on-board square.
#[inline]
pub fn square_from_index(index: i32) -> Option<Square> {
    if (0..64).contains(&index) {
        Some(index as Square)
    } else {
        None
    }
}

#[inline]
pub fn is_dark(square: Square) -> bool {
    (DARK_SQUARES & square_mask(square)) != 0
}

/// `true` iff `index` is on the board and `(row + col)` is odd.
#[inline]
pub fn square_is_playable(index: i32) -> bool {
    square_from_index(index).is_some_and(|square| (square_row(square) + square_col(square)) % 2 == 1)
}

#[inline]
pub fn is_occupied(game_state: &GameState, index: i32) -> bool {
    square_from_index(index).is_some_and(|square| (game_state.occupancy() & square_mask(square)) != 0)
}

/// `true` iff the piece on `index` belongs to the side to move.
#[inline]
pub fn owns_piece(game_state: &GameState, index: i32) -> bool {
    square_from_index(index).is_some_and(|square| {
        (game_state.pieces_of(game_state.current_turn) & square_mask(square)) != 0
    })
}

#[inline]
pub fn piece_is_king(game_state: &GameState, index: i32, side: Player) -> bool {
    square_from_index(index).is_some_and(|square| {
        (game_state.bitboard(side, PieceClass::King) & square_mask(square)) != 0
    })
}

/// Class of `side`'s piece on `square`, if it has one there.
#[inline]
pub fn piece_class_for_side(game_state: &GameState, side: Player, square: Square) -> Option<PieceClass> {
    let mask = square_mask(square);
    if (game_state.bitboard(side, PieceClass::King) & mask) != 0 {
        Some(PieceClass::King)
    } else if (game_state.bitboard(side, PieceClass::Man) & mask) != 0 {
        Some(PieceClass::Man)
    } else {
        None
    }
}

/// Whether a piece of `class` owned by `side` may travel in the row direction `row_sign`.
///
/// Kings go both ways; men only toward the opponent's back row.
#[inline]
pub const fn direction_allowed(class: PieceClass, side: Player, row_sign: i8) -> bool {
    match class {
        PieceClass::King => row_sign != 0,
        PieceClass::Man => row_sign == side.forward_row_step(),
    }
}

/// Row and column deltas from `from` to `to`.
#[inline]
pub fn square_delta(from: Square, to: Square) -> (i8, i8) {
    (
        square_row(to) as i8 - square_row(from) as i8,
        square_col(to) as i8 - square_col(from) as i8,
    )
}
