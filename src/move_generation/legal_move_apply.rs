//! Validation and in-place application of move requests.

use log::debug;

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{capture_target, step_is_legal};
use crate::move_generation::legal_move_shared::{
    piece_class_for_side, square_from_index, square_is_playable,
};
use crate::move_generation::move_generator::{CheckersMove, MoveRecord, MoveRejection};

/// Validates `from -> to` for the side to move and applies it on success.
///
/// A capture is tried before a simple step. On any rejection the state is
/// left exactly as it was.
pub fn attempt_move(
    game_state: &mut GameState,
    from_index: i32,
    to_index: i32,
) -> Result<MoveRecord, MoveRejection> {
    let from = square_from_index(from_index).ok_or(MoveRejection::OutOfBounds(from_index))?;
    let to = square_from_index(to_index).ok_or(MoveRejection::OutOfBounds(to_index))?;

    if !square_is_playable(from_index) {
        return Err(MoveRejection::LightSquare(from));
    }
    if !square_is_playable(to_index) {
        return Err(MoveRejection::LightSquare(to));
    }

    let side = game_state.current_turn;
    let class = piece_class_for_side(game_state, side, from).ok_or(MoveRejection::NotOwnPiece(from))?;

    if (game_state.occupancy() & square_mask(to)) != 0 {
        return Err(MoveRejection::DestinationOccupied(to));
    }

    let captured = match capture_target(game_state, from, to, class, side) {
        Some(middle) => Some(middle),
        None if step_is_legal(game_state, from, to, class, side) => None,
        None => return Err(MoveRejection::IllegalGeometry { from, to }),
    };

    let promoted = apply_move(game_state, CheckersMove { from, to, captured });

    Ok(MoveRecord {
        mover: side,
        from,
        to,
        captured,
        promoted,
    })
}

/// Boolean form of [`attempt_move`].
#[inline]
pub fn try_move(game_state: &mut GameState, from_index: i32, to_index: i32) -> bool {
    attempt_move(game_state, from_index, to_index).is_ok()
}

/// Applies an already-validated move for the side to move and crowns the
/// piece if it landed on the far row. Returns whether a promotion happened.
///
/// The turn is not switched.
pub fn apply_move(game_state: &mut GameState, mv: CheckersMove) -> bool {
    let side = game_state.current_turn;
    let from_mask = square_mask(mv.from);
    let to_mask = square_mask(mv.to);

    let Some(class) = piece_class_for_side(game_state, side, mv.from) else {
        return false;
    };

    let board = game_state.bitboard_mut(side, class);
    *board = (*board & !from_mask) | to_mask;

    if let Some(jumped) = mv.captured {
        let jumped_mask = square_mask(jumped);
        let enemy = side.opposite();
        for class in [PieceClass::Man, PieceClass::King] {
            *game_state.bitboard_mut(enemy, class) &= !jumped_mask;
        }
        debug!("{side} captured the piece on {jumped} moving {} -> {}", mv.from, mv.to);
    } else {
        debug!("{side} stepped {} -> {}", mv.from, mv.to);
    }

    promote(game_state, mv.to)
}

/// Crowns the side to move's man on `square` if it sits on that side's far
/// row. A no-op for kings, empty squares and any other row.
pub fn promote(game_state: &mut GameState, square: Square) -> bool {
    let side = game_state.current_turn;
    if square_row(square) != side.promotion_row() {
        return false;
    }

    let mask = square_mask(square);
    if (game_state.bitboard(side, PieceClass::Man) & mask) == 0 {
        return false;
    }

    *game_state.bitboard_mut(side, PieceClass::Man) &= !mask;
    *game_state.bitboard_mut(side, PieceClass::King) |= mask;
    debug!("{side} piece promoted to king on {square}");
    true
}
