//! Full legal-move listing for the side to move.
//!
//! Enumerates squares and diagonals in the same order as
//! [`has_any_legal_move`](crate::move_generation::legal_move_checks::has_any_legal_move),
//! so the first listed move is the one the existence scan stops on.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{capture_target, step_is_legal};
use crate::move_generation::legal_move_shared::{is_dark, piece_class_for_side, DIAGONALS};
use crate::move_generation::move_generator::CheckersMove;

pub fn generate_legal_moves(game_state: &GameState) -> Vec<CheckersMove> {
    let mut out = Vec::with_capacity(16);
    generate_legal_moves_in_place(game_state, &mut out);
    out
}

/// Appends every legal move to `out` (which is cleared first).
pub fn generate_legal_moves_in_place(game_state: &GameState, out: &mut Vec<CheckersMove>) {
    out.clear();

    let side = game_state.current_turn;
    let mut own = game_state.pieces_of(side);

    while own != 0 {
        let from = own.trailing_zeros() as Square;
        own &= own - 1;

        let Some(class) = piece_class_for_side(game_state, side, from) else {
            continue;
        };
        let row = square_row(from) as i8;
        let col = square_col(from) as i8;

        for (d_row, d_col) in DIAGONALS {
            if let Some(to) = square_at(row + d_row, col + d_col) {
                if is_dark(to) && step_is_legal(game_state, from, to, class, side) {
                    out.push(CheckersMove { from, to, captured: None });
                }
            }

            if let Some(to) = square_at(row + 2 * d_row, col + 2 * d_col) {
                if is_dark(to) {
                    if let Some(middle) = capture_target(game_state, from, to, class, side) {
                        out.push(CheckersMove { from, to, captured: Some(middle) });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::try_move;
    use crate::move_generation::legal_move_checks::has_any_legal_move;

    #[test]
    fn opening_moves_for_both_sides() {
        let game = GameState::new_game();
        let moves = generate_legal_moves(&game);

        // Only the four row-2 men with an open diagonal can step: 17, 19, 21 twice each, 23 once.
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        assert!(moves.iter().all(|mv| square_row(mv.from) == 2 && square_row(mv.to) == 3));

        let black = generate_legal_moves(&game.with_turn_flipped());
        assert_eq!(black.len(), 7);
        assert!(black.iter().all(|mv| square_row(mv.from) == 5 && square_row(mv.to) == 4));
    }

    #[test]
    fn every_generated_move_is_accepted_by_try_move() {
        let game = GameState::from_bitboards(
            (1u64 << 17) | (1u64 << 26),
            1u64 << 44,
            (1u64 << 35) | (1u64 << 53),
            1u64 << 10,
            Player::Player1,
        );

        let moves = generate_legal_moves(&game);
        assert!(!moves.is_empty());
        assert_eq!(has_any_legal_move(&game), !moves.is_empty());

        for mv in moves {
            let mut copy = game;
            assert!(try_move(&mut copy, mv.from as i32, mv.to as i32), "{mv:?} should be accepted");
        }
    }

    #[test]
    fn blocked_position_generates_nothing() {
        let game = GameState::from_bitboards(1u64 << 62, 0, 1u64 << 1, 0, Player::Player1);
        assert!(generate_legal_moves(&game).is_empty());
        assert!(!has_any_legal_move(&game));
    }
}
