//! Move legality and terminal-condition checks.
//!
//! Legality is recomputed from coordinates on every call. The scan functions
//! evaluate relative to whatever side `current_turn` names, so callers ask
//! "can the opponent move?" by passing a copy with the turn flipped.

use log::warn;

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{
    direction_allowed, is_dark, piece_class_for_side, square_delta, DIAGONALS,
};

/// One-square diagonal step onto an empty square in a permitted direction.
#[inline]
pub fn step_is_legal(
    game_state: &GameState,
    from: Square,
    to: Square,
    class: PieceClass,
    side: Player,
) -> bool {
    let (d_row, d_col) = square_delta(from, to);
    if d_row.abs() != 1 || d_col.abs() != 1 {
        return false;
    }
    if !direction_allowed(class, side, d_row.signum()) {
        return false;
    }
    (game_state.occupancy() & square_mask(to)) == 0
}

/// Square of the opponent piece jumped by a legal capture `from -> to`, or
/// `None` if the jump is not legal.
pub fn capture_target(
    game_state: &GameState,
    from: Square,
    to: Square,
    class: PieceClass,
    side: Player,
) -> Option<Square> {
    let (d_row, d_col) = square_delta(from, to);
    if d_row.abs() != 2 || d_col.abs() != 2 {
        return None;
    }
    if !direction_allowed(class, side, d_row.signum()) {
        return None;
    }

    let middle = square_at(
        square_row(from) as i8 + d_row / 2,
        square_col(from) as i8 + d_col / 2,
    )?;

    if (game_state.occupancy() & square_mask(to)) != 0 {
        return None;
    }
    if (game_state.pieces_of(side.opposite()) & square_mask(middle)) == 0 {
        return None;
    }

    Some(middle)
}

/// `true` if the side to move has at least one legal step or capture.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
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
                    return true;
                }
            }

            if let Some(to) = square_at(row + 2 * d_row, col + 2 * d_col) {
                if is_dark(to) && capture_target(game_state, from, to, class, side).is_some() {
                    return true;
                }
            }
        }
    }

    false
}

/// Winner by elimination, if either side has run out of pieces.
pub fn check_winner(game_state: &GameState) -> Option<Player> {
    let player1_pieces = game_state.pieces_of(Player::Player1);
    let player2_pieces = game_state.pieces_of(Player::Player2);

    if player1_pieces == 0 && player2_pieces == 0 {
        // Unreachable through play; only a hand-edited save can produce it.
        warn!("both sides have no pieces; reporting player 2 by evaluation order");
    }

    if player1_pieces == 0 {
        return Some(Player::Player2);
    }
    if player2_pieces == 0 {
        return Some(Player::Player1);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone_pieces(p1_men: &[Square], p1_kings: &[Square], p2_men: &[Square], p2_kings: &[Square], turn: Player) -> GameState {
        let fold = |squares: &[Square]| squares.iter().fold(0u64, |acc, sq| acc | square_mask(*sq));
        GameState::from_bitboards(fold(p1_men), fold(p1_kings), fold(p2_men), fold(p2_kings), turn)
    }

    #[test]
    fn initial_layout_has_moves_for_both_sides() {
        let game = GameState::new_game();
        assert!(has_any_legal_move(&game));
        assert!(has_any_legal_move(&game.with_turn_flipped()));
    }

    #[test]
    fn one_man_each_with_no_geometric_moves_is_blocked_for_both() {
        // Player 1 man on the promotion row cannot go forward; player 2 man on
        // its own promotion row cannot either.
        let game = lone_pieces(&[62], &[], &[1], &[], Player::Player1);
        assert!(!has_any_legal_move(&game));
        assert!(!has_any_legal_move(&game.with_turn_flipped()));
    }

    #[test]
    fn men_blocked_by_a_wall_still_see_captures() {
        // Player 1 man on 8 (row 1, col 0); player 2 man on 17 blocks the
        // only forward step but can be jumped to 26.
        let game = lone_pieces(&[8], &[], &[17], &[], Player::Player1);
        assert!(has_any_legal_move(&game));

        // Landing square occupied: no step, no capture.
        let blocked = lone_pieces(&[8], &[], &[17, 26], &[], Player::Player1);
        assert!(!has_any_legal_move(&blocked));
    }

    #[test]
    fn kings_may_step_backward() {
        // Player 1 king on row 7 has only backward steps available.
        let game = lone_pieces(&[], &[62], &[1], &[], Player::Player1);
        assert!(has_any_legal_move(&game));
        assert!(step_is_legal(&game, 62, 53, PieceClass::King, Player::Player1));
        assert!(!step_is_legal(&game, 62, 53, PieceClass::Man, Player::Player1));
    }

    #[test]
    fn capture_requires_an_opponent_in_the_middle() {
        let own_middle = lone_pieces(&[33, 42], &[], &[1], &[], Player::Player1);
        assert_eq!(capture_target(&own_middle, 33, 51, PieceClass::Man, Player::Player1), None);

        let empty_middle = lone_pieces(&[33], &[], &[1], &[], Player::Player1);
        assert_eq!(capture_target(&empty_middle, 33, 51, PieceClass::Man, Player::Player1), None);

        let enemy_king = lone_pieces(&[33], &[], &[], &[42], Player::Player1);
        assert_eq!(capture_target(&enemy_king, 33, 51, PieceClass::Man, Player::Player1), Some(42));
    }

    #[test]
    fn men_cannot_capture_backward_but_kings_can() {
        let game = lone_pieces(&[51], &[], &[42], &[], Player::Player1);
        assert_eq!(capture_target(&game, 51, 33, PieceClass::Man, Player::Player1), None);
        assert_eq!(capture_target(&game, 51, 33, PieceClass::King, Player::Player1), Some(42));
    }

    #[test]
    fn winner_by_elimination() {
        assert_eq!(check_winner(&GameState::new_game()), None);
        assert_eq!(check_winner(&lone_pieces(&[33], &[], &[], &[], Player::Player2)), Some(Player::Player1));
        assert_eq!(check_winner(&lone_pieces(&[], &[], &[], &[44], Player::Player1)), Some(Player::Player2));
    }

    #[test]
    fn man_with_step_and_jump_landing_both_filled_is_blocked() {
        let open = lone_pieces(&[40, 42], &[], &[56], &[], Player::Player2);
        assert!(has_any_legal_move(&open));

        let walled = lone_pieces(&[49, 42], &[], &[56], &[], Player::Player2);
        assert!(!has_any_legal_move(&walled));
    }

    #[test]
    fn empty_board_reports_player2_by_evaluation_order() {
        assert_eq!(check_winner(&GameState::new_empty()), Some(Player::Player2));
        assert_eq!(check_winner(&GameState::new_empty().with_turn_flipped()), Some(Player::Player2));
    }
}
