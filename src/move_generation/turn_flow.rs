//! Turn handover after an accepted move.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{check_winner, has_any_legal_move};

/// Evaluates the board after the side to move has played.
///
/// Elimination is checked first, then whether the opponent (evaluated on a
/// flipped copy) has any legal move. Only when the game goes on is the turn
/// handed over; on a terminal result the state is left as is.
pub fn finish_turn(game_state: &mut GameState) -> GameStatus {
    let status = evaluate_after_move(game_state);
    if !status.is_over() {
        game_state.switch_turn();
    }
    status
}

/// Terminal check for the position reached by the side to move, without
/// touching `game_state`.
pub fn evaluate_after_move(game_state: &GameState) -> GameStatus {
    if let Some(winner) = check_winner(game_state) {
        return GameStatus::Won {
            winner,
            reason: WinReason::Elimination,
        };
    }

    let next = game_state.with_turn_flipped();
    if !has_any_legal_move(&next) {
        return GameStatus::Won {
            winner: game_state.current_turn,
            reason: WinReason::OpponentBlocked,
        };
    }

    GameStatus::InProgress
}
