//! Perft leaf counting over single-jump checkers moves.
//!
//! Each ply applies one legal move for the side to move and hands the turn
//! over. Positions where a side has no pieces or no moves simply have no
//! children.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::CheckersMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    /// Leaves at which the side to move has no legal move left.
    pub terminal_positions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.terminal_positions += rhs.terminal_positions;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        perft_recurse(game_state, mv, depth, 1, &mut total);
    }
    total
}

/// Per-root-move breakdown, useful when two implementations disagree.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(CheckersMove, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            perft_recurse(game_state, mv, depth, 1, &mut local);
            (mv, local)
        })
        .collect()
}

fn perft_recurse(
    parent: &GameState,
    mv: CheckersMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let mut child = *parent;
    let promoted = apply_move(&mut child, mv);
    child.switch_turn();

    let children = generate_legal_moves(&child);

    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if promoted {
            counts.promotions += 1;
        }
        if children.is_empty() {
            counts.terminal_positions += 1;
        }
        return;
    }

    let mut subtotal = PerftCounts::default();
    for next in children {
        perft_recurse(&child, next, search_depth, current_depth + 1, &mut subtotal);
    }
    counts.merge(subtotal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{square_mask, Player};

    #[test]
    fn depth_zero_is_one_node() {
        assert_eq!(perft(&GameState::new_game(), 0).nodes, 1);
    }

    #[test]
    fn shallow_starting_position_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 7);
        // The sides cannot interact before each has moved once.
        assert_eq!(perft(&game, 2).nodes, 49);
        assert_eq!(perft(&game, 2).captures, 0);
        assert_eq!(perft(&game, 3).nodes, 379);
        assert_eq!(perft(&game, 4).nodes, 2872);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 3);
        let summed = divided.iter().map(|(_, counts)| counts.nodes).sum::<usize>();
        assert_eq!(divided.len(), 7);
        assert_eq!(summed, perft(&game, 3).nodes);
    }

    #[test]
    fn capture_and_promotion_are_counted() {
        let game = GameState::from_bitboards(square_mask(10), 0, square_mask(19), 0, Player::Player2);
        let counts = perft(&game, 1);

        // 19 -> 12 steps; 19 -> 1 jumps 10 and is crowned, leaving player 1 empty.
        assert_eq!(counts.nodes, 2);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.promotions, 1);
        assert_eq!(counts.terminal_positions, 1);
    }
}
