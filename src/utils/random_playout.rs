//! Seeded random self-play for exercising the engine end to end.
//!
//! Plays uniformly random legal moves for both sides from a given position
//! until the game ends or a ply cap is reached. Runs are reproducible from the
//! seed, which makes them useful for invariant sweeps in tests and as a bench
//! workload.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::attempt_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::MoveRecord;
use crate::move_generation::turn_flow::finish_turn;

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 300,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub status: GameStatus,
    pub final_state: GameState,
    pub history: Vec<MoveRecord>,
}

impl PlayoutResult {
    #[inline]
    pub fn plies(&self) -> usize {
        self.history.len()
    }
}

/// Plays random legal moves from `start`.
///
/// `inspect` sees every position reached (after the move, before the turn is
/// handed over), so callers can check invariants along the way.
pub fn random_playout_with<F>(start: &GameState, config: PlayoutConfig, mut inspect: F) -> PlayoutResult
where
    F: FnMut(&GameState, &MoveRecord),
{
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game_state = *start;
    let mut history = Vec::new();
    let mut status = GameStatus::InProgress;

    for _ in 0..config.max_plies {
        let moves = generate_legal_moves(&game_state);
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };

        let Ok(record) = attempt_move(&mut game_state, mv.from as i32, mv.to as i32) else {
            break;
        };
        inspect(&game_state, &record);
        history.push(record);

        status = finish_turn(&mut game_state);
        if status.is_over() {
            break;
        }
    }

    PlayoutResult {
        status,
        final_state: game_state,
        history,
    }
}

pub fn random_playout(start: &GameState, config: PlayoutConfig) -> PlayoutResult {
    random_playout_with(start, config, |_, _| {})
}
