//! Move, move-record and rejection types shared across the engine.

use thiserror::Error;

use crate::game_state::checkers_types::*;

/// Why a move request was refused. The state is never modified when one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("position {0} is outside the board (0-63)")]
    OutOfBounds(i32),
    #[error("position {0} is not a playable dark square")]
    LightSquare(Square),
    #[error("position {0} does not hold a piece of the side to move")]
    NotOwnPiece(Square),
    #[error("position {0} is already occupied")]
    DestinationOccupied(Square),
    #[error("{from} -> {to} is neither a legal step nor a legal capture")]
    IllegalGeometry { from: Square, to: Square },
}

/// A legal step or single capture for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckersMove {
    pub from: Square,
    pub to: Square,
    /// Square of the jumped opponent piece for captures.
    pub captured: Option<Square>,
}

impl CheckersMove {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mover: Player,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
    pub promoted: bool,
}
