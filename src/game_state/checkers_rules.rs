//! Canonical checkers-rule constants.
//!
//! Board geometry masks and the starting layout. Everything here is computed
//! at compile time from row/column parity.

/// All playable (dark) squares: `(row + col)` odd.
pub const DARK_SQUARES: u64 = dark_squares_in_rows(0, 7);

/// Player 1 men at the start of a game (dark squares of rows 0-2).
pub const PLAYER1_START: u64 = dark_squares_in_rows(0, 2);

/// Player 2 men at the start of a game (dark squares of rows 5-7).
pub const PLAYER2_START: u64 = dark_squares_in_rows(5, 7);

/// Men per side in the starting layout.
pub const PIECES_PER_SIDE: u32 = 12;

const fn dark_squares_in_rows(first_row: u8, last_row: u8) -> u64 {
    let mut mask = 0u64;
    let mut row = first_row;
    while row <= last_row {
        let mut col = 0u8;
        while col < 8 {
            if (row + col) % 2 == 1 {
                mask |= 1u64 << (row * 8 + col);
            }
            col += 1;
        }
        row += 1;
    }
    mask
}
