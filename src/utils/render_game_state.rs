//! Terminal-oriented ASCII board renderer.
//!
//! Row 0 is printed at the top so square indices read left to right, top to
//! bottom. `r`/`R` are player 1 men/kings, `b`/`B` player 2, `#` an empty dark
//! square and `_` a light square.

use crate::game_state::{checkers_types::*, game_state::GameState};

/// Render the board with column header and row labels.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("    0 1 2 3 4 5 6 7\n");

    for row in 0..8u8 {
        out.push(char::from(b'0' + row));
        out.push_str(" | ");

        for col in 0..8u8 {
            let square = row * 8 + col;
            out.push(square_char(game_state, square));
            out.push(' ');
        }

        out.push_str("|\n");
    }

    out
}

/// Numbered 8x8 board of square indices, light squares shown as `__`.
pub fn render_reference_board() -> String {
    let mut out = String::new();

    out.push_str("        0  1  2  3  4  5  6  7\n");
    for row in 0..8u8 {
        out.push_str(&format!("Row {row}: "));
        for col in 0..8u8 {
            let square = row * 8 + col;
            if (row + col) % 2 == 1 {
                out.push_str(&format!("{square:>2} "));
            } else {
                out.push_str("__ ");
            }
        }
        out.push('\n');
    }

    out
}

fn square_char(game_state: &GameState, square: Square) -> char {
    match game_state.piece_at(square) {
        Some((side, class)) => piece_char(side, class),
        None if (square_row(square) + square_col(square)) % 2 == 1 => '#',
        None => '_',
    }
}

fn piece_char(side: Player, class: PieceClass) -> char {
    match (side, class) {
        (Player::Player1, PieceClass::Man) => 'r',
        (Player::Player1, PieceClass::King) => 'R',
        (Player::Player2, PieceClass::Man) => 'b',
        (Player::Player2, PieceClass::King) => 'B',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_starting_board() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        println!("\n{rendered}");

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0 | _ r _ r _ r _ r |");
        assert_eq!(lines[2], "1 | r _ r _ r _ r _ |");
        assert_eq!(lines[4], "3 | # _ # _ # _ # _ |");
        assert_eq!(lines[8], "7 | b _ b _ b _ b _ |");
    }

    #[test]
    fn kings_render_uppercase() {
        let game = GameState::from_bitboards(0, 1u64 << 62, 0, 1u64 << 1, Player::Player1);
        let rendered = render_game_state(&game);

        assert!(rendered.lines().nth(1).is_some_and(|line| line.starts_with("0 | _ B _")));
        assert!(rendered.lines().nth(8).is_some_and(|line| line.contains("R _ |")));
    }

    #[test]
    fn reference_board_lists_dark_indices() {
        let reference = render_reference_board();
        let lines: Vec<&str> = reference.lines().collect();

        assert_eq!(lines[1], "Row 0: __  1 __  3 __  5 __  7 ");
        assert_eq!(lines[8], "Row 7: 56 __ 58 __ 60 __ 62 __ ");
    }
}
