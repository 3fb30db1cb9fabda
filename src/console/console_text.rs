//! Fixed console text: banner, menu and how-to-play page.

pub const TITLE: &str = "Bit Board Checkers [Two-Player Edition]\n";

pub const MENU: &str = "\n------------ MAIN MENU ------------\n\
1 - Display Current Board\n\
2 - Make A Move (enter FROM/TO positions)\n\
3 - Save Game\n\
4 - Load Game\n\
5 - How To Play\n\
6 - New Game (Reset Board)\n\
7 - Exit\n\
-----------------------------------\n\
Enter option number: ";

pub const PLAY_AGAIN_PROMPT: &str = "Would you like to play again (New Game - Reset Board) [Enter 1]?\n\
Or Exit [Enter 2]?\n\n\
Enter Option: ";

pub const INSTRUCTIONS: &str = r##"
=== How to Play Bit Board Checkers ===
- The board is 8 x 8 and drawn in ASCII:
    "_" light squares, "#" empty dark squares
    "r"/"b" men for Player 1 (Red) and Player 2 (Black)
    "R"/"B" kings for Player 1 (Red) and Player 2 (Black)
    12 pieces per player.

- Movement:
    Pieces only move diagonally along "#" dark squares.
    Enter the FROM index and then the TO index (0-63). A numbered reference
    board is shown during each turn. Enter -1 at either prompt to cancel.

    Player 1 (Red) moves first; "r" men move DOWN the board (to larger indexes).
    Player 2 (Black) "b" men move UP the board (to smaller indexes).

    Simple move: one step diagonally forward onto an empty dark square.
    Capture: jump diagonally over an adjacent opponent piece onto the empty
    square behind it, e.g. "b" on 40 jumps TO 26, capturing the "r" on 33.
    Only one piece is captured per move; there are no multi-jumps.

    King promotion: a man reaching the far row becomes a king ("r" -> "R",
    "b" -> "B") and may then move and capture in both directions.

- Winning: capture every opposing piece, or leave the opponent with no legal
  move on their turn.

- Save and Load write a five-line text file holding the game state. Type the
  file name exactly as you saved it when loading.
======================================
"##;
