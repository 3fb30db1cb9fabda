//! Interactive console front-end and menu loop.
//!
//! Reads menu choices and positions line by line, routes move requests to the
//! engine, and renders the board and outcome text. Generic over the reader
//! and writer so the whole loop can be driven from in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::console::console_input::{
    prompt_position, read_trimmed_line, read_user_int, PositionChoice, UserInput,
};
use crate::console::console_text::{INSTRUCTIONS, MENU, PLAY_AGAIN_PROMPT, TITLE};
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::attempt_move;
use crate::move_generation::legal_move_shared::owns_piece;
use crate::move_generation::turn_flow::finish_turn;
use crate::utils::render_game_state::{render_game_state, render_reference_board};
use crate::utils::save_generator::save_game;
use crate::utils::save_parser::load_game;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Directory save file names are resolved against.
    pub save_dir: PathBuf,
    /// Print the numbered index board at the start of each move.
    pub show_reference_board: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("."),
            show_reference_board: true,
        }
    }
}

pub fn run_stdio_loop(config: ConsoleConfig, initial_state: GameState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(config, initial_state);

    console.run(&mut stdin.lock(), &mut stdout)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct ConsoleState {
    game_state: GameState,
    config: ConsoleConfig,
}

impl ConsoleState {
    pub fn new(config: ConsoleConfig, game_state: GameState) -> Self {
        Self { game_state, config }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{}", render_game_state(&self.game_state))?;

        loop {
            write!(out, "{MENU}")?;
            out.flush()?;

            let choice = match read_user_int(input)? {
                UserInput::EndOfInput => {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
                UserInput::Invalid => {
                    writeln!(out, "\nInvalid menu choice. Please enter an integer.")?;
                    continue;
                }
                UserInput::Value(choice) => choice,
            };
            writeln!(out)?;

            if self.handle_command(choice, input, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }

        out.flush()
    }

    fn handle_command<R: BufRead, W: Write>(
        &mut self,
        choice: i64,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        debug!("menu choice {choice}");

        match choice {
            1 => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            2 => return self.handle_move(input, out),
            3 => self.handle_save(input, out)?,
            4 => self.handle_load(input, out)?,
            5 => {
                write!(out, "{INSTRUCTIONS}")?;
            }
            6 => {
                self.game_state.reset();
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            7 => {
                writeln!(out, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
            _ => {
                writeln!(out, "Invalid option. Please enter a number from the menu (1-7).")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn handle_move<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<Flow> {
        let side = self.game_state.current_turn;
        writeln!(out, "[{side} turn]")?;
        writeln!(out, "{}", render_game_state(&self.game_state))?;
        if self.config.show_reference_board {
            writeln!(out, "{}", render_reference_board())?;
        }
        writeln!(out, "Tip: If stuck, enter -1 to cancel and return to the main menu.\n")?;

        let from = loop {
            match prompt_position(input, out, "Enter FROM position (0-63, \"#\" dark square): ")? {
                PositionChoice::EndOfInput => return Ok(Flow::Quit),
                PositionChoice::Cancel => {
                    writeln!(out, "Move cancelled. Returning to main menu.")?;
                    return Ok(Flow::Continue);
                }
                PositionChoice::Square(square) if owns_piece(&self.game_state, i32::from(square)) => {
                    break square;
                }
                PositionChoice::Square(_) => {
                    writeln!(out, "Invalid move. That square does not hold one of your pieces.")?;
                }
            }
        };

        loop {
            let to = match prompt_position(input, out, "Enter TO position (0-63, \"#\" dark square): ")? {
                PositionChoice::EndOfInput => return Ok(Flow::Quit),
                PositionChoice::Cancel => {
                    writeln!(out, "Move cancelled. Returning to main menu.")?;
                    return Ok(Flow::Continue);
                }
                PositionChoice::Square(square) => square,
            };

            match attempt_move(&mut self.game_state, i32::from(from), i32::from(to)) {
                Ok(record) => {
                    writeln!(out, "{} moved FROM {} TO {}.", record.mover, record.from, record.to)?;
                    if let Some(jumped) = record.captured {
                        writeln!(
                            out,
                            "{} captured {}! Jumping over position {jumped}.",
                            record.mover,
                            record.mover.opposite()
                        )?;
                    }
                    if record.promoted {
                        writeln!(out, "{} piece promoted to KING at position {}.", record.mover, record.to)?;
                    }
                    writeln!(out, "{}", render_game_state(&self.game_state))?;
                    break;
                }
                Err(rejection) => {
                    writeln!(out, "Invalid move ({rejection}). Please try again.")?;
                }
            }
        }

        match finish_turn(&mut self.game_state) {
            GameStatus::InProgress => Ok(Flow::Continue),
            GameStatus::Won { winner, reason } => {
                match reason {
                    WinReason::Elimination => writeln!(out, "{winner} wins!\n")?,
                    WinReason::OpponentBlocked => writeln!(
                        out,
                        "{} has no legal moves. {winner} wins!\n",
                        winner.opposite()
                    )?,
                }
                info!("game over: {winner} wins ({reason:?})");
                self.offer_new_game(input, out)
            }
        }
    }

    fn offer_new_game<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<Flow> {
        write!(out, "{PLAY_AGAIN_PROMPT}")?;
        out.flush()?;

        let again = matches!(read_user_int(input)?, UserInput::Value(1));
        writeln!(out)?;

        if again {
            self.game_state.reset();
            writeln!(out, "{}", render_game_state(&self.game_state))?;
            Ok(Flow::Continue)
        } else {
            writeln!(out, "Goodbye!")?;
            Ok(Flow::Quit)
        }
    }

    fn handle_save<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write!(out, "Enter a save file name (example: game1): ")?;
        out.flush()?;

        let Some(name) = read_trimmed_line(input)? else {
            writeln!(out, "Read Error!")?;
            return Ok(());
        };
        if name.is_empty() {
            writeln!(out, "Empty file name not allowed!")?;
            return Ok(());
        }

        match save_game(&self.config.save_dir.join(&name), &self.game_state) {
            Ok(()) => writeln!(out, "Game saved to \"{name}\".")?,
            Err(err) => writeln!(out, "Save failed: {err}")?,
        }
        Ok(())
    }

    fn handle_load<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write!(out, "Enter save file name to load (enter exactly as typed!): ")?;
        out.flush()?;

        let Some(name) = read_trimmed_line(input)? else {
            writeln!(out, "Read Error!")?;
            return Ok(());
        };

        match load_game(&self.config.save_dir.join(&name)) {
            Ok(loaded) => {
                self.game_state = loaded;
                writeln!(out, "Game loaded from \"{name}\".")?;
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            Err(err) => {
                writeln!(out, "Load failed: {err}. Enter valid file name exactly.")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(config: ConsoleConfig, start: GameState, script: &str) -> (GameState, String) {
        let mut console = ConsoleState::new(config, start);
        let mut out = Vec::new();
        console
            .run(&mut Cursor::new(script.to_owned()), &mut out)
            .expect("in-memory console should not fail");
        (*console.game_state(), String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn make_a_move_then_exit() {
        let (state, text) = run_script(ConsoleConfig::default(), GameState::new_game(), "2\n17\n24\n7\n");

        assert!(text.contains("[Player 1 (Red) turn]"));
        assert!(text.contains("Player 1 (Red) moved FROM 17 TO 24."));
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(state.current_turn, Player::Player2);
        assert_ne!(state.player1_men & (1u64 << 24), 0);
    }

    #[test]
    fn rejected_destination_reprompts_and_cancel_keeps_state() {
        let (state, text) = run_script(ConsoleConfig::default(), GameState::new_game(), "2\n8\n1\n-1\n7\n");

        assert!(text.contains("Invalid move (position 1 is already occupied)"));
        assert!(text.contains("Move cancelled. Returning to main menu."));
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn foreign_piece_is_refused_at_the_from_prompt() {
        let (_, text) = run_script(ConsoleConfig::default(), GameState::new_game(), "2\n40\n-1\n7\n");
        assert!(text.contains("does not hold one of your pieces"));
    }

    #[test]
    fn bad_menu_input_is_reported() {
        let (_, text) = run_script(ConsoleConfig::default(), GameState::new_game(), "abc\n42\n5\n7\n");

        assert!(text.contains("Invalid menu choice. Please enter an integer."));
        assert!(text.contains("Invalid option. Please enter a number from the menu (1-7)."));
        assert!(text.contains("How to Play"));
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let (state, text) = run_script(ConsoleConfig::default(), GameState::new_game(), "2\n17\n");
        assert!(text.ends_with("Enter TO position (0-63, \"#\" dark square): "));
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn winning_capture_offers_a_new_game() {
        let start = GameState::from_bitboards(1u64 << 33, 0, 1u64 << 42, 0, Player::Player1);
        let (state, text) = run_script(ConsoleConfig::default(), start, "2\n33\n51\n1\n7\n");

        assert!(text.contains("captured Player 2 (Black)! Jumping over position 42."));
        assert!(text.contains("Player 1 (Red) wins!"));
        assert!(text.contains("Would you like to play again"));
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn blocked_opponent_ends_the_game() {
        let start = GameState::from_bitboards((1u64 << 40) | (1u64 << 42), 0, 1u64 << 56, 0, Player::Player1);
        let (state, text) = run_script(ConsoleConfig::default(), start, "2\n40\n49\n2\n");

        assert!(text.contains("Player 2 (Black) has no legal moves. Player 1 (Red) wins!"));
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(state.current_turn, Player::Player1);
    }

    #[test]
    fn save_new_game_and_load_restores_the_position() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ConsoleConfig {
            save_dir: dir.path().to_path_buf(),
            show_reference_board: false,
        };

        let (state, text) = run_script(config, GameState::new_game(), "2\n17\n24\n3\ngame1\n6\n4\ngame1\n4\nmissing\n7\n");

        assert!(text.contains("Game saved to \"game1\"."));
        assert!(text.contains("Game loaded from \"game1\"."));
        assert!(text.contains("Load failed"));
        assert!(!text.contains("Row 0:"));
        assert_eq!(state.current_turn, Player::Player2);
        assert_ne!(state.player1_men & (1u64 << 24), 0);
    }

    #[test]
    fn empty_save_name_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ConsoleConfig {
            save_dir: dir.path().to_path_buf(),
            show_reference_board: true,
        };
        let (_, text) = run_script(config, GameState::new_game(), "3\n\n7\n");
        assert!(text.contains("Empty file name not allowed!"));
    }
}
