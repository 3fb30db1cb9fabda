//! GameState-to-save-file writer.

use std::fs;
use std::path::Path;

use log::info;

use crate::game_state::game_state::GameState;
use crate::utils::save_parser::SaveLoadError;

/// Five newline-terminated lines: four bitboards then the turn code.
pub fn generate_save_text(game_state: &GameState) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n",
        game_state.player1_men,
        game_state.player1_kings,
        game_state.player2_men,
        game_state.player2_kings,
        game_state.current_turn.turn_number()
    )
}

/// Writes the save file, replacing any existing file at `path`.
pub fn save_game(path: &Path, game_state: &GameState) -> Result<(), SaveLoadError> {
    fs::write(path, generate_save_text(game_state)).map_err(|err| SaveLoadError::io(path, err))?;
    info!("game saved to {}", path.display());
    Ok(())
}
