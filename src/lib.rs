//! Crate root module declarations for the Bit Board Checkers project.
//!
//! Exposes the board model, move validation and turn flow, the console
//! front-end, and the persistence and rendering helpers so the binary, tests,
//! and benches can import stable module paths.

pub mod game_state {
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
    pub mod turn_flow;
}

pub mod console {
    pub mod console_input;
    pub mod console_text;
    pub mod console_top;
}

pub mod utils {
    pub mod random_playout;
    pub mod render_game_state;
    pub mod save_generator;
    pub mod save_parser;
}
