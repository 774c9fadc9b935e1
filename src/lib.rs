//! Crate root module declarations for the Pawnshop Chess rule engine.
//!
//! Exposes the game state model, pseudo-legal move checks and generation,
//! the engine trait with its random-move player, and the text utilities used
//! by the terminal binaries and tests.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod promotion;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_harness;
    pub mod logging;
    pub mod render_game_state;
}
