//! Uniform random-move engine.
//!
//! Draws one move from the full pseudo-legal list of the side to move. It is
//! the automated opponent of the terminal game and the default player of the
//! self-play harness.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves_in_place;

pub struct RandomEngine {
    rng: StdRng,
    scratch: Vec<ChessMove>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic engine for tests and reproducible self-play.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            scratch: Vec::with_capacity(128),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Pawnshop Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        let side = game_state.side_to_move();
        generate_pseudo_legal_moves_in_place(game_state.position(), side, &mut self.scratch);

        let best_move = self.scratch.as_slice().choose(&mut self.rng).copied();
        match best_move {
            Some(mv) => debug!(
                %side,
                candidates = self.scratch.len(),
                from = mv.from,
                to = mv.to,
                "random engine picked move"
            ),
            None => warn!(%side, "random engine found no move"),
        }

        EngineOutput {
            best_move,
            candidates_considered: self.scratch.len(),
        }
    }
}
