//! Engine abstraction used by the game loop and the self-play harness.
//!
//! Lets different move-picking strategies sit behind a single trait object
//! without the caller knowing how they decide.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has nothing to play.
    pub best_move: Option<ChessMove>,
    pub candidates_considered: usize,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for `game_state.side_to_move()`. Must not mutate the game.
    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput;
}
