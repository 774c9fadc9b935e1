//! Engine-vs-engine game runner for local testing.
//!
//! Plays two `Engine` implementations against each other without any terminal
//! I/O. There is no checkmate in this rule set, so a game ends only when the
//! side to move has no move at all or the ply cap is reached.

use std::time::Instant;

use tracing::info;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// `side` had no move; the game cannot continue.
    Stalled { side: Color },
    MaxPlies,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub max_plies: u16,
    pub games: u32,
    pub base_seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            games: 10,
            base_seed: 1234,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub plies: u16,
    pub captures: usize,
    pub promotions: usize,
    pub final_fen: String,
}

/// Plays one game from `start`, `white` moving first when white is on move.
pub fn play_engine_game(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    start: GameState,
    max_plies: u16,
) -> ChessResult<GameReport> {
    let mut game = start;
    white.new_game();
    black.new_game();

    let outcome = loop {
        if game.ply() >= max_plies {
            break GameOutcome::MaxPlies;
        }

        let side = game.side_to_move();
        let engine: &mut dyn Engine = match side {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        if game.play_ai_move(engine)?.is_none() {
            break GameOutcome::Stalled { side };
        }
    };

    Ok(GameReport {
        outcome,
        plies: game.ply(),
        captures: game.history().iter().filter(|r| r.captured.is_some()).count(),
        promotions: game
            .history()
            .iter()
            .filter(|r| r.promoted_to.is_some())
            .count(),
        final_fen: game.get_fen(),
    })
}

/// Plays `config.games` games from the standard start with freshly built engines.
pub fn play_engine_series<F1, F2>(
    mut make_white: F1,
    mut make_black: F2,
    config: &HarnessConfig,
) -> ChessResult<Vec<GameReport>>
where
    F1: FnMut(u64) -> Box<dyn Engine>,
    F2: FnMut(u64) -> Box<dyn Engine>,
{
    let mut reports = Vec::with_capacity(config.games as usize);

    for game_idx in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game_idx) * 2);
        let mut white = make_white(seed);
        let mut black = make_black(seed ^ 0xA5A5_5A5A_0123_4567);

        let started = Instant::now();
        let report = play_engine_game(
            white.as_mut(),
            black.as_mut(),
            GameState::new_game(),
            config.max_plies,
        )?;
        info!(
            game = game_idx + 1,
            white = white.name(),
            black = black.name(),
            outcome = ?report.outcome,
            plies = report.plies,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "self-play game finished"
        );
        reports.push(report);
    }

    Ok(reports)
}
