//! Owned game state and the move-by-move game flow.
//!
//! `GameState` holds the only copy of the board and the side to move. Both
//! change exclusively through `play_human_move` and `play_ai_move`, and each
//! successful move flips the turn exactly once.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_rules::initial_position;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_legal;
use crate::move_generation::promotion::{PromotionChooser, PromotionPolicy};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// What happened on one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Color,
    pub mv: ChessMove,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    side_to_move: Color,
    ply: u16,
    history: Vec<MoveRecord>,
    started_at: DateTime<Local>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting layout, white to move.
    pub fn new_game() -> Self {
        let game = Self::from_position(initial_position(), Color::White);
        info!(started_at = %game.started_at.format("%Y-%m-%d %H:%M:%S"), "new game");
        game
    }

    pub fn from_position(position: Position, side_to_move: Color) -> Self {
        Self {
            position,
            side_to_move,
            ply: 0,
            history: Vec::new(),
            started_at: Local::now(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Back to the starting layout with white to move.
    pub fn reset(&mut self) {
        *self = Self::new_game();
        info!("game reset");
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    #[inline]
    pub fn switch_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Plays a move chosen by a person.
    ///
    /// The piece on `from` must belong to the side to move and the move must
    /// pass `is_legal`. A promotion asks `chooser`, falling back to a queen.
    /// On error nothing changes.
    pub fn play_human_move(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut dyn PromotionChooser,
    ) -> ChessResult<MoveRecord> {
        let mv = ChessMove::new(from, to);
        self.check_move(mv)?;
        self.commit(mv, PromotionPolicy::Ask(chooser))
    }

    /// Lets `engine` move for the side to move, promoting straight to a queen.
    ///
    /// Returns `Ok(None)` when the engine has no move; the turn then stays
    /// where it is. A move the engine should not have offered is rejected
    /// with the same errors as a human move.
    pub fn play_ai_move(&mut self, engine: &mut dyn Engine) -> ChessResult<Option<MoveRecord>> {
        let Some(mv) = engine.choose_move(self).best_move else {
            return Ok(None);
        };
        self.check_move(mv)?;
        self.commit(mv, PromotionPolicy::AutoQueen).map(Some)
    }

    /// Squares on the board, a piece of the side to move on `from`, and a
    /// move that passes `is_legal`.
    fn check_move(&self, mv: ChessMove) -> ChessResult<()> {
        for sq in [mv.from, mv.to] {
            if !is_on_board(sq) {
                return Err(ChessErrors::InvalidSquare(sq));
            }
        }

        let piece = self
            .position
            .piece_at(mv.from)
            .ok_or(ChessErrors::EmptySourceSquare(mv.from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::NotYourTurn {
                square: mv.from,
                side: self.side_to_move,
            });
        }
        if !is_legal(&self.position, mv.from, mv.to) {
            return Err(ChessErrors::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        Ok(())
    }

    fn commit(&mut self, mv: ChessMove, promotion: PromotionPolicy<'_>) -> ChessResult<MoveRecord> {
        let side = self.side_to_move;
        let captured = self.position.piece_at(mv.to);
        let moved = self
            .position
            .piece_at(mv.from)
            .ok_or(ChessErrors::EmptySourceSquare(mv.from))?;

        let promoted_to = apply_move(&mut self.position, mv, promotion)?;

        let record = MoveRecord {
            side,
            mv,
            moved,
            captured,
            promoted_to,
        };
        self.history.push(record);
        self.ply = self.ply.saturating_add(1);
        self.switch_turn();

        debug!(
            %side,
            from = mv.from,
            to = mv.to,
            capture = captured.is_some(),
            ply = self.ply,
            "move applied"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessErrors;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::{Engine, EngineOutput};
    use crate::game_state::chess_types::*;
    use crate::move_generation::promotion::{AlwaysQueen, FixedChoice, PromotionChoice};

    #[test]
    fn turn_alternates_once_per_move() {
        let mut game = GameState::new_game();
        assert_eq!(game.side_to_move(), Color::White);

        game.play_human_move(52, 36, &mut AlwaysQueen)
            .expect("e2e4 should be legal");
        assert_eq!(game.side_to_move(), Color::Black);

        game.play_human_move(12, 28, &mut AlwaysQueen)
            .expect("e7e5 should be legal");
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.ply(), 2);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn moving_the_wrong_color_is_refused() {
        let mut game = GameState::new_game();
        let before = *game.position();

        assert_eq!(
            game.play_human_move(12, 28, &mut AlwaysQueen),
            Err(ChessErrors::NotYourTurn {
                square: 12,
                side: Color::White
            })
        );
        assert_eq!(*game.position(), before);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn illegal_and_empty_moves_leave_the_turn_alone() {
        let mut game = GameState::new_game();

        assert_eq!(
            game.play_human_move(52, 28, &mut AlwaysQueen),
            Err(ChessErrors::IllegalMove { from: 52, to: 28 })
        );
        assert_eq!(
            game.play_human_move(35, 27, &mut AlwaysQueen),
            Err(ChessErrors::EmptySourceSquare(35))
        );
        assert_eq!(
            game.play_human_move(64, 27, &mut AlwaysQueen),
            Err(ChessErrors::InvalidSquare(64))
        );
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn human_promotion_uses_the_injected_choice() {
        let mut position = Position::empty();
        position.set_piece(10, Some(Piece::white(PieceKind::Pawn)));
        let mut game = GameState::from_position(position, Color::White);

        let record = game
            .play_human_move(10, 2, &mut FixedChoice(PromotionChoice::Rook))
            .expect("promotion push should be legal");

        assert_eq!(record.promoted_to, Some(PieceKind::Rook));
        assert_eq!(game.position().piece_at(2), Some(Piece::white(PieceKind::Rook)));
    }

    #[test]
    fn ai_promotes_to_queen_without_a_chooser() {
        let mut position = Position::empty();
        position.set_piece(53, Some(Piece::black(PieceKind::Pawn)));
        let mut game = GameState::from_position(position, Color::Black);

        let record = game
            .play_ai_move(&mut RandomEngine::with_seed(3))
            .expect("AI move should apply")
            .expect("the pawn has one push");

        assert_eq!(record.mv, ChessMove::new(53, 61));
        assert_eq!(game.position().piece_at(61), Some(Piece::black(PieceKind::Queen)));
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn ai_without_moves_keeps_the_turn() {
        let mut position = Position::empty();
        position.set_piece(60, Some(Piece::white(PieceKind::King)));
        let mut game = GameState::from_position(position, Color::Black);

        let played = game
            .play_ai_move(&mut RandomEngine::with_seed(3))
            .expect("no-move is not an error");

        assert_eq!(played, None);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(*game.position(), position);
    }

    /// Always answers with the same move, whatever the position.
    struct ScriptedEngine(ChessMove);

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> EngineOutput {
            EngineOutput {
                best_move: Some(self.0),
                candidates_considered: 1,
            }
        }
    }

    #[test]
    fn engine_moving_the_other_color_is_refused() {
        let mut game = GameState::new_game();
        game.switch_turn();
        let before = *game.position();

        let result = game.play_ai_move(&mut ScriptedEngine(ChessMove::new(52, 20)));

        assert_eq!(
            result,
            Err(ChessErrors::NotYourTurn {
                square: 52,
                side: Color::Black
            })
        );
        assert_eq!(*game.position(), before);
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.history().is_empty());
    }

    #[test]
    fn engine_breaking_movement_rules_is_refused() {
        let mut game = GameState::new_game();
        game.switch_turn();
        let before = *game.position();

        let result = game.play_ai_move(&mut ScriptedEngine(ChessMove::new(12, 36)));

        assert_eq!(result, Err(ChessErrors::IllegalMove { from: 12, to: 36 }));
        assert_eq!(*game.position(), before);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn captures_are_recorded() {
        let mut position = Position::empty();
        position.set_piece(36, Some(Piece::white(PieceKind::Knight)));
        position.set_piece(19, Some(Piece::black(PieceKind::Queen)));
        let mut game = GameState::from_position(position, Color::White);

        let record = game
            .play_human_move(36, 19, &mut AlwaysQueen)
            .expect("knight capture should be legal");
        assert_eq!(record.captured, Some(Piece::black(PieceKind::Queen)));
        assert_eq!(record.moved, Piece::white(PieceKind::Knight));
    }

    #[test]
    fn reset_restores_the_start() {
        let mut game = GameState::new_game();
        game.play_human_move(57, 42, &mut AlwaysQueen)
            .expect("knight development should be legal");
        game.reset();

        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.ply(), 0);
        assert_eq!(*game.position(), *GameState::new_game().position());
    }
}
