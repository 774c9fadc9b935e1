use tracing::info;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::promotion::PromotionPolicy;

/// Moves the piece on `mv.from` to `mv.to` in place and settles promotion.
///
/// Legality is not re-checked; callers confirm it first. Returns the kind a
/// pawn promoted to, if any. On error the position is untouched.
pub fn apply_move(
    position: &mut Position,
    mv: ChessMove,
    mut promotion: PromotionPolicy<'_>,
) -> ChessResult<Option<PieceKind>> {
    for sq in [mv.from, mv.to] {
        if !is_on_board(sq) {
            return Err(ChessErrors::InvalidSquare(sq));
        }
    }

    let moved = position
        .take_piece(mv.from)
        .ok_or(ChessErrors::EmptySourceSquare(mv.from))?;
    position.set_piece(mv.to, Some(moved));

    if !reaches_promotion_row(moved, mv.to) {
        return Ok(None);
    }

    let kind = promotion.resolve().piece_kind();
    position.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
    info!(color = %moved.color, square = mv.to, ?kind, "pawn promoted");

    Ok(Some(kind))
}

#[inline]
fn reaches_promotion_row(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && row_of(to) == piece.color.promotion_row()
}
