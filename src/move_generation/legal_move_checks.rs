//! Pseudo-legality of a single move.
//!
//! Pieces follow their movement pattern and may not capture their own side.
//! Sliding pieces ignore anything standing between `from` and `to`, and no
//! check of king safety is made. Whose turn it is is not consulted here; see
//! `GameState::play_human_move` for that.

use crate::game_state::chess_types::*;

/// Returns whether `from -> to` obeys the movement rules of the piece on
/// `from`. Off-board squares and empty sources are simply not legal.
pub fn is_legal(position: &Position, from: Square, to: Square) -> bool {
    if !is_on_board(from) || !is_on_board(to) {
        return false;
    }

    let Some(piece) = position.piece_at(from) else {
        return false;
    };
    let target = position.piece_at(to);

    if matches!(target, Some(t) if t.color == piece.color) {
        return false;
    }

    let dx = col_of(to) as i8 - col_of(from) as i8;
    let dy = row_of(to) as i8 - row_of(from) as i8;

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(position, piece.color, from, target, dx, dy),
        PieceKind::Rook => rook_pattern(dx, dy),
        PieceKind::Bishop => bishop_pattern(dx, dy),
        PieceKind::Queen => rook_pattern(dx, dy) || bishop_pattern(dx, dy),
        PieceKind::Knight => knight_pattern(dx, dy),
        PieceKind::King => king_pattern(dx, dy),
    }
}

fn pawn_move_is_legal(
    position: &Position,
    color: Color,
    from: Square,
    target: Option<Piece>,
    dx: i8,
    dy: i8,
) -> bool {
    let dir = color.pawn_direction();

    if dx == 0 && target.is_none() {
        if dy == dir {
            return true;
        }
        if dy == 2 * dir && row_of(from) == color.pawn_start_row() {
            let between = (from as i8 + dir * 8) as Square;
            return position.is_empty_at(between);
        }
    }

    dx.abs() == 1 && dy == dir && target.is_some()
}

#[inline]
fn rook_pattern(dx: i8, dy: i8) -> bool {
    dx == 0 || dy == 0
}

#[inline]
fn bishop_pattern(dx: i8, dy: i8) -> bool {
    dx.abs() == dy.abs()
}

#[inline]
fn knight_pattern(dx: i8, dy: i8) -> bool {
    matches!((dx.abs(), dy.abs()), (2, 1) | (1, 2))
}

#[inline]
fn king_pattern(dx: i8, dy: i8) -> bool {
    dx.abs() <= 1 && dy.abs() <= 1
}
