//! Canonical chess-rule constants.
//!
//! Holds the standard starting layout used to initialize and reset games.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

/// Standard starting layout in FEN piece-placement form, black side first.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The fixed starting layout: black on rows 0 and 1, white on rows 6 and 7.
pub fn initial_position() -> Position {
    let mut position = Position::empty();

    for (col, kind) in BACK_RANK.iter().enumerate() {
        let col = col as u8;
        position.set_piece(col, Some(Piece::new(Color::Black, *kind)));
        position.set_piece(8 + col, Some(Piece::black(PieceKind::Pawn)));
        position.set_piece(48 + col, Some(Piece::white(PieceKind::Pawn)));
        position.set_piece(56 + col, Some(Piece::new(Color::White, *kind)));
    }

    position
}
