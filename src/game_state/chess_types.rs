//! Core value types shared by the rule engine.
//!
//! Squares are plain indices into a row-major 8x8 array. Row 0 is the top of
//! the stored board (black's back rank) and row 7 is white's back rank.

pub use crate::game_state::game_state::{GameState, MoveRecord};

/// Board square index (`0..=63`).
pub type Square = u8;

pub const BOARD_SQUARES: usize = 64;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color promotes.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// A colored piece. Empty squares are `None` in an `Option<Piece>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(Color::White, kind)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(Color::Black, kind)
    }
}

/// `true` only for a white piece; the empty square is neither color.
#[inline]
pub fn is_white(piece: Option<Piece>) -> bool {
    matches!(piece, Some(Piece { color: Color::White, .. }))
}

/// `true` only for a black piece; the empty square is neither color.
#[inline]
pub fn is_black(piece: Option<Piece>) -> bool {
    matches!(piece, Some(Piece { color: Color::Black, .. }))
}

/// Source and destination of a move. Never stored past its use by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

#[inline]
pub const fn is_on_board(square: Square) -> bool {
    (square as usize) < BOARD_SQUARES
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_at(row: u8, col: u8) -> Square {
    row * 8 + col
}

/// Exactly 64 cells, indexed by `Square`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; BOARD_SQUARES],
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SQUARES],
        }
    }

    /// Piece on `square`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Overwrites one cell. Panics on an off-board square.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// Occupied squares holding pieces of `color`, in ascending index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(sq, cell)| match cell {
                Some(piece) if piece.color == color => Some((sq as Square, *piece)),
                _ => None,
            })
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|(_, p)| p.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_predicates_are_exclusive_and_false_for_empty() {
        assert!(!is_white(None));
        assert!(!is_black(None));

        for kind in PieceKind::ALL {
            let w = Some(Piece::white(kind));
            let b = Some(Piece::black(kind));
            assert!(is_white(w) && !is_black(w));
            assert!(is_black(b) && !is_white(b));
        }
    }

    #[test]
    fn square_coordinates_are_row_major() {
        assert_eq!(row_of(52), 6);
        assert_eq!(col_of(52), 4);
        assert_eq!(square_at(6, 4), 52);
        assert!(is_on_board(63));
        assert!(!is_on_board(64));
    }

    #[test]
    fn off_board_lookup_reads_as_empty() {
        let position = Position::empty();
        assert_eq!(position.piece_at(200), None);
    }
}
