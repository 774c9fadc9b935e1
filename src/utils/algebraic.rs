//! Square and move conversions for coordinate notation.
//!
//! Index 0 is `a8` and index 63 is `h1`, matching the top-down storage of
//! `Position`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::promotion::PromotionChoice;

/// Convert coordinate text (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let col = file - b'a';
    let row = 7 - (rank - b'1');
    Ok(square_at(row, col))
}

/// Convert a square index (`0..=63`) to coordinate text (for example: "e4").
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !is_on_board(square) {
        return Err(ChessErrors::InvalidSquare(square));
    }

    let file_char = char::from(b'a' + col_of(square));
    let rank_char = char::from(b'8' - row_of(square));

    Ok(format!("{file_char}{rank_char}"))
}

/// Parse "e2e4" or "e7e8q". The optional fifth letter picks the promotion piece.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(ChessMove, Option<PromotionChoice>)> {
    let text = text.trim();
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.get(4..5) {
        None => None,
        Some(letter) => Some(
            PromotionChoice::from_input(&letter.to_ascii_uppercase())
                .ok_or_else(|| ChessErrors::InvalidAlgebraic(text.to_owned()))?,
        ),
    };

    Ok((ChessMove::new(from, to), promotion))
}

pub fn move_to_long_algebraic(mv: ChessMove) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(mv.from)?,
        square_to_algebraic(mv.to)?
    ))
}
