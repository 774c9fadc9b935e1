//! Exhaustive pseudo-legal move enumeration and random selection.
//!
//! Every `(from, to)` pair on the board is tested with `is_legal`. At 4096
//! predicate calls per side this is cheap enough that no attack tables are
//! kept.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_legal;

/// All moves available to `side`, in ascending `(from, to)` order.
pub fn generate_pseudo_legal_moves(position: &Position, side: Color) -> Vec<ChessMove> {
    let mut out = Vec::new();
    generate_pseudo_legal_moves_in_place(position, side, &mut out);
    out
}

/// Same as `generate_pseudo_legal_moves`, reusing the caller's buffer.
pub fn generate_pseudo_legal_moves_in_place(
    position: &Position,
    side: Color,
    out: &mut Vec<ChessMove>,
) {
    out.clear();

    for (from, _) in position.pieces_of(side) {
        for to in 0..BOARD_SQUARES as Square {
            if is_legal(position, from, to) {
                out.push(ChessMove::new(from, to));
            }
        }
    }
}

/// Picks one of `side`'s moves uniformly at random, or `None` if it has none.
pub fn select_ai_move<R: Rng + ?Sized>(
    position: &Position,
    side: Color,
    rng: &mut R,
) -> Option<ChessMove> {
    generate_pseudo_legal_moves(position, side)
        .as_slice()
        .choose(rng)
        .copied()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate_pseudo_legal_moves, select_ai_move};
    use crate::game_state::chess_rules::initial_position;
    use crate::game_state::chess_types::*;

    #[test]
    fn opening_move_counts() {
        let position = initial_position();
        // Pawns 16, knights 4. Sliders jump their own pawns: rooks 6 each,
        // bishops 5 each, queen 11. The king is boxed in.
        let white = generate_pseudo_legal_moves(&position, Color::White);
        let black = generate_pseudo_legal_moves(&position, Color::Black);
        assert_eq!(white.len(), 53);
        assert_eq!(black.len(), 53);
        assert!(white.iter().all(|m| is_white(position.piece_at(m.from))));
        assert!(black.iter().all(|m| is_black(position.piece_at(m.from))));
        assert!(white.contains(&ChessMove::new(62, 45)));
        assert!(black.contains(&ChessMove::new(1, 16)));
    }

    #[test]
    fn moves_are_sorted_by_source_then_target() {
        let moves = generate_pseudo_legal_moves(&initial_position(), Color::White);
        let mut sorted = moves.clone();
        sorted.sort_by_key(|m| (m.from, m.to));
        assert_eq!(moves, sorted);
    }

    #[test]
    fn no_pieces_means_no_move_and_no_mutation() {
        let mut position = Position::empty();
        position.set_piece(60, Some(Piece::white(PieceKind::King)));
        let before = position;

        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(select_ai_move(&position, Color::Black, &mut rng), None);
        assert_eq!(position, before);
    }

    #[test]
    fn selection_is_drawn_from_the_candidate_list() {
        let position = initial_position();
        let candidates = generate_pseudo_legal_moves(&position, Color::Black);
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..64 {
            let mv = select_ai_move(&position, Color::Black, &mut rng)
                .expect("black has moves at the start");
            assert!(candidates.contains(&mv));
        }
    }

    #[test]
    fn equal_seeds_pick_equal_moves() {
        let position = initial_position();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..16 {
            assert_eq!(
                select_ai_move(&position, Color::White, &mut a),
                select_ai_move(&position, Color::White, &mut b)
            );
        }
    }
}
