//! Promotion choices and the chooser hook supplied by human-facing callers.

use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionChoice {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    /// Reads a prompt answer. Only the exact letters `Q`, `R`, `B`, `N` count.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "Q" => Some(PromotionChoice::Queen),
            "R" => Some(PromotionChoice::Rook),
            "B" => Some(PromotionChoice::Bishop),
            "N" => Some(PromotionChoice::Knight),
            _ => None,
        }
    }

    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }
}

/// Asked once per human promotion. Returning `None` means "use the default".
pub trait PromotionChooser {
    fn choose_promotion(&mut self, default_choice: PromotionChoice) -> Option<PromotionChoice>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(PromotionChoice) -> Option<PromotionChoice>,
{
    fn choose_promotion(&mut self, default_choice: PromotionChoice) -> Option<PromotionChoice> {
        self(default_choice)
    }
}

pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose_promotion(&mut self, _default_choice: PromotionChoice) -> Option<PromotionChoice> {
        Some(PromotionChoice::Queen)
    }
}

/// Answers every prompt with the same piece.
pub struct FixedChoice(pub PromotionChoice);

impl PromotionChooser for FixedChoice {
    fn choose_promotion(&mut self, _default_choice: PromotionChoice) -> Option<PromotionChoice> {
        Some(self.0)
    }
}

/// How `apply_move` settles a pawn reaching the far row.
pub enum PromotionPolicy<'a> {
    /// Automated side: queen, no questions asked.
    AutoQueen,
    /// Human side: consult the chooser, queen when it declines.
    Ask(&'a mut dyn PromotionChooser),
}

impl PromotionPolicy<'_> {
    pub(crate) fn resolve(&mut self) -> PromotionChoice {
        match self {
            PromotionPolicy::AutoQueen => PromotionChoice::Queen,
            PromotionPolicy::Ask(chooser) => chooser
                .choose_promotion(PromotionChoice::default())
                .unwrap_or_default(),
        }
    }
}
