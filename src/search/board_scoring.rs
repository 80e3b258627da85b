//! Pluggable board evaluation interfaces and the reference evaluator.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Utilities are always expressed from Dark's (Black's) point of view;
//! [`score_for`] orients them to a given side.

use crate::game_state::chess_rules::{file_of, rank_of};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal;
use crate::move_generation::move_set::MoveSet;

pub trait BoardScorer {
    /// Utility from Dark's perspective. Legal-move probing may apply and undo
    /// moves internally, but the board is left exactly as it was handed in.
    fn score(&self, game_state: &mut GameState) -> i32;
}

/// Weights and bonuses used by [`ReferenceScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub material_weight: i32,
    pub positional_weight: i32,
    pub center_minor_bonus: i32,
    pub center_pawn_bonus: i32,
    pub minor_mobility_multiplier: i32,
    pub pawn_mobility_multiplier: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material_weight: 3,
            positional_weight: 2,
            center_minor_bonus: 500,
            center_pawn_bonus: 200,
            minor_mobility_multiplier: 2,
            pawn_mobility_multiplier: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceScorer {
    pub weights: EvalWeights,
}

impl ReferenceScorer {
    pub const fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    /// `dark_total - light_total` of piece values.
    pub fn material_score(&self, game_state: &GameState) -> i32 {
        game_state
            .board
            .iter()
            .flatten()
            .map(|piece| match piece.color {
                Color::Dark => Self::piece_value(piece.kind),
                Color::Light => -Self::piece_value(piece.kind),
            })
            .sum()
    }

    /// `dark_bonus - light_bonus` from pawn and minor-piece mobility, attacks
    /// on enemy pieces and central placement.
    pub fn positional_score(&self, game_state: &mut GameState) -> i32 {
        let mut totals = [0i32; 2];
        let mut destinations = MoveSet::new();

        for square in 0..game_state.board.len() as Square {
            let Some(piece) = game_state.piece_at(square) else {
                continue;
            };
            let multiplier = match piece.kind {
                PieceKind::Pawn => self.weights.pawn_mobility_multiplier,
                PieceKind::Knight | PieceKind::Bishop => self.weights.minor_mobility_multiplier,
                _ => continue,
            };

            let activity = piece_activity(game_state, piece.color, square, &mut destinations);
            totals[piece.color.index()] += multiplier * activity;

            if in_center_band(square) {
                log::trace!(
                    "eval: {} {:?} in board center",
                    piece.color.name(),
                    piece.kind
                );
                totals[piece.color.index()] += if piece.kind.is_minor() {
                    self.weights.center_minor_bonus
                } else {
                    self.weights.center_pawn_bonus
                };
            }
        }

        totals[Color::Dark.index()] - totals[Color::Light.index()]
    }
}

impl BoardScorer for ReferenceScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        self.weights.material_weight * self.material_score(game_state)
            + self.weights.positional_weight * self.positional_score(game_state)
    }
}

/// Orient a Dark-perspective utility to `side`.
#[inline]
pub fn score_for(side: Color, utility: i32) -> i32 {
    match side {
        Color::Dark => utility,
        Color::Light => -utility,
    }
}

/// One point per legal destination, plus the kind code of every enemy piece
/// standing on one of them.
fn piece_activity(
    game_state: &mut GameState,
    side: Color,
    square: Square,
    destinations: &mut MoveSet,
) -> i32 {
    generate_legal(game_state, side, square as i32, destinations);
    destinations
        .iter()
        .map(|target| match game_state.piece_at(target) {
            Some(victim) if victim.color != side => {
                log::trace!(
                    "eval: {} piece on {square} attacks {:?} on {target}",
                    side.name(),
                    victim.kind
                );
                1 + victim.kind.code() as i32
            }
            _ => 1,
        })
        .sum()
}

/// Ranks 3 to 6, files b to g.
#[inline]
fn in_center_band(square: Square) -> bool {
    (2..=5).contains(&rank_of(square)) && (1..=6).contains(&file_of(square))
}
