//! Attack and check detection.
//!
//! Probes outward from the target square with each piece kind's geometry
//! reversed. Never consults the legal-move filter, which itself depends on
//! these probes.

use crate::game_state::{chess_types::*, game_state::shift_square, game_state::GameState};
use crate::move_generation::legal_move_generator::has_legal_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_offsets::Ray;
use crate::moves::pawn_moves::pawn_capture_offsets;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        matches!(
            game_state.piece_at(sq),
            Some(piece) if piece.color == attacker_color && kinds.contains(&piece.kind)
        )
    };

    // A pawn attacks `square` from where the defender's own pawn would capture.
    for delta in pawn_capture_offsets(attacker_color.opposite()) {
        if let Some(from) = shift_square(square, delta) {
            if holds(from, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    if knight_targets(square).any(|from| holds(from, &[PieceKind::Knight])) {
        return true;
    }

    if king_targets(square).any(|from| holds(from, &[PieceKind::King])) {
        return true;
    }

    let first_blocker = |delta: i32| Ray::new(square, delta).find(|&sq| game_state.is_occupied(sq));

    for delta in ROOK_DIRECTIONS {
        if let Some(blocker) = first_blocker(delta) {
            if holds(blocker, &[PieceKind::Rook, PieceKind::Queen]) {
                return true;
            }
        }
    }

    for delta in BISHOP_DIRECTIONS {
        if let Some(blocker) = first_blocker(delta) {
            if holds(blocker, &[PieceKind::Bishop, PieceKind::Queen]) {
                return true;
            }
        }
    }

    false
}

/// In check with no legal reply.
pub fn is_checkmate(game_state: &mut GameState, color: Color) -> bool {
    is_king_in_check(game_state, color) && !has_legal_moves(game_state, color)
}

/// Not in check, but no legal move either.
pub fn is_stalemate(game_state: &mut GameState, color: Color) -> bool {
    !is_king_in_check(game_state, color) && !has_legal_moves(game_state, color)
}
