//! Full legal move generation pipeline.
//!
//! Runs the pseudo-legal rule for a piece, then speculatively plays each
//! candidate and drops the ones that leave the mover's own king attacked.

use crate::game_state::chess_types::*;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::generate_pseudo_legal;
use crate::move_generation::move_set::MoveSet;

/// Fill `out` with the legal destinations of the piece of `side` on `from`.
///
/// The board is mutated while filtering but is restored before returning.
pub fn generate_legal(game_state: &mut GameState, side: Color, from: i32, out: &mut MoveSet) {
    generate_pseudo_legal(game_state, side, from, out);
    if out.is_empty() {
        return;
    }

    let from = from as Square;
    let candidates: Vec<Square> = out.iter().collect();
    for to in candidates {
        let undo = apply_move(game_state, Move::new(from, to));
        let exposes_king = is_king_in_check(game_state, side);
        undo_move(game_state, undo);

        if exposes_king {
            out.remove(to);
        }
    }
}

/// Every legal move of `side`, in board-scan order then by destination.
pub fn legal_moves_for_side(game_state: &mut GameState, side: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let mut targets = MoveSet::new();

    for from in 0..BOARD_SIZE as i32 {
        if !game_state.owns_piece(side, from as Square) {
            continue;
        }
        generate_legal(game_state, side, from, &mut targets);
        moves.extend(targets.iter().map(|to| Move::new(from as Square, to)));
    }

    moves
}

/// Early-exit check for at least one legal move.
pub fn has_legal_moves(game_state: &mut GameState, side: Color) -> bool {
    let mut targets = MoveSet::new();
    for from in 0..BOARD_SIZE as i32 {
        if !game_state.owns_piece(side, from as Square) {
            continue;
        }
        generate_legal(game_state, side, from, &mut targets);
        if !targets.is_empty() {
            return true;
        }
    }
    false
}
