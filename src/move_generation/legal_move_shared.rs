//! Helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_set::MoveSet;
use crate::moves::move_offsets::{step_targets, Ray};

/// Walk each direction, adding empty squares and the first enemy piece.
pub fn add_sliding_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    directions: &[i32],
    out: &mut MoveSet,
) {
    for &delta in directions {
        for to in Ray::new(from, delta) {
            match game_state.piece_at(to) {
                None => out.insert(to),
                Some(piece) => {
                    if piece.color != side {
                        out.insert(to);
                    }
                    break;
                }
            }
        }
    }
}

/// Add each fixed-offset target not occupied by a friendly piece.
pub fn add_step_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    offsets: &'static [i32],
    out: &mut MoveSet,
) {
    for to in step_targets(from, offsets) {
        if !game_state.owns_piece(side, to) {
            out.insert(to);
        }
    }
}
