//! Rook move generation.
//!
//! Rays run up, right, down and left until the first blocker.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::add_sliding_moves;
use crate::move_generation::move_set::MoveSet;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, side: Color, from: Square, out: &mut MoveSet) {
    add_sliding_moves(game_state, side, from, &ROOK_DIRECTIONS, out);
}
