use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::add_step_moves;
use crate::move_generation::move_set::MoveSet;
use crate::moves::king_moves::KING_OFFSETS;

pub fn generate_king_moves(game_state: &GameState, side: Color, from: Square, out: &mut MoveSet) {
    add_step_moves(game_state, side, from, &KING_OFFSETS, out);
}
