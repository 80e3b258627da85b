use crate::game_state::{chess_types::*, game_state::shift_square, game_state::GameState};
use crate::move_generation::move_set::MoveSet;
use crate::moves::pawn_moves::{on_pawn_home_rank, pawn_capture_offsets, pawn_push_offset};

pub fn generate_pawn_moves(game_state: &GameState, side: Color, from: Square, out: &mut MoveSet) {
    let push = pawn_push_offset(side);

    if let Some(one_step) = shift_square(from, push) {
        if !game_state.is_occupied(one_step) {
            out.insert(one_step);

            if on_pawn_home_rank(side, from) {
                if let Some(two_step) = shift_square(one_step, push) {
                    if !game_state.is_occupied(two_step) {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for delta in pawn_capture_offsets(side) {
        if let Some(to) = shift_square(from, delta) {
            if game_state.owns_piece(side.opposite(), to) {
                out.insert(to);
            }
        }
    }
}
