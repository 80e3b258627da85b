use crate::game_state::chess_types::Square;
use crate::moves::move_offsets::step_targets;

pub const KNIGHT_OFFSETS: [i32; 8] = [33, 18, -14, -31, -33, -18, 14, 31];

#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    step_targets(square, &KNIGHT_OFFSETS)
}
