//! King step table.
//!
//! The same eight offsets serve move generation and the attack probe, since a
//! king attacks exactly the squares it can step to.

use crate::game_state::chess_types::Square;
use crate::moves::move_offsets::step_targets;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub const KING_OFFSETS: [i32; 8] = QUEEN_DIRECTIONS;

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    step_targets(square, &KING_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::king_targets;

    #[test]
    fn king_attacks_from_e4_has_eight_targets() {
        let e4 = 52u8;
        assert_eq!(king_targets(e4).count(), 8);
    }

    #[test]
    fn king_on_edge_has_five_targets() {
        let e1 = 4u8;
        let mut targets: Vec<u8> = king_targets(e1).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![3, 5, 19, 20, 21]);
    }
}
