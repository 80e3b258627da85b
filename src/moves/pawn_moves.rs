use crate::game_state::chess_rules::{rank_of, DARK_PAWN_RANK, LIGHT_PAWN_RANK};
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_offsets::{
    MOVE_DOWN, MOVE_DOWN_LEFT, MOVE_DOWN_RIGHT, MOVE_UP, MOVE_UP_LEFT, MOVE_UP_RIGHT,
};

/// Single-step push direction.
#[inline]
pub const fn pawn_push_offset(color: Color) -> i32 {
    match color {
        Color::Light => MOVE_UP,
        Color::Dark => MOVE_DOWN,
    }
}

/// Diagonal capture directions.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [i32; 2] {
    match color {
        Color::Light => [MOVE_UP_LEFT, MOVE_UP_RIGHT],
        Color::Dark => [MOVE_DOWN_LEFT, MOVE_DOWN_RIGHT],
    }
}

/// True when a pawn of `color` on `square` has not left its starting rank.
#[inline]
pub const fn on_pawn_home_rank(color: Color, square: Square) -> bool {
    match color {
        Color::Light => rank_of(square) == LIGHT_PAWN_RANK,
        Color::Dark => rank_of(square) == DARK_PAWN_RANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::shift_square;

    #[test]
    fn light_pawn_captures_from_e2() {
        let e2 = 20u8;
        let targets: Vec<_> = pawn_capture_offsets(Color::Light)
            .iter()
            .filter_map(|&d| shift_square(e2, d))
            .collect();
        assert_eq!(targets, vec![35, 37]);
    }

    #[test]
    fn dark_pawn_captures_from_a7_stay_on_board() {
        let a7 = 96u8;
        let targets: Vec<_> = pawn_capture_offsets(Color::Dark)
            .iter()
            .filter_map(|&d| shift_square(a7, d))
            .collect();
        assert_eq!(targets, vec![81]);
    }

    #[test]
    fn home_ranks_differ_by_color() {
        assert!(on_pawn_home_rank(Color::Light, 16));
        assert!(!on_pawn_home_rank(Color::Light, 96));
        assert!(on_pawn_home_rank(Color::Dark, 103));
        assert!(!on_pawn_home_rank(Color::Dark, 23));
    }
}
