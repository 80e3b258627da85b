use crate::moves::move_offsets::{
    MOVE_DOWN, MOVE_DOWN_LEFT, MOVE_DOWN_RIGHT, MOVE_LEFT, MOVE_RIGHT, MOVE_UP, MOVE_UP_LEFT,
    MOVE_UP_RIGHT,
};

/// Rook and bishop directions interleaved, clockwise from straight up.
pub const QUEEN_DIRECTIONS: [i32; 8] = [
    MOVE_UP,
    MOVE_UP_RIGHT,
    MOVE_RIGHT,
    MOVE_DOWN_RIGHT,
    MOVE_DOWN,
    MOVE_DOWN_LEFT,
    MOVE_LEFT,
    MOVE_UP_LEFT,
];

#[cfg(test)]
mod tests {
    use super::QUEEN_DIRECTIONS;
    use crate::moves::move_offsets::Ray;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let d4 = 51u8;
        let total: usize = QUEEN_DIRECTIONS
            .iter()
            .map(|&delta| Ray::new(d4, delta).count())
            .sum();
        assert_eq!(total, 27);
    }
}
