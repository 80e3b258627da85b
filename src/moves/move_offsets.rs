//! 0x88 step offsets and ray walking.
//!
//! Moving one rank up adds 16, one file right adds 1. A step that leaves the
//! board lands on an index failing the `0x88` mask or outside `0..128`.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::shift_square;

pub const MOVE_UP: i32 = 16;
pub const MOVE_RIGHT: i32 = 1;
pub const MOVE_DOWN: i32 = -16;
pub const MOVE_LEFT: i32 = -1;
pub const MOVE_UP_RIGHT: i32 = 17;
pub const MOVE_DOWN_RIGHT: i32 = -15;
pub const MOVE_DOWN_LEFT: i32 = -17;
pub const MOVE_UP_LEFT: i32 = 15;

/// Successive squares from an origin along one direction, origin excluded.
///
/// Stops at the board edge; occupancy is the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    current: Square,
    delta: i32,
}

impl Ray {
    #[inline]
    pub const fn new(origin: Square, delta: i32) -> Self {
        Self {
            current: origin,
            delta,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let next = shift_square(self.current, self.delta)?;
        self.current = next;
        Some(next)
    }
}

/// Targets of a fixed-offset (leaper) piece that land on the board.
#[inline]
pub fn step_targets(origin: Square, offsets: &'static [i32]) -> impl Iterator<Item = Square> {
    offsets
        .iter()
        .filter_map(move |&delta| shift_square(origin, delta))
}
