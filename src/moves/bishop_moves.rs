use crate::moves::move_offsets::{MOVE_DOWN_LEFT, MOVE_DOWN_RIGHT, MOVE_UP_LEFT, MOVE_UP_RIGHT};

pub const BISHOP_DIRECTIONS: [i32; 4] = [MOVE_UP_RIGHT, MOVE_DOWN_RIGHT, MOVE_DOWN_LEFT, MOVE_UP_LEFT];
