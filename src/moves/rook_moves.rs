use crate::moves::move_offsets::{MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP};

pub const ROOK_DIRECTIONS: [i32; 4] = [MOVE_UP, MOVE_RIGHT, MOVE_DOWN, MOVE_LEFT];
