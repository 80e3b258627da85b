//! Canonical chess-rule constants.
//!
//! Board geometry of the 0x88 layout, the standard starting arrangement, and
//! the rank/file helpers shared by generation and evaluation.

use crate::game_state::chess_types::{PieceKind, Square};

/// Number of cells in the 0x88 array (an 8x8 board inside a 16x8 grid).
pub const BOARD_SIZE: usize = 128;

/// Off-board mask: any index with one of these bits set is off the board.
pub const OFF_BOARD_MASK: i32 = 0x88;

/// Back-rank arrangement from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const LIGHT_HOME_RANK: u8 = 0;
pub const LIGHT_PAWN_RANK: u8 = 1;
pub const DARK_PAWN_RANK: u8 = 6;
pub const DARK_HOME_RANK: u8 = 7;

/// Standard starting position in FEN piece-placement notation.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[inline]
pub const fn square_at(rank: u8, file: u8) -> Square {
    (rank << 4) | file
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square >> 4
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square & 7
}
