//! Core board state representation.
//!
//! `GameState` is the single mutable structure every subsystem works on. It
//! stores the 0x88 piece array, the cached king squares and the game-over
//! flag. Make/unmake workflows mutate it in place; nothing keeps a copy.

use crate::game_state::chess_rules::{
    square_at, BACK_RANK, BOARD_SIZE, DARK_HOME_RANK, DARK_PAWN_RANK, LIGHT_HOME_RANK,
    LIGHT_PAWN_RANK, OFF_BOARD_MASK,
};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- 0x88 piece array ---
    pub board: [Option<Piece>; BOARD_SIZE],

    // --- King location cache, indexed by `Color::index` ---
    pub king_squares: [Option<Square>; 2],

    // --- Terminal flag, derived by validated move application ---
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; BOARD_SIZE],
            king_squares: [None; 2],
            game_over: false,
        }
    }
}

impl GameState {
    /// Board with no pieces on it.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        let mut game_state = Self::default();
        game_state.reset();
        game_state
    }

    /// Restore the standard starting position and clear all derived state.
    pub fn reset(&mut self) {
        self.board = [None; BOARD_SIZE];
        self.king_squares = [None; 2];
        self.game_over = false;

        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            self.place_piece(
                square_at(LIGHT_HOME_RANK, file),
                Piece::new(Color::Light, *kind),
            );
            self.place_piece(
                square_at(LIGHT_PAWN_RANK, file),
                Piece::new(Color::Light, PieceKind::Pawn),
            );
            self.place_piece(
                square_at(DARK_PAWN_RANK, file),
                Piece::new(Color::Dark, PieceKind::Pawn),
            );
            self.place_piece(
                square_at(DARK_HOME_RANK, file),
                Piece::new(Color::Dark, *kind),
            );
        }
    }

    #[inline]
    pub fn from_placement(placement: &str) -> Result<Self, String> {
        crate::utils::fen_parser::parse_placement(placement)
    }

    /// Put `piece` on `square`, keeping the king cache in sync.
    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        if let Some(previous) = self.board[square as usize] {
            if previous.kind == PieceKind::King
                && self.king_squares[previous.color.index()] == Some(square)
            {
                self.king_squares[previous.color.index()] = None;
            }
        }
        self.board[square as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = Some(square);
        }
    }

    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        let previous = self.board[square as usize].take();
        if let Some(piece) = previous {
            if piece.kind == PieceKind::King
                && self.king_squares[piece.color.index()] == Some(square)
            {
                self.king_squares[piece.color.index()] = None;
            }
        }
        previous
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.board[square as usize].is_some()
    }

    #[inline]
    pub fn owns_piece(&self, side: Color, square: Square) -> bool {
        matches!(self.board[square as usize], Some(piece) if piece.color == side)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    /// Squares holding `color`'s pieces, in ascending board-scan order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(move |(square, cell)| match cell {
                Some(piece) if piece.color == color => Some((square as Square, *piece)),
                _ => None,
            })
    }
}

/// Bounds check on a flat board index.
#[inline]
pub const fn square_on_board(index: i32) -> bool {
    index >= 0 && index < BOARD_SIZE as i32
}

/// The 0x88 test: false for the right-hand phantom half of each rank.
#[inline]
pub const fn valid_file(index: i32) -> bool {
    (index & OFF_BOARD_MASK) == 0
}

/// Offset `square` by `delta`, returning the target only if it is a real square.
#[inline]
pub const fn shift_square(square: Square, delta: i32) -> Option<Square> {
    let target = square as i32 + delta;
    if square_on_board(target) && valid_file(target) {
        Some(target as Square)
    } else {
        None
    }
}
