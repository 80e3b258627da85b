//! Move application, reversal, and the validated entry point.
//!
//! `apply_move` / `undo_move` are the raw make/unmake pair used by search and
//! legality filtering. `make_move` is the checked path for moves coming from
//! outside the engine.

use std::error::Error;
use std::fmt;

use log::debug;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::{square_on_board, valid_file, GameState};
use crate::move_generation::legal_move_checks::is_checkmate;
use crate::move_generation::legal_move_generator::generate_legal;
use crate::move_generation::move_set::MoveSet;

/// Why a move submitted through [`make_move`] was refused. The board is left
/// untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Start square is off the board or does not hold the mover's piece.
    InvalidStartSquare(i32),
    /// Destination is outside the array or on the phantom 0x88 files.
    InvalidEndSquare(i32),
    /// Squares are valid but the destination is not a legal move.
    IllegalMove(Move),
    /// The move was submitted for the side that is not on move.
    OutOfTurn(Color),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::InvalidStartSquare(square) => {
                write!(f, "invalid start square {square}")
            }
            MoveRejection::InvalidEndSquare(square) => write!(f, "invalid end square {square}"),
            MoveRejection::IllegalMove(mv) => write!(f, "illegal move {mv}"),
            MoveRejection::OutOfTurn(color) => write!(f, "{} is not on move", color.name()),
        }
    }
}

impl Error for MoveRejection {}

/// Relocate the piece on `mv.from` to `mv.to` without any validation.
///
/// The returned record must be passed to [`undo_move`] before any earlier
/// record is undone.
pub fn apply_move(game_state: &mut GameState, mv: Move) -> UndoState {
    let moved = game_state.board[mv.from as usize].take();
    let captured_piece = std::mem::replace(&mut game_state.board[mv.to as usize], moved);

    if let Some(piece) = moved {
        if piece.kind == PieceKind::King {
            game_state.king_squares[piece.color.index()] = Some(mv.to);
        }
    }
    if let Some(piece) = captured_piece {
        if piece.kind == PieceKind::King {
            game_state.king_squares[piece.color.index()] = None;
        }
    }

    UndoState { mv, captured_piece }
}

/// Exact inverse of [`apply_move`].
pub fn undo_move(game_state: &mut GameState, undo: UndoState) {
    let UndoState { mv, captured_piece } = undo;
    let moved = std::mem::replace(&mut game_state.board[mv.to as usize], captured_piece);
    game_state.board[mv.from as usize] = moved;

    if let Some(piece) = moved {
        if piece.kind == PieceKind::King {
            game_state.king_squares[piece.color.index()] = Some(mv.from);
        }
    }
    if let Some(piece) = captured_piece {
        if piece.kind == PieceKind::King {
            game_state.king_squares[piece.color.index()] = Some(mv.to);
        }
    }
}

/// Validate and play a move for `side`.
///
/// On success the move is on the board and `game_over` reflects whether the
/// opponent is now checkmated.
pub fn make_move(
    game_state: &mut GameState,
    side: Color,
    from: i32,
    to: i32,
) -> Result<Move, MoveRejection> {
    if !square_on_board(from) || !game_state.owns_piece(side, from as Square) {
        debug!("rejecting move: invalid start square {from}");
        return Err(MoveRejection::InvalidStartSquare(from));
    }
    if !square_on_board(to) || !valid_file(to) {
        debug!("rejecting move: invalid end square {to}");
        return Err(MoveRejection::InvalidEndSquare(to));
    }

    let mv = Move::new(from as Square, to as Square);
    let mut legal = MoveSet::new();
    generate_legal(game_state, side, from, &mut legal);
    if !legal.contains(mv.to) {
        debug!("rejecting move: {mv} is not legal for {}", side.name());
        return Err(MoveRejection::IllegalMove(mv));
    }

    apply_move(game_state, mv);
    game_state.game_over = is_checkmate(game_state, side.opposite());
    Ok(mv)
}
