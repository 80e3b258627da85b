use crate::game_state::chess_types::*;

/// Single undo record for `apply_move` / `undo_move`.
///
/// Records must be handed back in strict LIFO order; the board is not
/// checked for a mismatched pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub captured_piece: Option<Piece>,
}
