//! Terminal-oriented board renderer.
//!
//! Creates a human-readable ASCII board view for the console modes, tests,
//! and diagnostics. White pieces are uppercase, black lowercase.

use crate::game_state::chess_rules::square_at;
use crate::game_state::game_state::GameState;

/// Render the board to a string, rank 8 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_at(square_at(rank, file)) {
                Some(piece) => out.push(piece.to_char()),
                None => out.push('.'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
