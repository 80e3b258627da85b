use crate::game_state::chess_rules::square_at;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Inverse of `parse_placement`: the FEN piece-placement field for the board.
pub fn generate_placement(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.piece_at(square_at(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

/// Placement plus side-to-move field, e.g. for log lines.
pub fn generate_position(game_state: &GameState, side: Color) -> String {
    let side_field = match side {
        Color::Light => "w",
        Color::Dark => "b",
    };
    format!("{} {}", generate_placement(game_state), side_field)
}
