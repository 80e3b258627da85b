//! Square and move conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`, `e2e4`) and the
//! 0x88 square indices used everywhere else (`file = idx & 7`,
//! `rank = idx >> 4`).

use crate::game_state::chess_rules::{file_of, rank_of, square_at, OFF_BOARD_MASK};
use crate::game_state::chess_types::{Move, Square};

/// Convert algebraic notation (for example: "e4") to a 0x88 square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(square_at(rank - b'1', file - b'a'))
}

/// Convert an on-board 0x88 square index to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square >= 128 || (square as i32 & OFF_BOARD_MASK) != 0 {
        return Err(format!("Square index off the board: {square}"));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));

    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a coordinate move such as "e2e4".
///
/// A trailing promotion letter ("e7e8q") is accepted and ignored, since pawns
/// never promote here.
pub fn parse_coordinate_move(text: &str) -> Result<Move, String> {
    let text = text.trim();
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(format!("Invalid coordinate move: {text}"));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok(Move::new(from, to))
}

pub fn move_to_coordinate(mv: Move) -> Result<String, String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(mv.from)?,
        square_to_algebraic(mv.to)?
    ))
}
