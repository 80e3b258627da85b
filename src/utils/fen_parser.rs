//! FEN placement parser.
//!
//! Builds a `GameState` from the piece-placement field of a Forsyth-Edwards
//! Notation string. An optional side-to-move field may follow; any further
//! fields (castling, en passant, clocks) are not modelled and are rejected.

use crate::game_state::chess_rules::square_at;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Parse the placement field only (for example `"4R2k/6pp/8/8/8/8/8/6K1"`).
pub fn parse_placement(placement: &str) -> Result<GameState, String> {
    let mut game_state = GameState::new_empty();
    parse_board(placement.trim(), &mut game_state)?;
    Ok(game_state)
}

/// Parse `"<placement> [w|b]"`; the side defaults to Light when omitted.
pub fn parse_position(text: &str) -> Result<(GameState, Color), String> {
    let mut parts = text.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::Light,
    };

    if parts.next().is_some() {
        return Err("FEN has unsupported trailing fields".to_owned());
    }

    Ok((parse_placement(board_part)?, side))
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let piece = Piece::from_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            if piece.kind == PieceKind::King && game_state.king_square(piece.color).is_some() {
                return Err(format!("More than one {} king in board layout", piece.color.name()));
            }

            game_state.place_piece(square_at(board_rank, file), piece);
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_placement_matches_new_game() {
        let game_state =
            parse_placement(STARTING_PLACEMENT).expect("starting placement should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state, GameState::new_game());
    }

    #[test]
    fn parse_position_reads_optional_side() {
        let (game_state, side) =
            parse_position("k7/8/1Q6/8/8/8/8/7K b").expect("position should parse");
        assert_eq!(side, Color::Dark);
        assert_eq!(game_state.king_square(Color::Dark), Some(112));
        assert_eq!(game_state.king_square(Color::Light), Some(7));
        assert_eq!(
            game_state.piece_at(81),
            Some(Piece::new(Color::Light, PieceKind::Queen))
        );

        let (_, side) = parse_position(STARTING_PLACEMENT).expect("placement should parse");
        assert_eq!(side, Color::Light);
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(parse_placement("8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("x7/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("kk6/8/8/8/8/8/8/8").is_err());
        assert!(parse_position("8/8/8/8/8/8/8/8 x").is_err());
        assert!(parse_position("8/8/8/8/8/8/8/8 w KQkq - 0 1").is_err());
    }
}
