//! Pseudo-legal move generation through a per-kind capability table.
//!
//! Each piece kind maps to one movement rule. Rules only look at geometry and
//! occupancy; king safety is layered on top by the legal generator.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::{square_on_board, GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_set::MoveSet;

/// Movement rule for one piece kind: adds destinations for the piece of
/// `side` standing on `from`.
pub type PieceMoveRule = fn(&GameState, Color, Square, &mut MoveSet);

/// Indexed by [`PieceKind::index`].
pub const MOVE_RULES: [PieceMoveRule; 6] = [
    generate_pawn_moves,
    generate_rook_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_queen_moves,
    generate_king_moves,
];

#[inline]
pub fn move_rule(kind: PieceKind) -> PieceMoveRule {
    MOVE_RULES[kind.index()]
}

/// Fill `out` with every destination the piece on `from` reaches by its
/// movement rules, ignoring whether the mover's king ends up attacked.
///
/// Leaves `out` empty if `from` is off the array or does not hold a piece of
/// `side`.
pub fn generate_pseudo_legal(game_state: &GameState, side: Color, from: i32, out: &mut MoveSet) {
    out.clear();

    if !square_on_board(from) {
        return;
    }
    let from = from as Square;
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };
    if piece.color != side {
        return;
    }

    move_rule(piece.kind)(game_state, side, from, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::square_at;

    fn pseudo(game: &GameState, side: Color, from: Square) -> Vec<Square> {
        let mut set = MoveSet::new();
        generate_pseudo_legal(game, side, from as i32, &mut set);
        set.iter().collect()
    }

    #[test]
    fn capability_table_follows_kind_order() {
        for kind in ALL_PIECE_KINDS {
            let mut game = GameState::new_empty();
            let d4 = square_at(3, 3);
            game.place_piece(d4, Piece::new(Color::Light, kind));
            let mut via_table = MoveSet::new();
            move_rule(kind)(&game, Color::Light, d4, &mut via_table);
            let expected = match kind {
                PieceKind::Pawn => 1,
                PieceKind::Rook => 14,
                PieceKind::Knight => 8,
                PieceKind::Bishop => 13,
                PieceKind::Queen => 27,
                PieceKind::King => 8,
            };
            assert_eq!(via_table.len(), expected, "{kind:?}");
        }
    }

    #[test]
    fn empty_or_foreign_square_yields_nothing() {
        let game = GameState::new_game();
        assert!(pseudo(&game, Color::Light, 34).is_empty());
        assert!(pseudo(&game, Color::Dark, 16).is_empty());

        let mut set = MoveSet::new();
        set.insert(5);
        generate_pseudo_legal(&game, Color::Light, -3, &mut set);
        assert!(set.is_empty());
        generate_pseudo_legal(&game, Color::Light, 500, &mut set);
        assert!(set.is_empty());
    }

    #[test]
    fn pawn_double_step_needs_clear_path() {
        let mut game = GameState::new_game();
        assert_eq!(pseudo(&game, Color::Light, 20), vec![36, 52]);

        game.place_piece(36, Piece::new(Color::Dark, PieceKind::Knight));
        assert!(pseudo(&game, Color::Light, 20).is_empty());

        game.clear_square(36);
        game.place_piece(52, Piece::new(Color::Dark, PieceKind::Knight));
        assert_eq!(pseudo(&game, Color::Light, 20), vec![36]);
    }

    #[test]
    fn pawn_captures_only_enemy_pieces_diagonally() {
        let mut game = GameState::new_empty();
        let e4 = square_at(3, 4);
        game.place_piece(e4, Piece::new(Color::Dark, PieceKind::Pawn));
        game.place_piece(square_at(2, 3), Piece::new(Color::Light, PieceKind::Pawn));
        game.place_piece(square_at(2, 5), Piece::new(Color::Dark, PieceKind::Pawn));

        let mut moves = pseudo(&game, Color::Dark, e4);
        moves.sort_unstable();
        assert_eq!(moves, vec![square_at(2, 3), square_at(2, 4)]);
    }

    #[test]
    fn pawn_on_last_rank_has_no_moves() {
        let mut game = GameState::new_empty();
        let a8 = square_at(7, 0);
        game.place_piece(a8, Piece::new(Color::Light, PieceKind::Pawn));
        assert!(pseudo(&game, Color::Light, a8).is_empty());
    }

    #[test]
    fn start_position_knight_skips_friendly_squares() {
        let game = GameState::new_game();
        assert_eq!(pseudo(&game, Color::Light, 1), vec![32, 34]);
        assert_eq!(pseudo(&game, Color::Dark, 118), vec![85, 87]);
        assert!(pseudo(&game, Color::Light, 0).is_empty());
        assert!(pseudo(&game, Color::Light, 4).is_empty());
    }

    #[test]
    fn sliding_rays_are_contiguous_and_stop_at_first_blocker() {
        let mut game = GameState::new_empty();
        let d4 = square_at(3, 3);
        game.place_piece(d4, Piece::new(Color::Light, PieceKind::Queen));
        game.place_piece(square_at(6, 3), Piece::new(Color::Dark, PieceKind::Rook));
        game.place_piece(square_at(3, 1), Piece::new(Color::Light, PieceKind::Pawn));
        game.place_piece(square_at(5, 5), Piece::new(Color::Dark, PieceKind::Pawn));

        let mut set = MoveSet::new();
        generate_pseudo_legal(&game, Color::Light, d4 as i32, &mut set);

        // Up the d-file: d5, d6, enemy on d7 included, d8 blocked.
        assert!(set.contains(square_at(4, 3)));
        assert!(set.contains(square_at(5, 3)));
        assert!(set.contains(square_at(6, 3)));
        assert!(!set.contains(square_at(7, 3)));

        // Left along the rank: c4 only, friendly b4 excluded, a4 blocked.
        assert!(set.contains(square_at(3, 2)));
        assert!(!set.contains(square_at(3, 1)));
        assert!(!set.contains(square_at(3, 0)));

        // Up-right diagonal: e5 then enemy f6, g7 blocked.
        assert!(set.contains(square_at(4, 4)));
        assert!(set.contains(square_at(5, 5)));
        assert!(!set.contains(square_at(6, 6)));

        for &delta in crate::moves::queen_moves::QUEEN_DIRECTIONS.iter() {
            let mut seen_gap = false;
            for square in crate::moves::move_offsets::Ray::new(d4, delta) {
                if set.contains(square) {
                    assert!(!seen_gap, "ray {delta} skipped a square before {square}");
                } else {
                    seen_gap = true;
                }
                if game.is_occupied(square) {
                    seen_gap = true;
                }
            }
        }
    }
}
