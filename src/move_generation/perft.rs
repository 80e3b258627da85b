//! Legal move path counting.
//!
//! Walks the legal move tree with apply/undo on one board, counting leaf
//! nodes and a few move categories. Used as a move generator correctness
//! check and as a benchmark workload.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{is_checkmate, is_king_in_check};
use crate::move_generation::legal_move_generator::legal_moves_for_side;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Count leaf nodes only.
pub fn perft(game_state: &mut GameState, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves_for_side(game_state, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let undo = apply_move(game_state, mv);
        nodes += perft(game_state, side.opposite(), depth - 1);
        undo_move(game_state, undo);
    }
    nodes
}

/// Leaf nodes plus capture/check/checkmate tallies of the moves reaching them.
pub fn perft_detailed(game_state: &mut GameState, side: Color, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, side, depth, &mut counts);
    counts
}

fn perft_recurse(game_state: &mut GameState, side: Color, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves_for_side(game_state, side) {
        let undo = apply_move(game_state, mv);

        if depth == 1 {
            counts.nodes += 1;
            if undo.captured_piece.is_some() {
                counts.captures += 1;
            }
            if is_king_in_check(game_state, side.opposite()) {
                counts.checks += 1;
                if is_checkmate(game_state, side.opposite()) {
                    counts.checkmates += 1;
                }
            }
        } else {
            perft_recurse(game_state, side.opposite(), depth - 1, counts);
        }

        undo_move(game_state, undo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, Color::Light, 0), 1);
        assert_eq!(
            perft_detailed(&mut game, Color::Light, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_from_start_position_matches_reference_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, Color::Light, 1), 20);
        assert_eq!(perft(&mut game, Color::Light, 2), 400);
        assert_eq!(perft(&mut game, Color::Light, 3), 8902);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn perft_detailed_depth_three_tallies() {
        let mut game = GameState::new_game();
        let counts = perft_detailed(&mut game, Color::Light, 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn perft_from_black_start_is_symmetric() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, Color::Dark, 2), 400);
    }
}
