//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Moves are visited in board-scan order (ascending origin square, then
//! ascending destination) with no ordering heuristics. The board is mutated in
//! place through apply/undo; the call stack is the only undo history.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{is_checkmate, is_king_in_check};
use crate::move_generation::legal_move_generator::legal_moves_for_side;
use crate::search::board_scoring::{score_for, BoardScorer};

pub const NEG_INF: i32 = -30000;
pub const POS_INF: i32 = 30000;
pub const DRAW_SCORE: i32 = 0;

/// Plies searched by `best_move`, counting the root move.
pub const SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Score of the position for `side`, searched `depth` plies deep.
///
/// A move that checkmates the opponent returns `POS_INF` at once. A side with
/// no legal moves scores `NEG_INF` when checkmated and `DRAW_SCORE` when
/// stalemated.
pub fn negamax_alpha_beta<S: BoardScorer + ?Sized>(
    game_state: &mut GameState,
    side: Color,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    scorer: &S,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        let utility = scorer.score(game_state);
        return score_for(side, utility);
    }

    let moves = legal_moves_for_side(game_state, side);
    if moves.is_empty() {
        return if is_king_in_check(game_state, side) {
            NEG_INF
        } else {
            DRAW_SCORE
        };
    }

    let opponent = side.opposite();
    let mut best = NEG_INF;

    for mv in moves {
        let undo = apply_move(game_state, mv);

        if is_checkmate(game_state, opponent) {
            undo_move(game_state, undo);
            return POS_INF;
        }

        let score = -negamax_alpha_beta(game_state, opponent, depth - 1, -beta, -alpha, scorer, stats);
        undo_move(game_state, undo);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            return alpha;
        }
    }

    best
}

/// Root driver: pick the move for `side` with the strictly greatest score.
///
/// Ties keep the earliest move in scan order. A move that mates immediately is
/// chosen without searching the rest. `config.depth` counts the root ply, so a
/// depth of 0 behaves like 1.
pub fn best_move<S: BoardScorer + ?Sized>(
    game_state: &mut GameState,
    side: Color,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut stats = SearchStats::default();
    let opponent = side.opposite();
    let child_depth = config.depth.saturating_sub(1);

    let mut best: Option<(Move, i32)> = None;

    for mv in legal_moves_for_side(game_state, side) {
        let undo = apply_move(game_state, mv);

        if is_checkmate(game_state, opponent) {
            undo_move(game_state, undo);
            log::debug!("search: {} mates with {mv}", side.name());
            return SearchResult {
                best_move: Some(mv),
                score: POS_INF,
                nodes: stats.nodes + 1,
            };
        }

        let score = -negamax_alpha_beta(
            game_state,
            opponent,
            child_depth,
            NEG_INF,
            POS_INF,
            scorer,
            &mut stats,
        );
        undo_move(game_state, undo);

        log::trace!("search: root {mv} scored {score}");

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    let result = match best {
        Some((mv, score)) => SearchResult {
            best_move: Some(mv),
            score,
            nodes: stats.nodes,
        },
        None => SearchResult {
            best_move: None,
            score: if is_king_in_check(game_state, side) {
                NEG_INF
            } else {
                DRAW_SCORE
            },
            nodes: stats.nodes,
        },
    };

    log::debug!(
        "search: side={} depth={} nodes={} score={} best={}",
        side.name(),
        config.depth,
        result.nodes,
        result.score,
        result
            .best_move
            .map_or_else(|| "none".to_owned(), |mv| mv.to_string())
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::ReferenceScorer;
    use crate::utils::algebraic::parse_coordinate_move;

    /// Same tree walk as `negamax_alpha_beta`, without any pruning.
    fn minimax(
        game_state: &mut GameState,
        side: Color,
        depth: u8,
        scorer: &ReferenceScorer,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if depth == 0 {
            return score_for(side, scorer.score(game_state));
        }
        let moves = legal_moves_for_side(game_state, side);
        if moves.is_empty() {
            return if is_king_in_check(game_state, side) {
                NEG_INF
            } else {
                DRAW_SCORE
            };
        }
        let mut best = NEG_INF;
        for mv in moves {
            let undo = apply_move(game_state, mv);
            if is_checkmate(game_state, side.opposite()) {
                undo_move(game_state, undo);
                return POS_INF;
            }
            let score = -minimax(game_state, side.opposite(), depth - 1, scorer, nodes);
            undo_move(game_state, undo);
            best = best.max(score);
        }
        best
    }

    fn mv(text: &str) -> Move {
        parse_coordinate_move(text).expect("test move should parse")
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let mut game = GameState::from_placement("6k1/5ppp/8/8/8/8/8/R5K1")
            .expect("placement should parse");
        for depth in 1..=3 {
            let result = best_move(&mut game, Color::Light, &ReferenceScorer::default(), SearchConfig { depth });
            assert_eq!(result.best_move, Some(mv("a1a8")));
            assert_eq!(result.score, POS_INF);
        }
        assert_eq!(
            game,
            GameState::from_placement("6k1/5ppp/8/8/8/8/8/R5K1").expect("placement should parse")
        );
    }

    #[test]
    fn takes_free_rook_at_depth_one() {
        let mut game = GameState::from_placement("4k3/8/8/8/8/8/r7/Q3K3")
            .expect("placement should parse");
        let result = best_move(
            &mut game,
            Color::Light,
            &ReferenceScorer::default(),
            SearchConfig { depth: 1 },
        );
        assert_eq!(result.best_move, Some(mv("a1a2")));
        assert_eq!(result.score, 3 * 900);
    }

    #[test]
    fn stalemate_scores_as_draw_and_mate_as_loss() {
        let scorer = ReferenceScorer::default();
        let mut stats = SearchStats::default();

        let mut stalemate = GameState::from_placement("k7/8/1Q6/8/8/8/8/7K")
            .expect("placement should parse");
        assert_eq!(
            negamax_alpha_beta(&mut stalemate, Color::Dark, 2, NEG_INF, POS_INF, &scorer, &mut stats),
            DRAW_SCORE
        );
        let result = best_move(&mut stalemate, Color::Dark, &scorer, SearchConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, DRAW_SCORE);

        let mut mated = GameState::from_placement("4R2k/6pp/8/8/8/8/8/6K1")
            .expect("placement should parse");
        assert_eq!(
            negamax_alpha_beta(&mut mated, Color::Dark, 2, NEG_INF, POS_INF, &scorer, &mut stats),
            NEG_INF
        );
        assert_eq!(
            best_move(&mut mated, Color::Dark, &scorer, SearchConfig::default()).best_move,
            None
        );
    }

    #[test]
    fn depth_zero_returns_oriented_evaluation() {
        let scorer = ReferenceScorer::default();
        let mut game = GameState::from_placement("4k3/8/8/8/8/8/8/3QK3")
            .expect("placement should parse");
        let utility = scorer.score(&mut game);
        let mut stats = SearchStats::default();
        assert_eq!(
            negamax_alpha_beta(&mut game, Color::Light, 0, NEG_INF, POS_INF, &scorer, &mut stats),
            -utility
        );
        assert_eq!(
            negamax_alpha_beta(&mut game, Color::Dark, 0, NEG_INF, POS_INF, &scorer, &mut stats),
            utility
        );
        assert_eq!(stats.nodes, 2);
    }

    #[test]
    fn alpha_beta_matches_unpruned_minimax() {
        let scorer = ReferenceScorer::default();
        let cases = [
            (GameState::new_game(), Color::Light, 2u8),
            (
                GameState::from_placement("r3k3/1p6/8/3n4/4P3/2N5/8/4K2R")
                    .expect("placement should parse"),
                Color::Light,
                3,
            ),
            (
                GameState::from_placement("4k3/8/3b4/8/2P5/8/1q6/4K3")
                    .expect("placement should parse"),
                Color::Dark,
                3,
            ),
        ];

        for (mut game, side, depth) in cases {
            let before = game.clone();
            let mut minimax_nodes = 0u64;
            let expected = minimax(&mut game, side, depth, &scorer, &mut minimax_nodes);
            let mut stats = SearchStats::default();
            let pruned =
                negamax_alpha_beta(&mut game, side, depth, NEG_INF, POS_INF, &scorer, &mut stats);
            assert_eq!(pruned, expected);
            assert!(stats.nodes <= minimax_nodes);
            assert_eq!(game, before);
        }
    }

    #[test]
    fn losing_side_still_returns_a_move() {
        // Every Dark reply allows mate; the root must still pick something.
        let mut game = GameState::from_placement("7k/8/6K1/8/8/8/8/R7")
            .expect("placement should parse");
        let result = best_move(
            &mut game,
            Color::Dark,
            &ReferenceScorer::default(),
            SearchConfig { depth: 2 },
        );
        assert!(result.best_move.is_some());
        assert_eq!(result.score, NEG_INF);
    }

    #[test]
    fn default_config_uses_three_plies() {
        assert_eq!(SearchConfig::default().depth, SEARCH_DEPTH);
        assert_eq!(SEARCH_DEPTH, 3);
    }
}
