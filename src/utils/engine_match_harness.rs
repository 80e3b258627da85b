//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without protocol
//! I/O, with a seeded random opening prefix. Games end in checkmate,
//! stalemate, or when the ply cap is reached (no repetition or fifty-move
//! tracking exists).

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_for_side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 8,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub final_side_to_move: Color,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub player1_name: String,
    pub player2_name: String,
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play a single seeded engine-vs-engine match from the start position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();
    log::debug!(
        "match: {} (white) vs {} (black) seed={seed}",
        engine_white.name(),
        engine_black.name()
    );

    let mut state = GameState::new_game();
    let mut side = Color::Light;
    let opening_moves = apply_seeded_random_opening(&mut state, &mut side, seed, config)?;

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: GameState::new_empty(),
        final_side_to_move: side,
        opening_moves,
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(outcome) = terminal_outcome(&mut state, side) {
            result.outcome = outcome;
            break;
        }

        let started = Instant::now();
        let out = match side {
            Color::Light => engine_white.choose_move(&mut state, side, &config.go_params)?,
            Color::Dark => engine_black.choose_move(&mut state, side, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match side {
            Color::Light => {
                result.white_move_count += 1;
                result.white_total_time_ns += elapsed_ns;
            }
            Color::Dark => {
                result.black_move_count += 1;
                result.black_total_time_ns += elapsed_ns;
            }
        }

        let chosen = out
            .best_move
            .ok_or_else(|| format!("{} engine returned no move", side.name()))?;
        make_move(&mut state, side, chosen.from as i32, chosen.to as i32)
            .map_err(|e| format!("engine returned {e}"))?;
        result.played_moves.push(chosen.to_string());
        side = side.opposite();
    }

    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let Some(outcome) = terminal_outcome(&mut state, side) {
            result.outcome = outcome;
        }
    }

    result.final_state = state;
    result.final_side_to_move = side;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        if i == 0 {
            stats.player1_name = player1.name().to_owned();
            stats.player2_name = player2.name().to_owned();
        }

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_ns;

        let mapped = match result.outcome {
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate => {
                let color = if result.outcome == MatchOutcome::WhiteWinCheckmate {
                    Color::Light
                } else {
                    Color::Dark
                };
                let player = if (color == Color::Light) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        log::debug!(
            "series: game {}/{} seed={} player1_white={} result={:?}",
            i + 1,
            config.games,
            seed,
            player1_is_white,
            mapped
        );
        stats.outcomes.push(mapped);
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn terminal_outcome(state: &mut GameState, side: Color) -> Option<MatchOutcome> {
    if !legal_moves_for_side(state, side).is_empty() {
        return None;
    }
    Some(if is_king_in_check(state, side) {
        match side {
            Color::Light => MatchOutcome::BlackWinCheckmate,
            Color::Dark => MatchOutcome::WhiteWinCheckmate,
        }
    } else {
        MatchOutcome::DrawStalemate
    })
}

fn apply_seeded_random_opening(
    state: &mut GameState,
    side: &mut Color,
    seed: u64,
    config: &MatchConfig,
) -> Result<Vec<String>, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    let low = config.opening_min_plies.min(config.opening_max_plies);
    let high = config.opening_max_plies.max(config.opening_min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = legal_moves_for_side(state, *side);
        if legal_moves.is_empty() {
            break;
        }

        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        make_move(state, *side, chosen.from as i32, chosen.to as i32)
            .map_err(|e| format!("opening move rejected: {e}"))?;
        opening_moves.push(chosen.to_string());
        *side = side.opposite();
    }

    Ok(opening_moves)
}
