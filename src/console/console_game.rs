//! Interactive console modes and diagnostic runs.
//!
//! All modes read from and write to caller-supplied streams so they can be
//! driven from stdin/stdout by the binary or from buffers in tests.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{score_for, ReferenceScorer};
use crate::search::negamax::{negamax_alpha_beta, SearchConfig, SearchStats, NEG_INF, POS_INF};
use crate::session::game_session::{GameSession, GameStatus};
use crate::utils::algebraic::parse_coordinate_move;
use crate::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use crate::utils::fen_parser::parse_position;
use crate::utils::render_game_state::render_game_state;

/// Positions shown by [`eval_test`]: the opening array, an early queen
/// sortie by Black, and a Black knight that a pawn can take.
pub const EVAL_SAMPLE_POSITIONS: [&str; 3] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    "rnb1kbnr/pppp1ppp/8/4p3/7q/5P2/PPPPP1PP/RNBQKBNR w",
    "r1bqkbnr/pppppppp/8/8/3n4/4P3/PPPP1PPP/RNBQKBNR b",
];

/// Two humans at one console. Stops on `quit`, end of input, or game end.
pub fn play_two_player(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut session = GameSession::default();

    while !session.is_game_over() {
        writeln!(out, "{}", render_game_state(session.game_state()))?;
        if report_stalemate(&mut session, out)? {
            return Ok(());
        }
        if !prompt_and_play(&mut session, input, out)? {
            return Ok(());
        }
    }

    writeln!(out, "{}", render_game_state(session.game_state()))?;
    writeln!(out, "Checkmate!")?;
    Ok(())
}

/// Human plays White at the console; `engine` plays Black.
pub fn play_vs_ai(
    input: &mut impl BufRead,
    out: &mut impl Write,
    engine: &mut dyn Engine,
) -> io::Result<()> {
    let mut session = GameSession::default();
    engine.new_game();

    while !session.is_game_over() {
        writeln!(out, "{}", render_game_state(session.game_state()))?;
        if report_stalemate(&mut session, out)? {
            return Ok(());
        }

        if session.side_to_move() == Color::Light {
            if !prompt_and_play(&mut session, input, out)? {
                return Ok(());
            }
            continue;
        }

        writeln!(out, "making AI's move")?;
        let mut scratch = session.game_state().clone();
        let chosen = engine
            .choose_move(&mut scratch, Color::Dark, &GoParams::default())
            .map_err(io::Error::other)?
            .best_move;
        let Some(mv) = chosen else {
            return Ok(());
        };
        session
            .play_move(mv)
            .map_err(|e| io::Error::other(format!("engine move rejected: {e}")))?;
        writeln!(out, "move {mv}")?;
    }

    writeln!(out, "{}", render_game_state(session.game_state()))?;
    writeln!(out, "Checkmate!")?;
    Ok(())
}

/// Time a full-width search of the opening position for White.
pub fn search_test(out: &mut impl Write, config: SearchConfig) -> io::Result<()> {
    writeln!(out, "Beginning search test to depth {}...", config.depth)?;

    let mut game_state = GameState::new_game();
    let mut stats = SearchStats::default();
    let started = Instant::now();
    let score = negamax_alpha_beta(
        &mut game_state,
        Color::Light,
        config.depth,
        NEG_INF,
        POS_INF,
        &ReferenceScorer::default(),
        &mut stats,
    );
    let elapsed = started.elapsed();

    writeln!(
        out,
        "depth {} score {} nodes {} time {:.3}s",
        config.depth,
        score,
        stats.nodes,
        elapsed.as_secs_f64()
    )?;
    writeln!(out, "End of search.")?;
    Ok(())
}

/// Print the evaluator's component scores for the sample positions.
pub fn eval_test(out: &mut impl Write) -> io::Result<()> {
    let scorer = ReferenceScorer::default();

    for position in EVAL_SAMPLE_POSITIONS {
        let (mut game_state, side) = parse_position(position).map_err(io::Error::other)?;
        let material = scorer.material_score(&game_state);
        let positional = scorer.positional_score(&mut game_state);
        let utility = scorer.weights.material_weight * material
            + scorer.weights.positional_weight * positional;

        writeln!(out, "{}", render_game_state(&game_state))?;
        writeln!(out, "material score: {material}")?;
        writeln!(out, "positional score: {positional}")?;
        writeln!(out, "utility: {utility}")?;
        writeln!(
            out,
            "score for {}: {}",
            side.name(),
            score_for(side, utility)
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Alpha-beta engine (player 1) against a seeded random engine (player 2).
pub fn self_play(
    out: &mut impl Write,
    config: SearchConfig,
    games: u16,
    seed: u64,
) -> io::Result<()> {
    let series = MatchSeriesConfig {
        games,
        base_seed: seed,
        per_game: MatchConfig::default(),
    };
    let stats = play_engine_match_series(
        || Box::new(AlphaBetaEngine::new(config)),
        || Box::new(RandomEngine::with_seed(seed)),
        &series,
    )
    .map_err(io::Error::other)?;

    writeln!(
        out,
        "player1: {} player2: {}",
        stats.player1_name, stats.player2_name
    )?;
    for (index, outcome) in stats.outcomes.iter().enumerate() {
        writeln!(out, "game {}: {:?}", index + 1, outcome)?;
    }
    writeln!(out, "{}", stats.report())?;
    Ok(())
}

fn report_stalemate(session: &mut GameSession, out: &mut impl Write) -> io::Result<bool> {
    if session.status() == GameStatus::Stalemate {
        writeln!(out, "Stalemate!")?;
        return Ok(true);
    }
    Ok(false)
}

/// Prompt until the side to move enters an accepted move. `false` on quit.
fn prompt_and_play(
    session: &mut GameSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<bool> {
    loop {
        let tag = match session.side_to_move() {
            Color::Light => 'W',
            Color::Dark => 'B',
        };
        write!(out, "\nEnter {tag} move: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        let text = line.trim();
        if text.starts_with("quit") {
            return Ok(false);
        }

        match parse_coordinate_move(text) {
            Ok(mv) => match session.play_move(mv) {
                Ok(_) => return Ok(true),
                Err(err) => writeln!(out, "{err}")?,
            },
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}
