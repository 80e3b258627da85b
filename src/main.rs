use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use x88_chess::console::console_game::{
    eval_test, play_two_player, play_vs_ai, search_test, self_play,
};
use x88_chess::engines::engine_alpha_beta::AlphaBetaEngine;
use x88_chess::search::negamax::{SearchConfig, SEARCH_DEPTH};
use x88_chess::utils::io_log::IoLog;
use x88_chess::xboard::xboard_top::run_stdio_loop;

#[derive(Debug, Parser)]
#[command(name = "x88-chess", version, about = "0x88 chess engine speaking the XBoard protocol")]
struct Cli {
    /// Search depth in plies, counting the root move.
    #[arg(long, global = true, default_value_t = SEARCH_DEPTH)]
    depth: u8,

    /// Write a timestamped transcript of protocol traffic to this file.
    #[arg(long, global = true)]
    io_log: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Talk XBoard protocol on stdin/stdout (default).
    Xboard,
    /// Two-player game at the console.
    Play,
    /// Play White at the console against the engine.
    Ai,
    /// Time a search of the opening position.
    SearchTest,
    /// Print evaluator scores for sample positions.
    EvalTest,
    /// Alpha-beta engine against a random mover.
    SelfPlay {
        #[arg(long, default_value_t = 4)]
        games: u16,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = SearchConfig {
        depth: cli.depth.max(1),
    };
    let io_log = match &cli.io_log {
        Some(path) => IoLog::open(path)
            .map_err(|e| format!("cannot open I/O log {}: {e}", path.display()))?,
        None => IoLog::disabled(),
    };

    let mut out = io::stdout();

    let result = match cli.mode.unwrap_or(Mode::Xboard) {
        Mode::Xboard => run_stdio_loop(config, io_log),
        Mode::Play => play_two_player(&mut io::stdin().lock(), &mut out),
        Mode::Ai => play_vs_ai(
            &mut io::stdin().lock(),
            &mut out,
            &mut AlphaBetaEngine::new(config),
        ),
        Mode::SearchTest => search_test(&mut out, config),
        Mode::EvalTest => eval_test(&mut out),
        Mode::SelfPlay { games, seed } => self_play(&mut out, config, games, seed),
    };

    result.map_err(|e| e.to_string())
}
