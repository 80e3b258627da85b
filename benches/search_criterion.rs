use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use x88_chess::game_state::chess_types::Color;
use x88_chess::game_state::game_state::GameState;
use x88_chess::search::board_scoring::{BoardScorer, ReferenceScorer};
use x88_chess::search::negamax::{best_move, SearchConfig};

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    placement: &'static str,
    side: Color,
    depths: &'static [u8],
}

const CASES_QUICK: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        side: Color::Light,
        depths: &[1, 2],
    },
    SearchCase {
        name: "back_rank_mate",
        placement: "6k1/5ppp/8/8/8/8/8/R5K1",
        side: Color::Light,
        depths: &[3],
    },
];

const CASES_STANDARD: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        side: Color::Light,
        depths: &[1, 2, 3],
    },
    SearchCase {
        name: "italian",
        placement: "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1",
        side: Color::Dark,
        depths: &[2, 3],
    },
];

fn suite_is_standard() -> bool {
    matches!(std::env::var("X88_BENCH_SUITE"), Ok(value) if value.eq_ignore_ascii_case("standard"))
}

fn bench_search(c: &mut Criterion) {
    let cases = if suite_is_standard() {
        CASES_STANDARD
    } else {
        CASES_QUICK
    };

    let mut group = c.benchmark_group("best_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let scorer = ReferenceScorer::default();

    for case in cases {
        let game = GameState::from_placement(case.placement)
            .expect("benchmark placement should parse");

        for &depth in case.depths {
            let config = SearchConfig { depth };

            // Correctness guard: a move exists and the board is left untouched.
            let mut probe = game.clone();
            let result = best_move(&mut probe, case.side, &scorer, config);
            assert!(result.best_move.is_some(), "{} has no move", case.name);
            assert_eq!(probe, game, "{} board changed by search", case.name);

            let mut bench_game = game.clone();
            group.bench_with_input(
                BenchmarkId::new(case.name, depth),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result =
                            best_move(black_box(&mut bench_game), case.side, &scorer, *config);
                        black_box(result.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let scorer = ReferenceScorer::default();
    let mut game = GameState::new_game();
    c.bench_function("reference_scorer_startpos", |b| {
        b.iter(|| black_box(scorer.score(black_box(&mut game))));
    });
}

criterion_group!(search_benches, bench_search, bench_evaluation);
criterion_main!(search_benches);
