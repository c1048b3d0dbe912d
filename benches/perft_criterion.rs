use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use duo_chess::move_generation::perft::perft;
use duo_chess::{apply_move, GameState, Position};

#[derive(Clone)]
struct BenchCase {
    name: &'static str,
    setup: &'static [((i8, i8), (i8, i8))],
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        setup: &[],
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "open_e4_e5",
        setup: &[((6, 4), (4, 4)), ((1, 4), (3, 4))],
        expected_nodes: &[29],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        setup: &[],
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "open_e4_e5",
        setup: &[((6, 4), (4, 4)), ((1, 4), (3, 4))],
        expected_nodes: &[29],
    },
];

fn selected_suite() -> (&'static str, &'static [BenchCase]) {
    match std::env::var("DUO_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", CASES_STANDARD),
        _ => ("quick", CASES_QUICK),
    }
}

fn build_game(setup: &[((i8, i8), (i8, i8))]) -> GameState {
    setup.iter().fold(GameState::new_game(), |game, (from, to)| {
        apply_move(&game, Position::new(from.0, from.1), Position::new(to.0, to.1))
    })
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = selected_suite();

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in cases {
        let game = build_game(case.setup);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&game), black_box(depth));
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
