use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use duo_chess::engines::engine_cpu::CpuEngine;
use duo_chess::engines::engine_difficulty::Difficulty;
use duo_chess::engines::engine_trait::Engine;
use duo_chess::GameState;

fn bench_cpu_choose_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_choose_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    let game = GameState::new_game();
    for difficulty in Difficulty::ALL {
        let mut engine = CpuEngine::with_seed(difficulty, 1234);
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty.name()),
            &game,
            |b, game| {
                b.iter(|| {
                    let output = engine
                        .choose_move(black_box(game))
                        .expect("engine should choose a move");
                    black_box(output.best_move)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(cpu_benches, bench_cpu_choose_move);
criterion_main!(cpu_benches);
