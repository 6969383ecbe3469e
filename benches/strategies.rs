use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rowcol::core::{Board, GameRng};
use rowcol::mcts::MCTSConfig;
use rowcol::rules::{legal_moves, Position};
use rowcol::strategy::{Strategy as _, StrategyKind, StrategySettings};

fn corpus(size: usize) -> Vec<Position> {
    let mut rng = GameRng::new(7777);
    (0..16)
        .map(|_| Position::new(Board::random(size, 1, 9, &mut rng)))
        .collect()
}

fn bench_legal_moves(c: &mut Criterion) {
    let positions = corpus(9);
    c.bench_function("legal_moves/9x9_opening", |b| {
        b.iter(|| {
            let mut acc = 0;
            for p in &positions {
                acc += legal_moves(p.board(), p.last_move()).len();
            }
            black_box(acc)
        })
    });
}

fn bench_choose_move(c: &mut Criterion) {
    let settings = StrategySettings {
        mcts: MCTSConfig::default().with_iterations(200),
        ..StrategySettings::default()
    };
    let mut group = c.benchmark_group("choose_move");
    for size in [3, 5, 8] {
        let positions = corpus(size);
        for kind in StrategyKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &positions, |b, positions| {
                let mut strategy = kind.build(&settings, 1);
                b.iter(|| {
                    for p in positions {
                        black_box(strategy.choose_move(p));
                    }
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_legal_moves, bench_choose_move);
criterion_main!(benches);
