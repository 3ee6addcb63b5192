use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use othello_core::{Board, Color, Move};
use othello_mcts::{Mcts, MctsConfig, SearchPolicy};
use othello_selfplay::play_game;

/// Position after d3 c3, where symmetry no longer collapses the root
fn early_midgame() -> Board {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 4), Color::Black);
    board.apply_move(Move::new(3, 3), Color::White);
    board
}

/// One decision per policy at fixed simulation ceilings
fn bench_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("decision");
    let board = early_midgame();

    for policy in [SearchPolicy::Naive, SearchPolicy::Smart] {
        for num_sims in [100u32, 1_000, 5_000] {
            let config = MctsConfig::default()
                .with_policy(policy)
                .with_time_budget_ms(60_000)
                .with_simulation_ceiling(num_sims)
                .with_seed(42);

            group.bench_with_input(
                BenchmarkId::new(policy.to_string(), num_sims),
                &num_sims,
                |b, _| {
                    let mut mcts = Mcts::new();
                    b.iter(|| {
                        let result = mcts
                            .search(black_box(&board), Color::Black, black_box(&config))
                            .expect("Search failed");
                        black_box(result)
                    });
                },
            );
        }
    }

    group.finish();
}

/// A full game with both sides on the same policy
fn bench_single_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_game");
    group.sample_size(10);

    for policy in [SearchPolicy::Naive, SearchPolicy::Smart] {
        let config = MctsConfig::default()
            .with_policy(policy)
            .with_time_budget_ms(60_000)
            .with_simulation_ceiling(200)
            .with_seed(7);

        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, _| {
            b.iter(|| {
                let record =
                    play_game(black_box(&config), black_box(&config)).expect("Game failed");
                black_box(record)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decision, bench_single_game);
criterion_main!(benches);
