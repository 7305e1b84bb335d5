use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_traymatch::core::{Board, GameState, SimpleRng};
use tui_traymatch::types::{GameSettings, LevelMode};

fn bench_fill(c: &mut Criterion) {
    c.bench_function("board_fill", |b| {
        b.iter(|| {
            let mut board = Board::new(&GameSettings::default());
            let mut rng = SimpleRng::new(black_box(12345));
            board.fill(&mut rng);
            board
        })
    });
}

fn bench_find_tray_matches(c: &mut Criterion) {
    let mut state = GameState::new(GameSettings::default(), LevelMode::Moves, 12345);
    state.start();
    // Stage a near-match tray.
    state.make_best_move();
    state.make_best_move();

    c.bench_function("find_tray_matches", |b| {
        b.iter(|| black_box(state.board().find_tray_matches()))
    });
}

fn bench_best_move_rollout(c: &mut Criterion) {
    let mut template = GameState::new(GameSettings::default(), LevelMode::Moves, 12345);
    template.start();

    c.bench_function("best_move_rollout_to_win", |b| {
        b.iter(|| {
            let mut state = template.clone();
            while !state.game_over() {
                state.make_best_move();
            }
            state.drain_events().len()
        })
    });
}

criterion_group!(
    benches,
    bench_fill,
    bench_find_tray_matches,
    bench_best_move_rollout
);
criterion_main!(benches);
