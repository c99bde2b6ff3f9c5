use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frametris::core::{collides, resolve, GameState, Grid, MoveRequest, Piece};
use frametris::types::{FrameInput, GameAction, PieceKind, Rotation};

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let idle = FrameInput::NONE;

    c.bench_function("step_idle_frame", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.step(black_box(&idle)));
        })
    });
}

fn bench_soft_drop_game(c: &mut Criterion) {
    let held = FrameInput::from_action(GameAction::SoftDrop);

    c.bench_function("soft_drop_until_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            while !state.game_over() {
                state.step(&held);
            }
            state.score()
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                grid.fill_row(y, PieceKind::I);
            }
            black_box(grid.clear_full_rows())
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut grid = Grid::new();
    for y in 10..20 {
        grid.fill_row(y, PieceKind::O);
        grid.set(4, y as i16, None);
    }
    let piece = Piece::new(PieceKind::T, Rotation::South, 3, 8);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&grid), black_box(&piece)))
    });
}

fn bench_rotate_with_kick(c: &mut Criterion) {
    let grid = Grid::new();
    let piece = Piece::new(PieceKind::T, Rotation::West, 8, 5);

    c.bench_function("rotate_with_kick", |b| {
        b.iter(|| resolve(black_box(&grid), black_box(&piece), MoveRequest::RotateCw))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_soft_drop_game,
    bench_line_clear,
    bench_collides,
    bench_rotate_with_kick
);
criterion_main!(benches);
