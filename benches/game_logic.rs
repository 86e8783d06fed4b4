use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, ShapeKind};
use blockfall::types::{EMPTY, GRID_HEIGHT, GRID_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::with_seed(12345);
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::with_seed(777);

    c.bench_function("advance", |b| {
        b.iter(|| {
            if !state.advance() {
                state = GameState::with_seed(777);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut rows = vec![vec![EMPTY; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
    for row in rows.iter_mut().skip(16) {
        row.fill(3);
    }
    let template = Board::from_rows(&rows);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = template.clone();
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    let mut left = true;

    c.bench_function("move_sideways", |b| {
        b.iter(|| {
            let moved = if left { state.move_left() } else { state.move_right() };
            if !moved {
                left = !left;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn bench_shape_rotation(c: &mut Criterion) {
    c.bench_function("shape_rotated_cw", |b| {
        b.iter(|| {
            for kind in ShapeKind::ALL {
                black_box(black_box(kind.shape()).rotated_cw());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_advance,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_shape_rotation
);
criterion_main!(benches);
