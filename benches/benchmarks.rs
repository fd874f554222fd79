use blokus_bitboard::pieces::{standard_piece, standard_set};
use blokus_bitboard::{BitGrid, Board, TileState};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn seeded_board(size: usize) -> Board {
    let mut board = Board::empty(size, size);
    board.set(4, 4, TileState::Corner);
    board.set(size - 5, size - 5, TileState::Corner);
    board
}

/// Place ~8 random pieces on a fresh 14×14 board to get a realistic mid-game
/// position. Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame() -> (Board, Vec<Board>) {
    let mut board = seeded_board(14);
    let mut remaining = standard_set();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..8 {
        let options: Vec<(usize, Board)> = remaining
            .iter()
            .enumerate()
            .flat_map(|(i, piece)| {
                board
                    .moves(std::slice::from_ref(piece))
                    .map(move |child| (i, child))
                    .collect::<Vec<_>>()
            })
            .collect();
        let Some(&(i, child)) = options.choose(&mut rng) else {
            break;
        };
        board = child;
        remaining.swap_remove(i);
    }
    (board, remaining)
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_rotate_clockwise(c: &mut Criterion) {
    let piece = standard_piece("F5").expect("F5 is a standard piece");
    c.bench_function("rotate_clockwise_f5", |b| {
        b.iter(|| black_box(piece.rotate_clockwise()))
    });
}

fn bench_translate_14x14(c: &mut Criterion) {
    let (board, _) = setup_midgame();
    let grid: BitGrid = *board.interior();
    c.bench_function("translate_14x14", |b| {
        b.iter(|| black_box(grid.translate(black_box(-3), black_box(2))))
    });
}

fn bench_try_place(c: &mut Criterion) {
    let board = seeded_board(14);
    let piece = standard_piece("X5").expect("X5 is a standard piece");
    c.bench_function("try_place_polyomino", |b| {
        b.iter_batched(
            || board,
            |mut target| black_box(target.try_place_polyomino(4, 4, &piece, 1, 1)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_moves_opening(c: &mut Criterion) {
    let board = seeded_board(14);
    let pieces = standard_set();
    c.bench_function("moves_opening_14x14", |b| {
        b.iter(|| black_box(board.moves(&pieces).count()))
    });
}

fn bench_moves_midgame(c: &mut Criterion) {
    let (board, pieces) = setup_midgame();
    c.bench_function("moves_midgame_14x14", |b| {
        b.iter(|| black_box(board.moves(&pieces).count()))
    });
}

fn bench_first_move(c: &mut Criterion) {
    let (board, pieces) = setup_midgame();
    c.bench_function("first_move_midgame_14x14", |b| {
        b.iter(|| black_box(board.moves(&pieces).next()))
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout_14x14(c: &mut Criterion) {
    c.bench_function("random_playout_14x14", |b| {
        b.iter(|| {
            let mut board = seeded_board(14);
            let mut remaining = standard_set();
            let mut rng = StdRng::seed_from_u64(123);
            loop {
                let children: Vec<Board> = board.moves(&remaining).collect();
                let Some(child) = children.choose(&mut rng) else {
                    break;
                };
                let grown = child.count_interior() - board.count_interior();
                board = *child;
                // Drop one piece of the placed size to keep the playout finite.
                if let Some(i) = remaining.iter().position(|p| p.count_interior() == grown) {
                    remaining.swap_remove(i);
                }
            }
            black_box(board.count_interior())
        })
    });
}

criterion_group!(
    benches,
    bench_rotate_clockwise,
    bench_translate_14x14,
    bench_try_place,
    bench_moves_opening,
    bench_moves_midgame,
    bench_first_move,
    bench_random_playout_14x14,
);
criterion_main!(benches);
