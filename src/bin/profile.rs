//! Random self-play over the standard piece set, for profiling move
//! generation. Build with `--features hotpath` to get timings.
//!
//! Usage: `profile [seed] [games]`

use blokus_bitboard::pieces::standard_set;
use blokus_bitboard::{Board, TileState};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Blokus Duo board size.
const SIZE: usize = 14;

fn starting_board() -> Board {
    let mut board = Board::empty(SIZE, SIZE);
    board.set(4, 4, TileState::Corner);
    board.set(SIZE - 5, SIZE - 5, TileState::Corner);
    board
}

/// Distinct children of `board` for each remaining piece.
#[hotpath::measure]
fn children(board: &Board, remaining: &[Board]) -> Vec<(usize, Board)> {
    let mut out: Vec<(usize, Board)> = Vec::new();
    for (index, piece) in remaining.iter().enumerate() {
        for child in board.moves(std::slice::from_ref(piece)) {
            if !out.iter().any(|(_, seen)| seen.is_equal_to(&child)) {
                out.push((index, child));
            }
        }
    }
    out
}

#[hotpath::measure]
fn play_game(rng: &mut StdRng) -> (usize, Board) {
    let mut board = starting_board();
    let mut remaining = standard_set();
    let mut placed = 0;

    loop {
        let options = children(&board, &remaining);
        let Some(&(index, child)) = options.choose(rng) else {
            break;
        };
        board = child;
        remaining.swap_remove(index);
        placed += 1;
    }

    (placed, board)
}

#[hotpath::main]
fn main() {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let games: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    let mut rng = StdRng::seed_from_u64(seed);
    for game in 0..games {
        let (placed, board) = play_game(&mut rng);
        println!(
            "game {game}: {placed} pieces placed, {} cells filled",
            board.count_interior()
        );
        if game + 1 == games {
            print!("{board}");
        }
    }
}
