//! Polyomino construction and the standard Blokus piece set.
//!
//! Pieces are [`Board`]s whose filled cells are interior, framed by a
//! one-cell border: side marks on the orthogonal neighbours and corner marks
//! on the diagonal neighbours that are not also orthogonal ones. That border
//! is what lets [`Board::moves`] align a piece corner through
//! `(px + 1, py + 1)`.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::error::BoardError;
use crate::grid::{BitGrid, Geometry};

const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A named piece drawn with `x` for filled cells and `.` for gaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceShape {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl PieceShape {
    /// The piece board, outlined with side and corner marks.
    pub fn to_board(&self) -> Board {
        outline(&cells_from_rows(self.rows))
    }

    pub fn cell_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.bytes().filter(|&b| b == b'x').count())
            .sum()
    }
}

/// The 21 pieces of one Blokus colour: 89 cells in total.
pub const STANDARD_SHAPES: [PieceShape; 21] = [
    PieceShape { name: "I1", rows: &["x"] },
    PieceShape { name: "I2", rows: &["xx"] },
    PieceShape { name: "I3", rows: &["xxx"] },
    PieceShape { name: "I4", rows: &["xxxx"] },
    PieceShape { name: "I5", rows: &["xxxxx"] },
    PieceShape { name: "L5", rows: &["xxxx", "x..."] },
    PieceShape { name: "V5", rows: &["xxx", "x..", "x.."] },
    PieceShape { name: "L4", rows: &["xxx", "x.."] },
    PieceShape { name: "V3", rows: &["xx", "x."] },
    PieceShape { name: "X5", rows: &[".x.", "xxx", ".x."] },
    PieceShape { name: "F5", rows: &[".x.", ".xx", "xx."] },
    PieceShape { name: "T5", rows: &["x..", "xxx", "x.."] },
    PieceShape { name: "Y5", rows: &["x.", "x.", "xx", "x."] },
    PieceShape { name: "T4", rows: &["x.", "xx", "x."] },
    PieceShape { name: "U5", rows: &["xx", "x.", "xx"] },
    PieceShape { name: "O4", rows: &["xx", "xx"] },
    PieceShape { name: "P5", rows: &["xxx", "xx."] },
    PieceShape { name: "Z5", rows: &[".xx", ".x.", "xx."] },
    PieceShape { name: "N5", rows: &[".x", "xx", "x.", "x."] },
    PieceShape { name: "W5", rows: &["..x", ".xx", "xx."] },
    PieceShape { name: "Z4", rows: &[".x", "xx", "x."] },
];

/// Every standard piece, in [`STANDARD_SHAPES`] order.
pub fn standard_set() -> Vec<Board> {
    STANDARD_SHAPES.iter().map(PieceShape::to_board).collect()
}

/// The standard piece called `name` (`"X5"`, `"I2"`, ...).
pub fn standard_piece(name: &str) -> Option<Board> {
    STANDARD_SHAPES
        .iter()
        .find(|shape| shape.name == name)
        .map(PieceShape::to_board)
}

/// The catalog served by the demo front end: a single vertical domino.
pub fn demo_catalog() -> Vec<Board> {
    vec![outline(&cells_from_rows(&["x", "x"]))]
}

/// Build a piece from a drawing such as `"x x x\nx . ."`: `x` is a filled
/// cell, `.` a gap. Spaces are ignored, rows end at a newline or `|`, and
/// blank rows are skipped.
pub fn polyomino(shape: &str) -> Result<Board, BoardError> {
    let rows: Vec<String> = shape
        .split(['\n', '|'])
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|row| !row.is_empty())
        .collect();

    for (y, row) in rows.iter().enumerate() {
        if let Some((x, ch)) = row.chars().enumerate().find(|&(_, c)| c != 'x' && c != '.') {
            return Err(BoardError::UnexpectedCharacter {
                ch,
                line: y + 1,
                column: x + 1,
            });
        }
    }

    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) + 2;
    let height = rows.len() + 2;
    if !rows.iter().any(|row| row.contains('x')) {
        return Err(BoardError::EmptyBoard);
    }
    if !Geometry::fits(width, height) {
        return Err(BoardError::TooLarge { width, height });
    }

    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Ok(outline(&cells_from_rows(&rows)))
}

/// Filled cells of `rows`, offset by one so the border fits.
fn cells_from_rows(rows: &[&str]) -> BitGrid {
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) + 2;
    let mut cells = BitGrid::new(width, rows.len() + 2);
    for (y, row) in rows.iter().enumerate() {
        for (x, b) in row.bytes().enumerate() {
            if b == b'x' {
                cells.set(x + 1, y + 1);
            }
        }
    }
    cells
}

fn spread(cells: &BitGrid, steps: &[(isize, isize)]) -> Bitboard {
    steps.iter().fold(Bitboard::empty(), |acc, &(dx, dy)| {
        acc | cells.translate(dx, dy).bits()
    })
}

/// Mark the side and corner cells around `cells`.
fn outline(cells: &BitGrid) -> Board {
    let interior = cells.bits();
    let side = spread(cells, &ORTHOGONAL) & !interior;
    let corner = spread(cells, &DIAGONAL) & !(interior | side);

    let (width, height) = (cells.width(), cells.height());
    Board::from_planes(
        *cells,
        BitGrid::from_bitboard(width, height, side),
        BitGrid::from_bitboard(width, height, corner),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileState;

    fn board(text: &str) -> Board {
        Board::from_string(text).expect("valid board text")
    }

    #[test]
    fn test_monomino_outline() {
        let piece = polyomino("x").expect("valid shape");
        assert_eq!(piece, board("csc\nsis\ncsc"));
    }

    #[test]
    fn test_domino_matches_demo_catalog() {
        let piece = polyomino("x\nx").expect("valid shape");
        assert_eq!(piece, board("csc\nsis\nsis\ncsc"));
        assert_eq!(demo_catalog(), vec![piece]);
    }

    #[test]
    fn test_l_tromino_outline() {
        let piece = polyomino("x x\nx .").expect("valid shape");
        assert_eq!(
            piece.to_string_board(),
            "cssc\nsiis\nsisc\ncsc.\n"
        );
    }

    #[test]
    fn test_pipe_separated_rows() {
        assert_eq!(
            polyomino("x x x|x").expect("valid shape"),
            standard_piece("L4").expect("L4 exists")
        );
    }

    #[test]
    fn test_polyomino_errors() {
        assert_eq!(
            polyomino("x\nxo"),
            Err(BoardError::UnexpectedCharacter {
                ch: 'o',
                line: 2,
                column: 2
            })
        );
        assert_eq!(polyomino("  \n"), Err(BoardError::EmptyBoard));
        assert_eq!(polyomino("..\n.."), Err(BoardError::EmptyBoard));
        let wide = "x".repeat(1023);
        assert!(matches!(polyomino(&wide), Err(BoardError::TooLarge { .. })));
    }

    #[test]
    fn test_standard_pieces_have_at_most_5_tiles() {
        let set = standard_set();
        assert_eq!(set.len(), 21);
        for (shape, piece) in STANDARD_SHAPES.iter().zip(&set) {
            let tiles = piece.count_interior();
            assert!(tiles <= 5, "{} has {tiles} tiles, expected at most 5", shape.name);
            assert_eq!(tiles as usize, shape.cell_count());
        }
        let total: u32 = set.iter().map(Board::count_interior).sum();
        assert_eq!(total, 89);
    }

    #[test]
    fn test_standard_pieces_include_all_expected_dimensions() {
        let mut dimen = vec![
            (3, 3),
            (4, 2),
            (3, 2),
            (2, 2),
            (3, 3),
            (3, 3),
            (3, 3),
            (2, 3),
            (2, 4),
            (2, 3),
            (2, 2),
            (3, 2),
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 1),
            (5, 1),
            (3, 3),
            (2, 4),
            (3, 3),
            (2, 3),
        ];

        for piece in standard_set() {
            // Shape size without the one-cell border.
            let dims = (piece.width() - 2, piece.height() - 2);
            let index = dimen.iter().position(|&d| d == dims);
            match index {
                Some(index) => {
                    dimen.remove(index);
                }
                None => panic!("piece of {dims:?} is not in dimension list\n  dimen = {dimen:#?}"),
            }
        }
        assert!(dimen.is_empty());
    }

    #[test]
    fn test_standard_names_are_unique() {
        for (i, a) in STANDARD_SHAPES.iter().enumerate() {
            for b in &STANDARD_SHAPES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
        assert!(standard_piece("Q7").is_none());
    }

    // Every corner mark touches the piece only diagonally, and every filled
    // cell is enclosed by marks.
    fn assert_outline_shape(piece: &Board) {
        assert!(piece.is_consistent());
        for pos in piece.corners() {
            for (dx, dy) in ORTHOGONAL {
                let (nx, ny) = (pos.x as isize + dx, pos.y as isize + dy);
                if nx < 0 || ny < 0 || nx as usize >= piece.width() || ny as usize >= piece.height() {
                    continue;
                }
                assert_ne!(piece.get(nx as usize, ny as usize), TileState::Interior);
            }
        }
        for pos in piece.interior().iter_set() {
            assert!(pos.x > 0 && pos.y > 0);
            assert!(pos.x + 1 < piece.width() && pos.y + 1 < piece.height());
        }
    }

    macro_rules! standard_piece_tests {
        ($($name:ident),* $(,)?) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<test_ $name:lower _outline>]() {
                        let piece = standard_piece(stringify!($name)).expect("standard piece");
                        assert_outline_shape(&piece);
                    }

                    #[test]
                    fn [<test_ $name:lower _full_turn>]() {
                        let piece = standard_piece(stringify!($name)).expect("standard piece");
                        let mut turned = piece;
                        for _ in 0..4 {
                            turned = turned.rotate_clockwise();
                            assert_outline_shape(&turned);
                            assert_eq!(turned.count_interior(), piece.count_interior());
                        }
                        assert_eq!(turned, piece);
                    }
                )*
            }
        };
    }

    standard_piece_tests!(
        I1, I2, I3, I4, I5, L5, V5, L4, V3, X5, F5, T5, Y5, T4, U5, O4, P5, Z5, N5, W5, Z4,
    );
}
