pub mod bitboard;
pub mod board;
pub mod error;
pub mod grid;
pub mod movegen;
pub mod pieces;
pub mod position;
pub mod tile;

pub use board::{Board, Placement};
pub use error::BoardError;
pub use grid::BitGrid;
pub use movegen::Moves;
pub use position::Position;
pub use tile::TileState;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn blokus_bitboard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add("MAX_CELLS", bitboard::MAX_CELLS)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::grid::Geometry;
    use crate::pieces;

    fn value_error(err: BoardError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    fn check_size(width: usize, height: usize) -> PyResult<()> {
        if !Geometry::fits(width, height) {
            return Err(value_error(BoardError::TooLarge { width, height }));
        }
        Ok(())
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    impl PyBoard {
        fn check_cell(&self, x: usize, y: usize) -> PyResult<()> {
            if !Position::new(x, y).is_valid(self.board.width(), self.board.height()) {
                return Err(PyErr::new::<pyo3::exceptions::PyIndexError, _>(format!(
                    "cell ({x}, {y}) is outside the {}x{} board",
                    self.board.width(),
                    self.board.height()
                )));
            }
            Ok(())
        }
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new(width: usize, height: usize) -> PyResult<Self> {
            check_size(width, height)?;
            Ok(PyBoard {
                board: Board::empty(width, height),
            })
        }

        #[staticmethod]
        pub fn from_string(text: &str) -> PyResult<Self> {
            let board = Board::from_string(text).map_err(value_error)?;
            Ok(PyBoard { board })
        }

        #[staticmethod]
        pub fn polyomino(shape: &str) -> PyResult<Self> {
            let board = pieces::polyomino(shape).map_err(value_error)?;
            Ok(PyBoard { board })
        }

        #[staticmethod]
        pub fn standard_pieces() -> Vec<PyBoard> {
            pieces::standard_set()
                .into_iter()
                .map(|board| PyBoard { board })
                .collect()
        }

        pub fn width(&self) -> usize {
            self.board.width()
        }

        pub fn height(&self) -> usize {
            self.board.height()
        }

        pub fn get(&self, x: usize, y: usize) -> PyResult<String> {
            self.check_cell(x, y)?;
            Ok(self.board.get(x, y).name().to_string())
        }

        pub fn set(&mut self, x: usize, y: usize, state: &str) -> PyResult<()> {
            self.check_cell(x, y)?;
            let state: TileState = state.parse().map_err(value_error)?;
            self.board.set(x, y, state);
            Ok(())
        }

        pub fn count_interior(&self) -> u32 {
            self.board.count_interior()
        }

        pub fn to_string_board(&self) -> String {
            self.board.to_string_board()
        }

        pub fn resize(&self, width: usize, height: usize) -> PyResult<PyBoard> {
            check_size(width, height)?;
            Ok(PyBoard {
                board: self.board.resize(width, height),
            })
        }

        pub fn rotate_clockwise(&self) -> PyBoard {
            PyBoard {
                board: self.board.rotate_clockwise(),
            }
        }

        pub fn translate_in_place(&mut self, dx: isize, dy: isize) {
            self.board.translate_in_place(dx, dy)
        }

        pub fn try_place_polyomino(
            &mut self,
            x: usize,
            y: usize,
            polyomino: &PyBoard,
            poly_x: isize,
            poly_y: isize,
        ) -> PyResult<bool> {
            self.check_cell(x, y)?;
            Ok(self
                .board
                .try_place_polyomino(x, y, &polyomino.board, poly_x, poly_y)
                .is_placed())
        }

        /// Every board reachable by one placement, duplicates included.
        pub fn moves(&self, polyominoes: Vec<PyRef<'_, PyBoard>>) -> Vec<PyBoard> {
            let pieces: Vec<Board> = polyominoes.iter().map(|p| p.board).collect();
            self.board
                .moves(&pieces)
                .map(|board| PyBoard { board })
                .collect()
        }

        pub fn is_equal_to(&self, other: &PyBoard) -> bool {
            self.board.is_equal_to(&other.board)
        }

        pub fn clone(&self) -> PyBoard {
            PyBoard { board: self.board }
        }

        pub fn __eq__(&self, other: &PyBoard) -> bool {
            self.board == other.board
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.board.hash(&mut hasher);
            hasher.finish()
        }

        pub fn __str__(&self) -> String {
            self.board.to_string_board()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Board(width={}, height={}, interior={})",
                self.board.width(),
                self.board.height(),
                self.board.count_interior()
            )
        }
    }
}
