use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::grid::{BitGrid, Cells, Geometry};
use crate::movegen::Moves;
use crate::tile::TileState;

/// Outcome of [`Board::try_place_polyomino`]. Only `Placed` changes the
/// board; the other variants leave it exactly as it was.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    Placed,
    /// Part of the piece fell off the board edge.
    Clipped,
    /// The piece would overlap a filled cell or share an edge with one.
    Blocked,
}

impl Placement {
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed)
    }
}

/// A Blokus board: every cell is interior, side, corner or empty, stored as
/// three pairwise-disjoint bit planes.
///
/// Polyominoes use the same type. A piece board has its filled cells as
/// interior, surrounded by a one-cell border of side marks (orthogonal
/// neighbours) and corner marks (diagonal neighbours).
///
/// Equality is strict: width, height and all three planes must match bit for
/// bit. Rotated or mirrored copies of a position are different boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    interior: BitGrid,
    side: BitGrid,
    corner: BitGrid,
}

impl Board {
    /// A board with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the area exceeds
    /// [`crate::bitboard::MAX_CELLS`].
    #[track_caller]
    pub fn empty(width: usize, height: usize) -> Self {
        let grid = BitGrid::new(width, height);
        Board {
            interior: grid,
            side: grid,
            corner: grid,
        }
    }

    /// Assemble a board from its three planes.
    pub(crate) fn from_planes(interior: BitGrid, side: BitGrid, corner: BitGrid) -> Self {
        debug_assert!(interior.geometry() == side.geometry());
        debug_assert!(interior.geometry() == corner.geometry());
        let board = Board {
            interior,
            side,
            corner,
        };
        debug_assert!(board.is_consistent());
        board
    }

    /// Parse a row-major board using `.` (empty), `i` (interior), `c`
    /// (corner) and `s` (side). Lines are trimmed and blank lines skipped;
    /// the width is that of the longest row and shorter rows are padded with
    /// empty cells.
    pub fn from_string(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        if height == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if !Geometry::fits(width, height) {
            return Err(BoardError::TooLarge { width, height });
        }

        let mut board = Board::empty(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let state =
                    TileState::from_char(ch).ok_or_else(|| BoardError::UnexpectedCharacter {
                        ch,
                        line: y + 1,
                        column: x + 1,
                    })?;
                board.set(x, y, state);
            }
        }
        Ok(board)
    }

    /// The board in the [`Board::from_string`] alphabet, one line per row,
    /// each terminated by `\n`.
    pub fn to_string_board(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.push(self.get(x, y).to_char());
            }
            out.push('\n');
        }
        out
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.interior.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.interior.height()
    }

    #[inline]
    pub fn interior(&self) -> &BitGrid {
        &self.interior
    }

    #[inline]
    pub fn side(&self) -> &BitGrid {
        &self.side
    }

    #[inline]
    pub fn corner(&self) -> &BitGrid {
        &self.corner
    }

    /// State of cell `(x, y)`. Coordinates must be on the board; see
    /// [`BitGrid`] for what happens otherwise.
    pub fn get(&self, x: usize, y: usize) -> TileState {
        if self.interior.get(x, y) {
            TileState::Interior
        } else if self.corner.get(x, y) {
            TileState::Corner
        } else if self.side.get(x, y) {
            TileState::Side
        } else {
            TileState::Empty
        }
    }

    /// Overwrite cell `(x, y)`. The cell is cleared in every plane before the
    /// plane for `state` is set.
    pub fn set(&mut self, x: usize, y: usize, state: TileState) {
        self.interior.clear(x, y);
        self.side.clear(x, y);
        self.corner.clear(x, y);
        match state {
            TileState::Interior => self.interior.set(x, y),
            TileState::Side => self.side.set(x, y),
            TileState::Corner => self.corner.set(x, y),
            TileState::Empty => {}
        }
    }

    /// Number of filled cells.
    #[inline]
    pub fn count_interior(&self) -> u32 {
        self.interior.count()
    }

    /// Number of cells a new piece may touch.
    #[inline]
    pub fn count_corners(&self) -> u32 {
        self.corner.count()
    }

    /// Corner cells in row-major order.
    pub fn corners(&self) -> Cells {
        self.corner.iter_set()
    }

    /// True when no cell is set in more than one plane.
    pub fn is_consistent(&self) -> bool {
        let (i, s, c) = (self.interior.bits(), self.side.bits(), self.corner.bits());
        (i & s).is_empty() && (i & c).is_empty() && (s & c).is_empty()
    }

    pub fn is_equal_to(&self, other: &Board) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.interior.bits() == other.interior.bits()
            && self.side.bits() == other.side.bits()
            && self.corner.bits() == other.corner.bits()
    }

    pub fn resize(&self, width: usize, height: usize) -> Self {
        Board {
            interior: self.interior.resize(width, height),
            side: self.side.resize(width, height),
            corner: self.corner.resize(width, height),
        }
    }

    #[hotpath::measure]
    pub fn rotate_clockwise(&self) -> Self {
        Board {
            interior: self.interior.rotate_clockwise(),
            side: self.side.rotate_clockwise(),
            corner: self.corner.rotate_clockwise(),
        }
    }

    /// Shift every plane by `(dx, dy)`, dropping cells pushed off the board.
    pub fn translate_in_place(&mut self, dx: isize, dy: isize) {
        self.interior.translate_in_place(dx, dy);
        self.side.translate_in_place(dx, dy);
        self.corner.translate_in_place(dx, dy);
    }

    /// Try to lay `polyomino` on this board so that its cell
    /// `(poly_x, poly_y)` lands on `(x, y)`.
    ///
    /// The piece is rejected if any of its filled cells would leave the board
    /// ([`Placement::Clipped`]), or if an existing filled cell lies under the
    /// piece's interior or side marks ([`Placement::Blocked`]). Otherwise the
    /// piece and its marks are merged in and side/corner marks that the piece
    /// now covers or borders are retired.
    ///
    /// The board is only modified when `Placed` is returned; clone first to
    /// evaluate a placement without committing to it.
    #[hotpath::measure]
    pub fn try_place_polyomino(
        &mut self,
        x: usize,
        y: usize,
        polyomino: &Board,
        poly_x: isize,
        poly_y: isize,
    ) -> Placement {
        let (dx, dy) = (x as isize - poly_x, y as isize - poly_y);
        // Shift towards the origin before cropping so marks past the board's
        // far edge are still there when the piece lands.
        let mut piece = *polyomino;
        piece.translate_in_place(dx.min(0), dy.min(0));
        let mut piece = piece.resize(self.width(), self.height());
        piece.translate_in_place(dx.max(0), dy.max(0));

        if piece.count_interior() != polyomino.count_interior() {
            return Placement::Clipped;
        }

        let piece_interior = piece.interior.bits();
        let piece_side = piece.side.bits();
        let piece_corner = piece.corner.bits();

        if (self.interior.bits() & (piece_interior | piece_side)).is_nonzero() {
            return Placement::Blocked;
        }

        // Each step reads the planes as updated by the previous one.
        let interior = self.interior.bits() | piece_interior;
        let side = self.side.bits() | (piece_side & !interior);
        let corner = self.corner.bits() | (piece_corner & !(interior | side));
        let corner = corner & !(piece_interior | piece_side);
        let side = side & !interior;

        self.interior.set_bits(interior);
        self.side.set_bits(side);
        self.corner.set_bits(corner);

        debug_assert!(self.is_consistent());
        Placement::Placed
    }

    /// Every board reachable by one legal placement of one of `polyominoes`.
    /// See [`Moves`] for the enumeration order.
    pub fn moves<'a>(&'a self, polyominoes: &'a [Board]) -> Moves<'a> {
        Moves::new(self, polyominoes)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_board())
    }
}
