use std::fmt;

use crate::bitboard::{BitIterator, Bitboard, MAX_CELLS};
use crate::position::Position;

/// Precomputed masks for a given grid size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    pub area: usize,
    /// Mask with 1s at all valid positions (indices 0..area).
    pub board_mask: Bitboard,
    /// The low `width` bits: row 0.
    pub row_mask: Bitboard,
    /// Bit `row * width` for every row: column 0.
    pub col_mask: Bitboard,
}

impl Geometry {
    /// Whether a `width × height` grid fits in a [`Bitboard`].
    pub const fn fits(width: usize, height: usize) -> bool {
        width > 0 && height > 0 && width <= MAX_CELLS && height <= MAX_CELLS / width
    }

    /// Build geometry for a `width × height` grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the area exceeds [`MAX_CELLS`].
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            Self::fits(width, height),
            "grid of {width}x{height} does not fit in {MAX_CELLS} cells"
        );
        let area = width * height;

        let mut col_mask = Bitboard::empty();
        for row in 0..height {
            col_mask.set(row * width);
        }

        Geometry {
            width,
            height,
            area,
            board_mask: Bitboard::low_bits(area),
            row_mask: Bitboard::low_bits(width),
            col_mask,
        }
    }

    /// The rightmost column.
    #[inline]
    pub fn last_col_mask(&self) -> Bitboard {
        self.col_mask.shift_left(self.width - 1)
    }

    /// The bottom row.
    #[inline]
    pub fn last_row_mask(&self) -> Bitboard {
        self.row_mask.shift_left((self.height - 1) * self.width)
    }
}

/// A `width × height` rectangle of booleans packed row-major into a
/// [`Bitboard`]: cell `(x, y)` lives at bit `y * width + x`.
///
/// No bit at or beyond `width * height` is ever set. `BitGrid` is `Copy`, so
/// every clone is a fully independent value.
///
/// Cell accessors do not bounds-check in release builds. Passing `x >= width`
/// or `y >= height` is a precondition violation: it trips a debug assertion,
/// and in release addresses some other bit of the grid (or panics on the
/// backing array if the index exceeds [`MAX_CELLS`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitGrid {
    geometry: Geometry,
    bits: Bitboard,
}

impl BitGrid {
    /// An all-clear grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the area exceeds [`MAX_CELLS`].
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        BitGrid {
            geometry: Geometry::new(width, height),
            bits: Bitboard::empty(),
        }
    }

    /// A grid holding `bits`; anything past the grid's area is dropped.
    #[track_caller]
    pub fn from_bitboard(width: usize, height: usize, bits: Bitboard) -> Self {
        let geometry = Geometry::new(width, height);
        BitGrid {
            bits: bits & geometry.board_mask,
            geometry,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.geometry.height
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn bits(&self) -> Bitboard {
        self.bits
    }

    /// Replace the raw bits, masking to the grid's area.
    #[inline]
    pub(crate) fn set_bits(&mut self, bits: Bitboard) {
        self.bits = bits & self.geometry.board_mask;
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.geometry.width && y < self.geometry.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.geometry.width,
            self.geometry.height
        );
        y * self.geometry.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits.get(self.index(x, y))
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.bits.set(idx);
    }

    #[inline]
    pub fn clear(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.bits.clear(idx);
    }

    /// Number of set cells.
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Shift every set cell by `(dx, dy)`. Cells pushed past an edge are
    /// dropped, not wrapped, so the operation is lossy: translating back by
    /// `(-dx, -dy)` only restores cells that stayed on the grid.
    ///
    /// Each unit step clears the column or row that would wrap before
    /// shifting.
    pub fn translate_in_place(&mut self, dx: isize, dy: isize) {
        let g = self.geometry;
        let mut bits = self.bits;

        if dx.unsigned_abs() >= g.width {
            bits = Bitboard::empty();
        } else if dx < 0 {
            for _ in 0..dx.unsigned_abs() {
                bits &= !g.col_mask;
                bits = bits.shift_right(1);
            }
        } else {
            let last_col = g.last_col_mask();
            for _ in 0..dx {
                bits &= !last_col;
                bits = bits.shift_left(1);
            }
        }

        if dy.unsigned_abs() >= g.height {
            bits = Bitboard::empty();
        } else if dy < 0 {
            for _ in 0..dy.unsigned_abs() {
                bits &= !g.row_mask;
                bits = bits.shift_right(g.width);
            }
        } else {
            let last_row = g.last_row_mask();
            for _ in 0..dy {
                bits &= !last_row;
                bits = bits.shift_left(g.width);
            }
        }

        self.bits = bits & g.board_mask;
    }

    pub fn translate(&self, dx: isize, dy: isize) -> Self {
        let mut out = *self;
        out.translate_in_place(dx, dy);
        out
    }

    /// Mirror top to bottom: row `y` swaps with row `height - 1 - y`.
    pub fn flip_vertical_in_place(&mut self) {
        let g = self.geometry;
        let mut out = Bitboard::empty();
        for i in 0..g.height.div_ceil(2) {
            let top = i * g.width;
            let bottom = (g.height - i - 1) * g.width;
            out |= (self.bits.shift_right(top) & g.row_mask).shift_left(bottom);
            out |= (self.bits.shift_right(bottom) & g.row_mask).shift_left(top);
        }
        self.bits = out;
    }

    pub fn flip_vertical(&self) -> Self {
        let mut out = *self;
        out.flip_vertical_in_place();
        out
    }

    /// Mirror left to right: column `x` swaps with column `width - 1 - x`.
    pub fn flip_horizontal_in_place(&mut self) {
        let g = self.geometry;
        let mut out = Bitboard::empty();
        for left in 0..g.width.div_ceil(2) {
            let right = g.width - left - 1;
            out |= (self.bits.shift_right(left) & g.col_mask).shift_left(right);
            out |= (self.bits.shift_right(right) & g.col_mask).shift_left(left);
        }
        self.bits = out;
    }

    pub fn flip_horizontal(&self) -> Self {
        let mut out = *self;
        out.flip_horizontal_in_place();
        out
    }

    /// A `height × width` grid with `out.get(x, y) == self.get(y, x)`.
    pub fn transpose(&self) -> Self {
        let mut out = BitGrid::new(self.height(), self.width());
        for pos in self.iter_set() {
            out.set(pos.y, pos.x);
        }
        out
    }

    /// Quarter turn clockwise: a transpose followed by a horizontal flip.
    pub fn rotate_clockwise(&self) -> Self {
        let mut out = self.transpose();
        out.flip_horizontal_in_place();
        out
    }

    /// A `width × height` grid keeping every cell inside both rectangles.
    ///
    /// Copies row by row, since a row's bit offset depends on the width.
    pub fn resize(&self, width: usize, height: usize) -> Self {
        let mut out = BitGrid::new(width, height);
        let copy_width = self.width().min(width);
        let copy_height = self.height().min(height);
        let row = Bitboard::low_bits(copy_width);
        for y in 0..copy_height {
            out.bits |= (self.bits.shift_right(y * self.width()) & row).shift_left(y * width);
        }
        out
    }

    /// Set cells in row-major order.
    pub fn iter_set(&self) -> Cells {
        Cells {
            inner: self.bits.iter_ones(),
            width: self.width(),
        }
    }

    /// Clear cells in row-major order.
    pub fn iter_clear(&self) -> Cells {
        Cells {
            inner: (!self.bits & self.geometry.board_mask).iter_ones(),
            width: self.width(),
        }
    }
}

impl fmt::Display for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", if self.get(x, y) { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over cell positions of a [`BitGrid`].
#[derive(Clone, Debug)]
pub struct Cells {
    inner: BitIterator,
    width: usize,
}

impl Iterator for Cells {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        self.inner
            .next()
            .map(|idx| Position::from_index(idx, self.width))
    }
}
