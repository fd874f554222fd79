/// A cell coordinate; `x` is the column, `y` the row (row 0 at the top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Position {
            x: index % width,
            y: index / width,
        }
    }

    pub fn is_valid(&self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
