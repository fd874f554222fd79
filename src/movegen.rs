use crate::board::Board;
use crate::position::Position;

/// Lazy enumeration of the boards reachable by one placement.
///
/// Order: pieces in slice order; for each piece its rotations by 0, 90, 180
/// and 270 degrees clockwise; for each rotation every corner cell of the
/// board, row-major; for each of those every corner cell of the rotated
/// piece, row-major. Each pairing is tried on a fresh copy of the board and
/// the copy is yielded if the placement succeeds.
///
/// A piece's corner marks sit one cell outside its filled cells, so the
/// piece corner `(px, py)` is aligned through the reference cell
/// `(px + 1, py + 1)`. This offset is part of the piece encoding, not derived
/// from the piece's shape.
///
/// The output is not deduplicated: different pairings, and symmetric
/// rotations, often produce equal boards. Mirror images are never generated.
/// Work is done only as items are pulled.
pub struct Moves<'a> {
    board: &'a Board,
    pieces: std::slice::Iter<'a, Board>,
    board_corners: Vec<Position>,
    /// Current rotation of the current piece and its corner cells.
    piece: Option<Board>,
    piece_corners: Vec<Position>,
    rotation: u8,
    board_corner: usize,
    piece_corner: usize,
}

impl<'a> Moves<'a> {
    pub(crate) fn new(board: &'a Board, polyominoes: &'a [Board]) -> Self {
        Moves {
            board,
            pieces: polyominoes.iter(),
            board_corners: board.corners().collect(),
            piece: None,
            piece_corners: Vec::new(),
            rotation: 0,
            board_corner: 0,
            piece_corner: 0,
        }
    }

    fn load_piece(&mut self, piece: Board) {
        self.piece_corners.clear();
        self.piece_corners.extend(piece.corners());
        self.piece = Some(piece);
        self.board_corner = 0;
        self.piece_corner = 0;
    }

    /// Advance to the next rotation, or the next piece after the last
    /// rotation. Returns false once every piece is exhausted.
    fn advance_piece(&mut self) -> bool {
        if let Some(piece) = &self.piece {
            if self.rotation < 3 {
                let rotated = piece.rotate_clockwise();
                self.rotation += 1;
                self.load_piece(rotated);
                return true;
            }
        }
        match self.pieces.next() {
            Some(next) => {
                self.rotation = 0;
                self.load_piece(*next);
                true
            }
            None => {
                self.piece = None;
                false
            }
        }
    }
}

impl Iterator for Moves<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        loop {
            if let Some(piece) = &self.piece {
                while self.board_corner < self.board_corners.len() {
                    let anchor = self.board_corners[self.board_corner];
                    while self.piece_corner < self.piece_corners.len() {
                        let reference = self.piece_corners[self.piece_corner];
                        self.piece_corner += 1;

                        let mut child = *self.board;
                        let placed = child.try_place_polyomino(
                            anchor.x,
                            anchor.y,
                            piece,
                            reference.x as isize + 1,
                            reference.y as isize + 1,
                        );
                        if placed.is_placed() {
                            return Some(child);
                        }
                    }
                    self.piece_corner = 0;
                    self.board_corner += 1;
                }
            }
            if !self.advance_piece() {
                return None;
            }
        }
    }
}
