use std::ops::{Index, IndexMut};

use crate::{
    board_display::IndexableBoard,
    color::Color,
    coord::{Coord, SIZE, pawn_home_rank},
    piece::{Piece, PieceKind},
};

const LEN: usize = SIZE as usize;

/// Grid of cells, row 0 is rank 8 and column 0 is file a.
///
/// The board is plain data: it is `Copy`, so a what-if position is a copy away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([[Option<Piece>; LEN]; LEN]);

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let home = match color {
                Color::White => SIZE - 1,
                Color::Black => 0,
            };
            for (x, kind) in (0..).zip(PieceKind::STARTING_CONFIGURATION) {
                board[Coord::new(x, home)] = Some(Piece::new(color, kind));
                board[Coord::new(x, pawn_home_rank(color))] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; LEN]> {
        self.0.iter()
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|position| self[position].map(|piece| (position, piece)))
    }
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
    pub fn is_empty(&self, position: Coord) -> bool {
        self[position].is_none()
    }
    pub fn holds(&self, position: Coord, piece: Piece) -> bool {
        self[position] == Some(piece)
    }
    pub fn find(&self, piece: Piece) -> Option<Coord> {
        Coord::all().find(|position| self.holds(*position, piece))
    }
    pub fn king(&self, color: Color) -> Option<Coord> {
        self.find(Piece::new(color, PieceKind::King))
    }
}
impl Index<Coord> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.0[index.y() as usize][index.x() as usize]
    }
}
impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.0[index.y() as usize][index.x() as usize]
    }
}
impl IndexableBoard for Board {
    fn index(&self, position: Coord) -> Option<Piece> {
        self[position]
    }
}
impl IndexableBoard for &Board {
    fn index(&self, position: Coord) -> Option<Piece> {
        self[position]
    }
}
