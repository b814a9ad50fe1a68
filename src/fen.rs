use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    iter::{Peekable, once, repeat},
    str::FromStr,
};

use crate::{
    board::Board,
    coord::{Coord, SIZE},
    piece::{InvalidPieceLetter, Piece},
};

/// Piece placement field of a FEN record: rows from rank 8 down to rank 1 separated by `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement(pub Board);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePlacementError {
    NotEnoughSquaresOnRow,
    ExceedingSquaresOnRow,
    TooManyRows,
    UnexpectedChar(char),
    UnexpectedEol,
}
impl From<InvalidPieceLetter> for ParsePlacementError {
    fn from(value: InvalidPieceLetter) -> Self {
        ParsePlacementError::UnexpectedChar(value.0)
    }
}
impl Display for ParsePlacementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePlacementError::NotEnoughSquaresOnRow => {
                write!(f, "a row describes less than 8 squares")?;
            }
            ParsePlacementError::ExceedingSquaresOnRow => {
                write!(f, "a row describes more than 8 squares")?;
            }
            ParsePlacementError::TooManyRows => write!(f, "found more than 8 rows")?,
            ParsePlacementError::UnexpectedChar(c) => write!(f, "unexpected `{c}`")?,
            ParsePlacementError::UnexpectedEol => write!(f, "unexpected end of input")?,
        }
        Ok(())
    }
}
impl Error for ParsePlacementError {}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // anything after the placement field (side to move, castling...) is ignored
        let placement = s.split_whitespace().next().unwrap_or_default();
        let mut characters = placement.chars();
        let mut board = Board::empty();

        let mut x: u8 = 0;
        let mut y: u8 = 0;
        while x < SIZE || y < SIZE - 1 {
            let Some(c) = characters.next() else {
                return Err(ParsePlacementError::UnexpectedEol);
            };
            if c == '/' {
                if x == SIZE {
                    x = 0;
                    y += 1;
                } else {
                    return Err(ParsePlacementError::NotEnoughSquaresOnRow);
                }
            } else if let Some(empty) = c.to_digit(10).filter(|digit| (1..=8).contains(digit)) {
                x += empty as u8;
                if x > SIZE {
                    return Err(ParsePlacementError::ExceedingSquaresOnRow);
                }
            } else {
                if x >= SIZE {
                    return Err(ParsePlacementError::ExceedingSquaresOnRow);
                }
                board[Coord::new(x, y)] = Some(Piece::from_marker(c)?);
                x += 1;
            }
        }
        match characters.next() {
            None => Ok(Placement(board)),
            Some('/') => Err(ParsePlacementError::TooManyRows),
            Some(c) if c.is_ascii_alphanumeric() => Err(ParsePlacementError::ExceedingSquaresOnRow),
            Some(c) => Err(ParsePlacementError::UnexpectedChar(c)),
        }
    }
}
impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, first) in self.0.rows().zip(once(true).chain(repeat(false))) {
            if !first {
                write!(f, "/")?;
            }
            for cell in CellIter(row.iter().copied().peekable()) {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Cell {
    Piece(Piece),
    Space(u8),
}
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Piece(piece) => write!(f, "{}", piece.marker())?,
            Cell::Space(space) => write!(f, "{space}")?,
        }
        Ok(())
    }
}
struct CellIter<T>(Peekable<T>)
where
    T: Iterator;

impl<T> Iterator for CellIter<T>
where
    T: Iterator<Item = Option<Piece>>,
{
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|piece| match piece {
            Some(piece) => Cell::Piece(piece),
            None => {
                let mut count = 1;
                while self.0.peek().is_some_and(Option::is_none) {
                    self.0.next();
                    count += 1;
                }
                Cell::Space(count)
            }
        })
    }
}
