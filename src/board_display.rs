use std::fmt::{self, Display, Formatter};

use crate::{
    color::Color,
    coord::{Coord, SIZE, column_to_file, row_to_rank},
    piece::Piece,
};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

pub trait IndexableBoard {
    fn index(&self, position: Coord) -> Option<Piece>;
}

/// Colored figurine rendering with an optional column of info text on the right.
pub struct BoardDisplay<'a, 'b, T> {
    pub board: T,
    pub view: Color,
    pub highlighted: &'a [Coord],
    pub info: &'b str,
}
impl<T> BoardDisplay<'_, '_, T> {
    pub fn new(board: T) -> Self {
        BoardDisplay {
            board,
            view: Color::White,
            highlighted: &[],
            info: "",
        }
    }
}
fn oriented(view: Color, index: u8) -> u8 {
    match view {
        Color::White => index,
        Color::Black => SIZE - 1 - index,
    }
}
impl<T> Display for BoardDisplay<'_, '_, T>
where
    T: IndexableBoard,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for y in 0..SIZE {
            let y = oriented(self.view, y);
            for x in 0..SIZE {
                let position = Coord::new(oriented(self.view, x), y);
                let color = if self.highlighted.contains(&position) {
                    HIGHLIGHTED
                } else {
                    match position.color() {
                        Color::White => WHITE,
                        Color::Black => BLACK,
                    }
                };
                let figurine = self
                    .board
                    .index(position)
                    .map_or(' ', Piece::figurine);
                write!(f, "{color}{figurine} {RESET}")?;
            }
            write!(f, "{}", row_to_rank(y))?;
            if let Some(line) = lines.next() {
                write!(f, " {line}")?;
            }
            writeln!(f)?;
        }
        for x in 0..SIZE {
            if x != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", column_to_file(oriented(self.view, x)))?;
        }
        if let Some(line) = lines.next() {
            write!(f, "   {line}")?;
        }
        writeln!(f)?;
        for line in lines {
            writeln!(f, "                  {line}")?;
        }
        Ok(())
    }
}

/// Framed ASCII rendering using the placement markers, e.g. `8 |r|n|b|q|k|b|n|r| 8`.
pub struct PlainBoardDisplay<T>(pub T);

impl<T> PlainBoardDisplay<T> {
    fn columns(f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "* |")?;
        for x in 0..SIZE {
            if x != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", column_to_file(x).to_ascii_uppercase())?;
        }
        writeln!(f, "| *")?;
        Ok(())
    }
    fn spacers(f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "* -")?;
        for _ in 0..SIZE {
            write!(f, "--")?;
        }
        writeln!(f, " *")?;
        Ok(())
    }
}
impl<T> Display for PlainBoardDisplay<T>
where
    T: IndexableBoard,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::columns(f)?;
        Self::spacers(f)?;
        for y in 0..SIZE {
            let rank = row_to_rank(y);
            write!(f, "{rank} ")?;
            for x in 0..SIZE {
                let marker = self.0.index(Coord::new(x, y)).map_or(' ', Piece::marker);
                write!(f, "|{marker}")?;
            }
            writeln!(f, "| {rank}")?;
        }
        Self::spacers(f)?;
        Self::columns(f)?;
        Ok(())
    }
}
