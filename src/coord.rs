use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    num::NonZero,
    ops::{Mul, Neg, Sub},
    str::FromStr,
};

use crate::color::Color;

/// Number of ranks and files.
pub const SIZE: u8 = 8;

#[cfg(test)]
#[macro_export]
macro_rules! coord {
    ($square:literal) => {
        $square.parse::<$crate::coord::Coord>().unwrap()
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    InvalidFile(char),
    InvalidRank(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::InvalidFile(file) => write!(
                f,
                "found `{file}`, characters from `a` to `h` were expected instead"
            )?,
            ParseCoordError::InvalidRank(rank) => write!(
                f,
                "found `{rank}`, characters from `1` to `8` were expected instead"
            )?,
            ParseCoordError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParseCoordError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseCoordError {}

/// Row index of a rank digit, counted from the top of the board: `'8'` is row 0.
pub fn rank_to_row(rank: char) -> Result<u8, ParseCoordError> {
    match rank.to_digit(10) {
        Some(digit @ 1..=8) => Ok(SIZE - digit as u8),
        _ => Err(ParseCoordError::InvalidRank(rank)),
    }
}
/// Column index of a file letter: `'a'` is column 0.
pub fn file_to_column(file: char) -> Result<u8, ParseCoordError> {
    match file {
        'a'..='h' => Ok(file as u8 - b'a'),
        _ => Err(ParseCoordError::InvalidFile(file)),
    }
}
pub fn row_to_rank(row: u8) -> char {
    debug_assert!(row < SIZE);
    (b'0' + SIZE - row) as char
}
pub fn column_to_file(column: u8) -> char {
    debug_assert!(column < SIZE);
    (b'a' + column) as char
}

// Bit structure: 10XXXYYY
// first two bits is always `10` for `NonZero` size optimizations
// X is the column, Y is the row counted from rank 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(NonZero<u8>);

impl Coord {
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < SIZE);
        debug_assert!(y < SIZE);
        let byte = 0b1000_0000 | ((x & 0b111) << 3) | (y & 0b111);
        match NonZero::new(byte) {
            Some(byte) => Coord(byte),
            None => unreachable!(),
        }
    }
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParseCoordError> {
        Ok(Coord::new(file_to_column(file)?, rank_to_row(rank)?))
    }
    pub fn new_checked(x: u8, y: u8) -> Option<Self> {
        if x >= SIZE || y >= SIZE {
            None
        } else {
            Some(Self::new(x, y))
        }
    }
    pub fn x(self) -> u8 {
        (self.0.get() >> 3) & 0b_111
    }
    pub fn y(self) -> u8 {
        self.0.get() & 0b_111
    }
    pub fn file(self) -> char {
        column_to_file(self.x())
    }
    pub fn rank(self) -> char {
        row_to_rank(self.y())
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Coord::new(x, y)))
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new_checked(
            self.x().checked_add_signed(movement.x)?,
            self.y().checked_add_signed(movement.y)?,
        )
    }
    pub fn line(self, direction: Vector, start: i8) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (start..).map_while(move |difference| self.move_by(direction * difference))
    }
    pub fn line_exclusive(self, direction: Vector) -> impl Iterator<Item = Self> {
        self.line(direction, 1)
    }
    /// Squares strictly between `self` and `end` walking along `direction`.
    pub fn line_exclusive_exclusive(
        self,
        end: Coord,
        direction: Vector,
    ) -> impl Iterator<Item = Self> {
        self.line_exclusive(direction)
            .take_while(move |position| *position != end)
    }
    pub fn color(self) -> Color {
        if (self.x() + self.y()) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}
pub fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => SIZE - 2,
        Color::Black => 1,
    }
}
pub fn pawn_promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => SIZE - 1,
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(file) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(0));
        };
        let Some(rank) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        Coord::from_chars(file, rank)
    }
}
impl Sub<Self> for Coord {
    type Output = Vector;

    #[allow(
        clippy::cast_possible_wrap,
        reason = "both components are below 8 and fit in an i8"
    )]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            x: self.x() as i8 - rhs.x() as i8,
            y: self.y() as i8 - rhs.y() as i8,
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { x: 0, y: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { x: -1, y: -2 },
        Vector { x: 1, y: -2 },
        Vector { x: -1, y: 2 },
        Vector { x: 1, y: 2 },
        Vector { x: -2, y: -1 },
        Vector { x: 2, y: -1 },
        Vector { x: -2, y: 1 },
        Vector { x: 2, y: 1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { x: -1, y: -1 },
        Vector { x: 0, y: -1 },
        Vector { x: 1, y: -1 },
        Vector { x: -1, y: 0 },
        Vector { x: 1, y: 0 },
        Vector { x: -1, y: 1 },
        Vector { x: 0, y: 1 },
        Vector { x: 1, y: 1 },
    ];
    // the row comes before the column
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { x: -1, y: 0 },
        Vector { x: 1, y: 0 },
        Vector { x: 0, y: -1 },
        Vector { x: 0, y: 1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { x: -1, y: -1 },
        Vector { x: 1, y: -1 },
        Vector { x: -1, y: 1 },
        Vector { x: 1, y: 1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = [
        Vector { x: -1, y: 0 },
        Vector { x: 1, y: 0 },
        Vector { x: 0, y: -1 },
        Vector { x: 0, y: 1 },
        Vector { x: -1, y: -1 },
        Vector { x: 1, y: -1 },
        Vector { x: -1, y: 1 },
        Vector { x: 1, y: 1 },
    ];

    pub fn pawn_single_move(color: Color) -> Self {
        Vector {
            x: 0,
            y: pawn_direction(color),
        }
    }
    pub fn pawn_double_move(color: Color) -> Self {
        Vector::pawn_single_move(color) * 2
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|x| Vector {
            x,
            y: pawn_direction(color),
        })
    }
    /// Whether `self` points the same way as the unit vector `direction`.
    pub fn is_aligned(self, direction: Self) -> bool {
        self != Vector::ZERO
            && self.as_unit() == direction
            && self.x * direction.y == direction.x * self.y
    }
    pub fn as_unit(self) -> Self {
        Vector {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }
}
pub fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
