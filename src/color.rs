use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Self; 2] = [Color::White, Color::Black];

    /// Color encoded by the case of a board marker: uppercase is white.
    pub fn of_marker(marker: char) -> Self {
        if marker.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        }
    }
    pub fn cased(self, marker: char) -> char {
        match self {
            Color::White => marker.to_ascii_uppercase(),
            Color::Black => marker.to_ascii_lowercase(),
        }
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white")?,
            Color::Black => write!(f, "black")?,
        }
        Ok(())
    }
}
impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
