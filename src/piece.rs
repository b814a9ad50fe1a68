use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{color::Color, coord::Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
/// How a piece kind travels: a set of unit steps, repeated while `sliding`.
///
/// Pawns have no entry, their moves depend on color, starting rank and capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub directions: &'static [Vector],
    pub sliding: bool,
}
impl PieceKind {
    pub const PROMOTION_CHOICES: [Self; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    // order in which kinds are probed when looking for a king's attacker
    pub const ATTACKERS: [Self; 6] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Pawn,
    ];
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn movement(self) -> Option<Movement> {
        let movement = match self {
            PieceKind::Pawn => return None,
            PieceKind::Knight => Movement {
                directions: &Vector::KNIGHT_MOVES,
                sliding: false,
            },
            PieceKind::Bishop => Movement {
                directions: &Vector::BISHOP_DIRECTIONS,
                sliding: true,
            },
            PieceKind::Rook => Movement {
                directions: &Vector::ROOK_DIRECTIONS,
                sliding: true,
            },
            PieceKind::Queen => Movement {
                directions: &Vector::QUEEN_DIRECTIONS,
                sliding: true,
            },
            PieceKind::King => Movement {
                directions: &Vector::KING_MOVES,
                sliding: false,
            },
        };
        Some(movement)
    }
    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTION_CHOICES.contains(&self)
    }
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
    pub fn from_letter(c: char) -> Result<Self, InvalidPieceLetter> {
        let piece = match c {
            'p' | 'P' => PieceKind::Pawn,
            'n' | 'N' => PieceKind::Knight,
            'b' | 'B' => PieceKind::Bishop,
            'r' | 'R' => PieceKind::Rook,
            'q' | 'Q' => PieceKind::Queen,
            'k' | 'K' => PieceKind::King,
            c => return Err(InvalidPieceLetter(c)),
        };
        Ok(piece)
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}

/// Content of an occupied board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}
impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
    pub fn marker(self) -> char {
        self.color.cased(self.kind.uppercase())
    }
    pub fn from_marker(c: char) -> Result<Self, InvalidPieceLetter> {
        let kind = PieceKind::from_letter(c)?;
        Ok(Piece::new(Color::of_marker(c), kind))
    }
    pub fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidPieceLetter(pub char);
impl Display for InvalidPieceLetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found `{}`, expected one of `p`, `n`, `b`, `r`, `k`, `q`, or uppercase forms of these letters",
            self.0
        )?;
        Ok(())
    }
}
impl Error for InvalidPieceLetter {}
