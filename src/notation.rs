use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{
    coord::{Coord, ParseCoordError, column_to_file, file_to_column, rank_to_row, row_to_rank},
    piece::{InvalidPieceLetter, PieceKind},
};

const CAPTURE: char = 'x';
const CHECK: char = '+';
const MATE: char = '#';
const PROMOTION: char = '=';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseNotationError {
    Empty,
    MissingDestinationFile,
    MissingDestinationRank,
    InvalidPiece(InvalidPieceLetter),
    InvalidPromotion(Option<char>),
    ParseCoordError(ParseCoordError),
    Unexpected(char),
}
impl From<ParseCoordError> for ParseNotationError {
    fn from(value: ParseCoordError) -> Self {
        ParseNotationError::ParseCoordError(value)
    }
}
impl From<InvalidPieceLetter> for ParseNotationError {
    fn from(value: InvalidPieceLetter) -> Self {
        ParseNotationError::InvalidPiece(value)
    }
}
impl Display for ParseNotationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseNotationError::Empty => write!(f, "no move was provided")?,
            ParseNotationError::MissingDestinationFile => {
                write!(f, "no destination file was found")?;
            }
            ParseNotationError::MissingDestinationRank => {
                write!(f, "no destination rank was found")?;
            }
            ParseNotationError::InvalidPiece(err) => write!(f, "{err}")?,
            ParseNotationError::InvalidPromotion(Some(c)) => write!(
                f,
                "found `{c}` after `=`, one of `N`, `B`, `R`, or `Q` was expected"
            )?,
            ParseNotationError::InvalidPromotion(None) => {
                write!(f, "`=` must be followed by the promoted piece")?;
            }
            ParseNotationError::ParseCoordError(err) => write!(f, "{err}")?,
            ParseNotationError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseNotationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseNotationError::InvalidPiece(err) => Some(err),
            ParseNotationError::ParseCoordError(err) => Some(err),
            _ => None,
        }
    }
}

/// Partial source square given to tell apart pieces that reach the same destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hint {
    pub column: Option<u8>,
    pub row: Option<u8>,
}
impl Hint {
    pub fn admits(self, position: Coord) -> bool {
        self.column.is_none_or(|column| column == position.x())
            && self.row.is_none_or(|row| row == position.y())
    }
    pub fn is_empty(self) -> bool {
        self.column.is_none() && self.row.is_none()
    }
}

/// Structural fields of a move written in algebraic notation, e.g. `Nbxd7+` or `e8=Q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notation {
    pub kind: PieceKind,
    pub hint: Hint,
    pub destination: Coord,
    pub capture: bool,
    pub check: bool,
    pub mate: bool,
    pub promotion: Option<PieceKind>,
}
impl FromStr for Notation {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut characters = s.chars().peekable();
        let kind = match characters.peek() {
            None => return Err(ParseNotationError::Empty),
            Some(c) if c.is_ascii_uppercase() => {
                let kind = PieceKind::from_letter(*c)?;
                characters.next();
                kind
            }
            Some(_) => PieceKind::Pawn,
        };
        let mut capture = false;
        let mut check = false;
        let mut mate = false;
        let mut promotion = None;
        let mut ranks = Vec::with_capacity(2);
        let mut files = Vec::with_capacity(2);
        while let Some(c) = characters.next() {
            match c {
                CAPTURE => capture = true,
                CHECK => check = true,
                MATE => mate = true,
                PROMOTION => {
                    let piece = characters.next();
                    let kind = piece
                        .and_then(|piece| PieceKind::from_letter(piece).ok())
                        .filter(|kind| kind.is_promotion_choice())
                        .ok_or(ParseNotationError::InvalidPromotion(piece))?;
                    promotion = Some(kind);
                }
                '0'..='9' => ranks.push(c),
                'a'..='z' => files.push(c),
                '!' | '?' => {}
                c => return Err(ParseNotationError::Unexpected(c)),
            }
        }
        // reading from the end, the first rank and file make the destination and the
        // second ones the disambiguation hint
        let mut ranks = ranks.into_iter().rev();
        let mut files = files.into_iter().rev();
        let destination_rank = ranks
            .next()
            .ok_or(ParseNotationError::MissingDestinationRank)?;
        let destination_file = files
            .next()
            .ok_or(ParseNotationError::MissingDestinationFile)?;
        let hint = Hint {
            column: files.next().map(file_to_column).transpose()?,
            row: ranks.next().map(rank_to_row).transpose()?,
        };
        if let Some(c) = ranks.next().or_else(|| files.next()) {
            return Err(ParseNotationError::Unexpected(c));
        }
        Ok(Notation {
            kind,
            hint,
            destination: Coord::from_chars(destination_file, destination_rank)?,
            capture,
            check,
            mate,
            promotion,
        })
    }
}
impl Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.kind != PieceKind::Pawn {
            write!(f, "{}", self.kind.uppercase())?;
        }
        if let Some(column) = self.hint.column {
            write!(f, "{}", column_to_file(column))?;
        }
        if let Some(row) = self.hint.row {
            write!(f, "{}", row_to_rank(row))?;
        }
        if self.capture {
            write!(f, "{CAPTURE}")?;
        }
        write!(f, "{}", self.destination)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{PROMOTION}{}", promotion.uppercase())?;
        }
        if self.mate {
            write!(f, "{MATE}")?;
        } else if self.check {
            write!(f, "{CHECK}")?;
        }
        Ok(())
    }
}
