use std::fmt::{self, Display, Formatter};

use crate::{
    board::Board,
    color::Color,
    coord::Coord,
    error::Rejection,
    notation::{Hint, Notation},
    piece::{Piece, PieceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Legality {
    Pending,
    Legal,
    /// Terminal, carries the first reason found.
    Illegal(Rejection),
}

/// A proposed move as it travels through resolution and validation.
///
/// Only the candidate resolver writes `source` and `alternatives`; whenever `source` is set
/// it holds the mover's piece of the declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveDescriptor {
    pub mover: Color,
    pub kind: PieceKind,
    pub hint: Hint,
    pub destination: Coord,
    /// Destination content before the move.
    pub occupant: Option<Piece>,
    pub capture: bool,
    pub check: bool,
    pub mate: bool,
    pub promotion: Option<PieceKind>,
    pub(crate) source: Option<Coord>,
    pub(crate) alternatives: Vec<Coord>,
    pub(crate) attack_probe: bool,
    legality: Legality,
}
impl MoveDescriptor {
    pub fn new(board: &Board, notation: Notation, mover: Color) -> Self {
        MoveDescriptor {
            mover,
            kind: notation.kind,
            hint: notation.hint,
            destination: notation.destination,
            occupant: board[notation.destination],
            capture: notation.capture,
            check: notation.check,
            mate: notation.mate,
            promotion: notation.promotion,
            source: None,
            alternatives: Vec::new(),
            attack_probe: false,
            legality: Legality::Pending,
        }
    }
    /// Hypothetical capture of `target` by any `kind` piece of `attacker`.
    pub(crate) fn attack_probe(
        board: &Board,
        attacker: Color,
        kind: PieceKind,
        target: Coord,
    ) -> Self {
        MoveDescriptor {
            mover: attacker,
            kind,
            hint: Hint::default(),
            destination: target,
            occupant: board[target],
            capture: true,
            check: false,
            mate: false,
            promotion: None,
            source: None,
            alternatives: Vec::new(),
            attack_probe: true,
            legality: Legality::Pending,
        }
    }
    pub fn source(&self) -> Option<Coord> {
        self.source
    }
    /// Other sources that also passed resolution, in scan order.
    pub fn alternatives(&self) -> &[Coord] {
        &self.alternatives
    }
    pub fn legality(&self) -> Legality {
        self.legality
    }
    pub fn is_legal(&self) -> bool {
        self.legality == Legality::Legal
    }
    pub fn rejection(&self) -> Option<Rejection> {
        match self.legality {
            Legality::Illegal(rejection) => Some(rejection),
            Legality::Pending | Legality::Legal => None,
        }
    }
    pub fn declares_check(&self) -> bool {
        self.check || self.mate
    }
    /// Piece that moves.
    pub fn piece(&self) -> Piece {
        Piece::new(self.mover, self.kind)
    }
    /// Piece that ends up on the destination.
    pub fn placed(&self) -> Piece {
        Piece::new(self.mover, self.promotion.unwrap_or(self.kind))
    }
    pub(crate) fn approve(&mut self) {
        if self.legality == Legality::Pending {
            self.legality = Legality::Legal;
        }
    }
    pub(crate) fn reject(&mut self, rejection: impl Into<Rejection>) {
        if !matches!(self.legality, Legality::Illegal(_)) {
            self.legality = Legality::Illegal(rejection.into());
        }
    }
    pub(crate) fn into_result(self) -> Result<Self, Rejection> {
        match self.legality {
            Legality::Illegal(rejection) => Err(rejection),
            Legality::Pending | Legality::Legal => Ok(self),
        }
    }
}
impl Display for MoveDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mover, self.kind)?;
        if let Some(source) = self.source {
            write!(f, " from {source}")?;
        }
        write!(f, " to {}", self.destination)?;
        if let Some(promotion) = self.promotion {
            write!(f, " promoting to {promotion}")?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        coord,
        descriptor::{Legality, MoveDescriptor},
        error::{CheckError, GeometryError, Rejection},
        piece::{Piece, PieceKind},
    };

    #[test]
    fn illegal_is_terminal() {
        let board = Board::starting_position();
        let mut descriptor =
            MoveDescriptor::new(&board, "e4".parse().unwrap(), Color::White);
        assert_eq!(descriptor.legality(), Legality::Pending);
        descriptor.reject(GeometryError::PathBlocked);
        descriptor.approve();
        descriptor.reject(CheckError::SelfCheck);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Geometry(GeometryError::PathBlocked))
        );
        assert!(!descriptor.is_legal());
    }
    #[test]
    fn promotion_changes_placed_piece() {
        let board = Board::empty();
        let descriptor = MoveDescriptor::new(&board, "a1=N".parse().unwrap(), Color::Black);
        assert_eq!(descriptor.piece(), Piece::new(Color::Black, PieceKind::Pawn));
        assert_eq!(descriptor.placed(), Piece::new(Color::Black, PieceKind::Knight));
        assert_eq!(descriptor.destination, coord!("a1"));
        assert_eq!(descriptor.occupant, None);
    }
}
