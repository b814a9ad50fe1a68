use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::notation::ParseNotationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionError {
    NoCandidate,
    HintMismatch,
    Ambiguous,
}
impl Display for ResolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::NoCandidate => write!(f, "no such piece can reach the destination")?,
            ResolutionError::HintMismatch => {
                write!(f, "no piece on the given rank or file can reach the destination")?;
            }
            ResolutionError::Ambiguous => {
                write!(f, "more than one piece can reach the destination")?;
            }
        }
        Ok(())
    }
}
impl Error for ResolutionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryError {
    InvalidShape,
    PathBlocked,
    MissingPromotion,
    UnexpectedPromotion,
}
impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidShape => write!(f, "the piece does not move that way")?,
            GeometryError::PathBlocked => write!(f, "the path is blocked")?,
            GeometryError::MissingPromotion => {
                write!(f, "a pawn reaching the last rank must promote")?;
            }
            GeometryError::UnexpectedPromotion => {
                write!(f, "only a pawn reaching the last rank can promote")?;
            }
        }
        Ok(())
    }
}
impl Error for GeometryError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateError {
    CaptureOnEmptySquare,
    OwnPieceOnDestination,
    UndeclaredCapture,
}
impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StateError::CaptureOnEmptySquare => {
                write!(f, "capture declared but the destination is empty")?;
            }
            StateError::OwnPieceOnDestination => {
                write!(f, "the destination holds a piece of the same color")?;
            }
            StateError::UndeclaredCapture => {
                write!(f, "the move captures but no capture was declared")?;
            }
        }
        Ok(())
    }
}
impl Error for StateError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckError {
    UndeclaredCheck,
    DeclaredCheckWithoutCheck,
    SelfCheck,
    UnescapedCheck,
}
impl Display for CheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::UndeclaredCheck => write!(f, "the move gives check but it was not declared")?,
            CheckError::DeclaredCheckWithoutCheck => {
                write!(f, "check was declared but the move does not give check")?;
            }
            CheckError::SelfCheck => write!(f, "the move leaves its own king in check")?,
            CheckError::UnescapedCheck => write!(f, "the move does not escape the check")?,
        }
        Ok(())
    }
}
impl Error for CheckError {}

/// Why a move was refused. The board is never touched when a move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    Parse(ParseNotationError),
    Resolution(ResolutionError),
    Geometry(GeometryError),
    State(StateError),
    Check(CheckError),
}
impl From<ParseNotationError> for Rejection {
    fn from(value: ParseNotationError) -> Self {
        Rejection::Parse(value)
    }
}
impl From<ResolutionError> for Rejection {
    fn from(value: ResolutionError) -> Self {
        Rejection::Resolution(value)
    }
}
impl From<GeometryError> for Rejection {
    fn from(value: GeometryError) -> Self {
        Rejection::Geometry(value)
    }
}
impl From<StateError> for Rejection {
    fn from(value: StateError) -> Self {
        Rejection::State(value)
    }
}
impl From<CheckError> for Rejection {
    fn from(value: CheckError) -> Self {
        Rejection::Check(value)
    }
}
impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Parse(err) => write!(f, "{err}")?,
            Rejection::Resolution(err) => write!(f, "{err}")?,
            Rejection::Geometry(err) => write!(f, "{err}")?,
            Rejection::State(err) => write!(f, "{err}")?,
            Rejection::Check(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for Rejection {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Rejection::Parse(err) => Some(err),
            Rejection::Resolution(err) => Some(err),
            Rejection::Geometry(err) => Some(err),
            Rejection::State(err) => Some(err),
            Rejection::Check(err) => Some(err),
        }
    }
}
