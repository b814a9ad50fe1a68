use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use chess::{ALL_SQUARES, BoardStatus, ChessMove, MoveGen};
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    board_display::PlainBoardDisplay,
    color::Color,
    coord::Coord,
    engine::make_move,
    error::Rejection,
    fen::Placement,
    piece::{Piece, PieceKind},
    threat::is_king_in_check,
};

const PLIES_PER_GAME: u32 = 200;
const PROBES_PER_POSITION: u32 = 4;

impl From<chess::Piece> for PieceKind {
    fn from(value: chess::Piece) -> Self {
        match value {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        }
    }
}
impl From<chess::Color> for Color {
    fn from(value: chess::Color) -> Self {
        match value {
            chess::Color::White => Color::White,
            chess::Color::Black => Color::Black,
        }
    }
}
impl From<chess::Square> for Coord {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "file and rank indices are below 8"
    )]
    fn from(value: chess::Square) -> Self {
        Coord::new(
            value.get_file().to_index() as u8,
            7 - value.get_rank().to_index() as u8,
        )
    }
}
fn to_board(reference: &chess::Board) -> Board {
    let mut board = Board::empty();
    for square in ALL_SQUARES {
        if let (Some(kind), Some(color)) = (reference.piece_on(square), reference.color_on(square))
        {
            board[Coord::from(square)] = Some(Piece::new(color.into(), kind.into()));
        }
    }
    board
}
/// Castling and en passant are outside what the arbiter plays.
fn is_special(reference: &chess::Board, movement: ChessMove) -> bool {
    let source = movement.get_source();
    let destination = movement.get_dest();
    let file_distance = source
        .get_file()
        .to_index()
        .abs_diff(destination.get_file().to_index());
    match reference.piece_on(source) {
        Some(chess::Piece::King) => file_distance == 2,
        Some(chess::Piece::Pawn) => file_distance == 1 && reference.piece_on(destination).is_none(),
        _ => false,
    }
}
/// Fully disambiguated notation of a move, e.g. `Ng1f3`, `e4xd5`, `b7b8=Q+`.
///
/// Check and mate suffixes are only written for `after`, the position the move leads to.
fn render(reference: &chess::Board, movement: ChessMove, after: Option<&chess::Board>) -> String {
    let piece = match reference.piece_on(movement.get_source()).map(PieceKind::from) {
        Some(PieceKind::Pawn) | None => String::new(),
        Some(kind) => kind.uppercase().to_string(),
    };
    let capture = if reference.piece_on(movement.get_dest()).is_some() {
        "x"
    } else {
        ""
    };
    let promotion = match movement.get_promotion() {
        Some(kind) => format!("={}", PieceKind::from(kind).uppercase()),
        None => String::new(),
    };
    let suffix = match after {
        Some(after) if after.status() == BoardStatus::Checkmate => "#",
        Some(after) if after.checkers().popcnt() > 0 => "+",
        _ => "",
    };
    format!(
        "{piece}{}{capture}{}{promotion}{suffix}",
        Coord::from(movement.get_source()),
        Coord::from(movement.get_dest()),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscrepancyKind {
    LegalMoveRefused(Rejection),
    IllegalMoveAccepted,
    PlacementDiffers(Board),
    CheckDiffers { expected: bool },
}
/// A position where the arbiter and the reference move generator disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    pub board: Board,
    pub mover: Color,
    pub text: String,
    pub kind: DiscrepancyKind,
}
impl Display for Discrepancy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiscrepancyKind::LegalMoveRefused(rejection) => {
                writeln!(f, "{} was refused: {rejection}", self.text)?;
            }
            DiscrepancyKind::IllegalMoveAccepted => {
                writeln!(f, "{} is illegal but was accepted", self.text)?;
            }
            DiscrepancyKind::PlacementDiffers(board) => {
                writeln!(f, "{} led to {}", self.text, Placement(*board))?;
            }
            DiscrepancyKind::CheckDiffers { expected } => {
                writeln!(f, "{} king in check: expected {expected}", self.mover)?;
            }
        }
        writeln!(f, "{} to move in {}", self.mover, Placement(self.board))?;
        write!(f, "{}", PlainBoardDisplay(&self.board))?;
        Ok(())
    }
}
impl Error for Discrepancy {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub positions: u64,
    pub games: u64,
    pub distinct_moves: usize,
    pub probes_refused: u64,
}
impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} positions over {} games, {} distinct moves accepted, {} illegal probes refused",
            self.positions, self.games, self.distinct_moves, self.probes_refused
        )?;
        Ok(())
    }
}

/// Plays random games with the `chess` crate as reference and checks the arbiter agrees on
/// every move played, on random illegal probes, and on whether the mover is in check.
pub fn fuzz(iterations: u64, seed: Option<u64>) -> Result<Report, Discrepancy> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut accepted = FxHashSet::default();
    let mut report = Report::default();
    let mut reference = chess::Board::default();
    let mut plies = 0;
    while report.positions < iterations {
        let board = to_board(&reference);
        let mover = Color::from(reference.side_to_move());
        let discrepancy = |text: String, kind| Discrepancy {
            board,
            mover,
            text,
            kind,
        };
        report.positions += 1;
        let expected = reference.checkers().popcnt() > 0;
        if is_king_in_check(&board, mover) != expected {
            let kind = DiscrepancyKind::CheckDiffers { expected };
            return Err(discrepancy(String::new(), kind));
        }
        let moves: Vec<_> = MoveGen::new_legal(&reference)
            .filter(|movement| !is_special(&reference, *movement))
            .collect();
        let own: Vec<_> = ALL_SQUARES
            .into_iter()
            .filter(|square| reference.color_on(*square) == Some(reference.side_to_move()))
            .collect();
        for _ in 0..PROBES_PER_POSITION {
            let Some(source) = pick(&mut rng, own.iter().copied()) else {
                break;
            };
            let destination = ALL_SQUARES[rng.random_range(0..ALL_SQUARES.len())];
            let promotion = (reference.piece_on(source) == Some(chess::Piece::Pawn)
                && matches!(destination.get_rank(), chess::Rank::First | chess::Rank::Eighth))
            .then_some(chess::Piece::Queen);
            let probe = ChessMove::new(source, destination, promotion);
            if source == destination || moves.contains(&probe) || is_special(&reference, probe) {
                continue;
            }
            let text = render(&reference, probe, None);
            let mut copy = board;
            if make_move(&mut copy, &text, mover).is_ok() {
                return Err(discrepancy(text, DiscrepancyKind::IllegalMoveAccepted));
            }
            report.probes_refused += 1;
        }
        let Some(movement) = pick(&mut rng, moves.iter().copied()) else {
            debug!("restarting after {plies} plies");
            reference = chess::Board::default();
            plies = 0;
            report.games += 1;
            continue;
        };
        let after = reference.make_move_new(movement);
        let text = render(&reference, movement, Some(&after));
        let mut played = board;
        if let Err(rejection) = make_move(&mut played, &text, mover) {
            return Err(discrepancy(text, DiscrepancyKind::LegalMoveRefused(rejection)));
        }
        if played != to_board(&after) {
            return Err(discrepancy(text, DiscrepancyKind::PlacementDiffers(played)));
        }
        accepted.insert(text);
        plies += 1;
        if plies >= PLIES_PER_GAME {
            reference = chess::Board::default();
            plies = 0;
            report.games += 1;
        } else {
            reference = after;
        }
    }
    report.distinct_moves = accepted.len();
    info!("{report}");
    Ok(report)
}
fn pick<T>(rng: &mut SmallRng, items: impl Iterator<Item = T>) -> Option<T> {
    let items: Vec<_> = items.collect();
    if items.is_empty() {
        None
    } else {
        let index = rng.random_range(0..items.len());
        items.into_iter().nth(index)
    }
}
