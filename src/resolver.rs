use log::{debug, trace};

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, SIZE, Vector},
    descriptor::MoveDescriptor,
    error::{Rejection, ResolutionError},
    movement::validate,
    piece::PieceKind,
};

/// Squares a `kind` piece of `color` could come from to land on `destination`, in the order
/// they are tried.
///
/// The scan is coarse: every square is only a possibility, the movement validator decides.
pub fn scan(kind: PieceKind, color: Color, destination: Coord) -> Box<dyn Iterator<Item = Coord>> {
    match kind {
        PieceKind::Pawn => {
            let back = -Vector::pawn_single_move(color);
            Box::new(
                [back, back * 2]
                    .into_iter()
                    .chain(Vector::pawn_attacks(color).map(|attack| -attack))
                    .filter_map(move |movement| destination.move_by(movement)),
            )
        }
        PieceKind::Knight => Box::new(
            Vector::KNIGHT_MOVES
                .into_iter()
                .filter_map(move |movement| destination.move_by(movement)),
        ),
        PieceKind::King => Box::new(
            Vector::KING_MOVES
                .into_iter()
                .filter_map(move |movement| destination.move_by(movement)),
        ),
        PieceKind::Bishop => Box::new(diagonals(destination)),
        PieceKind::Rook => Box::new(row_and_column(destination)),
        PieceKind::Queen => Box::new(row_and_column(destination).chain(diagonals(destination))),
    }
}
fn row_and_column(destination: Coord) -> impl Iterator<Item = Coord> {
    let row = (0..SIZE).map(move |x| Coord::new(x, destination.y()));
    let column = (0..SIZE).map(move |y| Coord::new(destination.x(), y));
    row.chain(column)
        .filter(move |position| *position != destination)
}
fn diagonals(destination: Coord) -> impl Iterator<Item = Coord> {
    Vector::BISHOP_DIRECTIONS
        .into_iter()
        .flat_map(move |direction| destination.line_exclusive(direction))
}

/// One piece found on a scanned square, with the verdict on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub position: Coord,
    pub verdict: Result<(), Rejection>,
}
impl Candidate {
    pub fn is_accepted(self) -> bool {
        self.verdict.is_ok()
    }
}

/// Lazily validates every scanned square holding the mover's piece.
pub fn candidates<'a>(
    board: &'a Board,
    descriptor: &'a MoveDescriptor,
) -> impl Iterator<Item = Candidate> + 'a {
    let piece = descriptor.piece();
    scan(descriptor.kind, descriptor.mover, descriptor.destination)
        .filter(move |position| board.holds(*position, piece))
        .map(move |position| {
            let verdict = validate(board, descriptor, position).and_then(|()| {
                if descriptor.hint.admits(position) {
                    Ok(())
                } else {
                    Err(ResolutionError::HintMismatch.into())
                }
            });
            trace!("{piece} on {position}: {verdict:?}");
            Candidate { position, verdict }
        })
}
/// First accepted source, without looking at the remaining squares.
pub fn first_candidate(board: &Board, descriptor: &MoveDescriptor) -> Option<Coord> {
    candidates(board, descriptor)
        .find(|candidate| candidate.is_accepted())
        .map(|candidate| candidate.position)
}
/// Finds the source square of the move. Every accepted candidate is kept: the first one is
/// the source and the others are its alternatives.
pub fn resolve(board: &Board, mut descriptor: MoveDescriptor) -> MoveDescriptor {
    if descriptor.rejection().is_some() {
        return descriptor;
    }
    let mut accepted = Vec::new();
    let mut hint_mismatch = false;
    let mut first_rejection = None;
    for candidate in candidates(board, &descriptor) {
        match candidate.verdict {
            Ok(()) => accepted.push(candidate.position),
            Err(Rejection::Resolution(ResolutionError::HintMismatch)) => hint_mismatch = true,
            Err(rejection) => {
                first_rejection.get_or_insert(rejection);
            }
        }
    }
    let mut accepted = accepted.into_iter();
    if let Some(source) = accepted.next() {
        descriptor.source = Some(source);
        descriptor.alternatives = accepted.collect();
        debug!(
            "resolved {descriptor} with {} alternatives",
            descriptor.alternatives.len()
        );
        descriptor.approve();
    } else {
        let rejection = if hint_mismatch {
            ResolutionError::HintMismatch.into()
        } else {
            first_rejection.unwrap_or(ResolutionError::NoCandidate.into())
        };
        debug!("no source for {descriptor}: {rejection}");
        descriptor.reject(rejection);
    }
    descriptor
}
/// Commits to `source` among the accepted candidates.
pub(crate) fn settle(descriptor: &mut MoveDescriptor, source: Coord) {
    debug_assert!(
        descriptor.source == Some(source) || descriptor.alternatives.contains(&source)
    );
    descriptor.source = Some(source);
    descriptor.alternatives.clear();
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        coord,
        coord::Coord,
        descriptor::MoveDescriptor,
        error::{GeometryError, Rejection, ResolutionError, StateError},
        fen::Placement,
        piece::PieceKind,
        resolver::{first_candidate, resolve, scan},
    };

    fn resolved(placement: &str, text: &str, mover: Color) -> MoveDescriptor {
        let Placement(board) = placement.parse().unwrap();
        resolve(&board, MoveDescriptor::new(&board, text.parse().unwrap(), mover))
    }

    #[test]
    fn lone_rook() {
        let descriptor = resolved("8/8/8/8/8/8/8/3R4", "Rd5", Color::White);
        assert!(descriptor.is_legal());
        assert_eq!(descriptor.source(), Some(coord!("d1")));
        assert!(descriptor.alternatives().is_empty());
    }
    #[test]
    fn blocked_rook() {
        let descriptor = resolved("8/8/8/8/8/3P4/8/3R4", "Rd5", Color::White);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Geometry(GeometryError::PathBlocked))
        );
        assert_eq!(descriptor.source(), None);
    }
    #[test]
    fn knight_from_start() {
        let board = Board::starting_position();
        let descriptor = resolve(
            &board,
            MoveDescriptor::new(&board, "Nf3".parse().unwrap(), Color::White),
        );
        assert!(descriptor.is_legal());
        assert_eq!(descriptor.source(), Some(coord!("g1")));
    }
    #[test]
    fn pawn_double_step() {
        let board = Board::starting_position();
        let descriptor = resolve(
            &board,
            MoveDescriptor::new(&board, "e4".parse().unwrap(), Color::White),
        );
        assert_eq!(descriptor.source(), Some(coord!("e2")));
        let blocked = resolved("8/8/8/8/8/4n3/4P3/8", "e4", Color::White);
        assert!(!blocked.is_legal());
        assert_eq!(blocked.source(), None);
    }
    #[test]
    fn black_pawn_scans_upward() {
        let descriptor = resolved("8/8/8/8/8/3p4/4p3/8", "dxe2", Color::Black);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::State(StateError::OwnPieceOnDestination))
        );
        let descriptor = resolved("8/8/8/8/8/3p4/8/8", "d2", Color::Black);
        assert_eq!(descriptor.source(), Some(coord!("d3")));
    }
    #[test]
    fn ambiguous_pieces_are_all_kept() {
        let descriptor = resolved("8/8/8/8/8/8/8/R6R", "Rd1", Color::White);
        assert!(descriptor.is_legal());
        assert_eq!(descriptor.source(), Some(coord!("a1")));
        assert_eq!(descriptor.alternatives(), [coord!("h1")]);
    }
    #[test]
    fn hint_picks_the_piece() {
        let descriptor = resolved("8/8/8/8/8/8/8/R6R", "Rhd1", Color::White);
        assert_eq!(descriptor.source(), Some(coord!("h1")));
        assert!(descriptor.alternatives().is_empty());
        let descriptor = resolved("8/8/8/8/8/8/8/R6R", "Rcd1", Color::White);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Resolution(ResolutionError::HintMismatch))
        );
        let descriptor = resolved("1N6/8/8/8/1N6/8/8/8", "N8c6", Color::White);
        assert_eq!(descriptor.source(), Some(coord!("b8")));
    }
    #[test]
    fn missing_piece() {
        let descriptor = resolved("8/8/8/8/8/8/8/3r4", "Rd5", Color::White);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Resolution(ResolutionError::NoCandidate))
        );
    }
    #[test]
    fn queen_tries_lines_before_diagonals() {
        let squares: Vec<Coord> = scan(PieceKind::Queen, Color::White, coord!("a8")).collect();
        assert_eq!(squares.len(), 7 + 7 + 7);
        assert_eq!(squares[0], coord!("b8"));
        assert_eq!(squares[7], coord!("a7"));
        assert_eq!(squares[14], coord!("b7"));
        assert!(!squares.contains(&coord!("a8")));
    }
    #[test]
    fn first_candidate_for_attacks() {
        let Placement(board) = "4k3/8/8/8/8/8/8/4R2R".parse().unwrap();
        let probe =
            MoveDescriptor::attack_probe(&board, Color::White, PieceKind::Rook, coord!("e8"));
        assert_eq!(first_candidate(&board, &probe), Some(coord!("e1")));
        let probe =
            MoveDescriptor::attack_probe(&board, Color::White, PieceKind::Bishop, coord!("e8"));
        assert_eq!(first_candidate(&board, &probe), None);
    }
}
