use crate::{
    board::Board,
    coord::{Coord, Vector, pawn_home_rank, pawn_promotion_rank},
    descriptor::MoveDescriptor,
    error::{GeometryError, Rejection, StateError},
    piece::{Movement, PieceKind},
};

/// Checks that the piece on `source` can make the described move: shape, then path, then
/// what the destination holds.
pub fn validate(board: &Board, descriptor: &MoveDescriptor, source: Coord) -> Result<(), Rejection> {
    debug_assert!(board.holds(source, descriptor.piece()));
    let path = match descriptor.kind.movement() {
        Some(movement) => piece_geometry(movement, descriptor, source)?,
        None => pawn_geometry(descriptor, source)?,
    };
    if let Some(direction) = path {
        if !source
            .line_exclusive_exclusive(descriptor.destination, direction)
            .all(|position| board.is_empty(position))
        {
            return Err(GeometryError::PathBlocked.into());
        }
    }
    occupancy(descriptor)?;
    Ok(())
}
/// Returns the direction whose intermediate squares must be empty, if any.
fn piece_geometry(
    movement: Movement,
    descriptor: &MoveDescriptor,
    source: Coord,
) -> Result<Option<Vector>, GeometryError> {
    let delta = descriptor.destination - source;
    let path = if movement.sliding {
        let direction = movement
            .directions
            .iter()
            .copied()
            .find(|direction| delta.is_aligned(*direction))
            .ok_or(GeometryError::InvalidShape)?;
        Some(direction)
    } else if movement.directions.contains(&delta) {
        None
    } else {
        return Err(GeometryError::InvalidShape);
    };
    if descriptor.promotion.is_some() {
        return Err(GeometryError::UnexpectedPromotion);
    }
    Ok(path)
}
fn pawn_geometry(
    descriptor: &MoveDescriptor,
    source: Coord,
) -> Result<Option<Vector>, GeometryError> {
    debug_assert_eq!(descriptor.kind, PieceKind::Pawn);
    let color = descriptor.mover;
    let delta = descriptor.destination - source;
    let single_move = Vector::pawn_single_move(color);
    let path = if descriptor.capture {
        if !Vector::pawn_attacks(color).contains(&delta) {
            return Err(GeometryError::InvalidShape);
        }
        None
    } else if delta == single_move {
        None
    } else if delta == Vector::pawn_double_move(color) && source.y() == pawn_home_rank(color) {
        Some(single_move)
    } else {
        return Err(GeometryError::InvalidShape);
    };
    let reaches_last_rank = descriptor.destination.y() == pawn_promotion_rank(color);
    match (reaches_last_rank, descriptor.promotion) {
        // attack probes only ask whether the square is hit
        (true, None) if !descriptor.attack_probe => Err(GeometryError::MissingPromotion),
        (false, Some(_)) => Err(GeometryError::UnexpectedPromotion),
        _ => Ok(path),
    }
}
fn occupancy(descriptor: &MoveDescriptor) -> Result<(), StateError> {
    match descriptor.occupant {
        None if descriptor.capture => Err(StateError::CaptureOnEmptySquare),
        Some(piece) if piece.color == descriptor.mover => Err(StateError::OwnPieceOnDestination),
        Some(_) if !descriptor.capture => Err(StateError::UndeclaredCapture),
        _ => Ok(()),
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        coord,
        coord::Coord,
        descriptor::MoveDescriptor,
        error::{GeometryError, Rejection, StateError},
        fen::Placement,
        movement::validate,
    };

    fn check(placement: &str, text: &str, mover: Color, source: Coord) -> Result<(), Rejection> {
        let Placement(board): Placement = placement.parse().unwrap();
        let descriptor = MoveDescriptor::new(&board, text.parse().unwrap(), mover);
        validate(&board, &descriptor, source)
    }

    #[test]
    fn sliding_pieces() {
        let rook = "8/8/8/8/8/8/8/3R4";
        assert_eq!(check(rook, "Rd5", Color::White, coord!("d1")), Ok(()));
        assert_eq!(check(rook, "Rh1", Color::White, coord!("d1")), Ok(()));
        assert_eq!(
            check(rook, "Re2", Color::White, coord!("d1")),
            Err(GeometryError::InvalidShape.into())
        );
        let bishop = "8/8/8/8/8/8/8/2B5";
        assert_eq!(check(bishop, "Bh6", Color::White, coord!("c1")), Ok(()));
        assert_eq!(
            check(bishop, "Bc4", Color::White, coord!("c1")),
            Err(GeometryError::InvalidShape.into())
        );
        let queen = "8/8/8/8/8/8/8/3Q4";
        assert_eq!(check(queen, "Qd8", Color::White, coord!("d1")), Ok(()));
        assert_eq!(check(queen, "Qh5", Color::White, coord!("d1")), Ok(()));
        assert_eq!(
            check(queen, "Qe3", Color::White, coord!("d1")),
            Err(GeometryError::InvalidShape.into())
        );
    }
    #[test]
    fn blocked_paths() {
        let rook = "8/8/8/8/8/3P4/8/3R4";
        assert_eq!(
            check(rook, "Rd5", Color::White, coord!("d1")),
            Err(GeometryError::PathBlocked.into())
        );
        // the blocker itself is not in the way of a move onto its neighbor
        assert_eq!(check(rook, "Rd2", Color::White, coord!("d1")), Ok(()));
        let bishop = "8/8/8/8/8/8/3p4/2B5";
        assert_eq!(
            check(bishop, "Bh6", Color::White, coord!("c1")),
            Err(GeometryError::PathBlocked.into())
        );
        assert_eq!(check(bishop, "Bxd2", Color::White, coord!("c1")), Ok(()));
    }
    #[test]
    fn stepping_pieces() {
        let knight = "8/8/8/8/8/8/8/6N1";
        assert_eq!(check(knight, "Nf3", Color::White, coord!("g1")), Ok(()));
        assert_eq!(
            check(knight, "Ng3", Color::White, coord!("g1")),
            Err(GeometryError::InvalidShape.into())
        );
        let king = "8/8/8/8/8/8/8/4K3";
        assert_eq!(check(king, "Kf2", Color::White, coord!("e1")), Ok(()));
        assert_eq!(
            check(king, "Ke3", Color::White, coord!("e1")),
            Err(GeometryError::InvalidShape.into())
        );
    }
    #[test]
    fn pawn_moves() {
        let white = "8/8/8/8/8/8/4P3/8";
        assert_eq!(check(white, "e3", Color::White, coord!("e2")), Ok(()));
        assert_eq!(check(white, "e4", Color::White, coord!("e2")), Ok(()));
        assert_eq!(
            check(white, "e1", Color::White, coord!("e2")),
            Err(GeometryError::InvalidShape.into())
        );
        assert_eq!(
            check("8/8/8/8/8/4P3/8/8", "e5", Color::White, coord!("e3")),
            Err(GeometryError::InvalidShape.into())
        );
        assert_eq!(
            check("8/8/8/8/8/4n3/4P3/8", "e4", Color::White, coord!("e2")),
            Err(GeometryError::PathBlocked.into())
        );
        let black = "8/3p4/8/8/8/8/8/8";
        assert_eq!(check(black, "d5", Color::Black, coord!("d7")), Ok(()));
        assert_eq!(
            check(black, "d8", Color::Black, coord!("d7")),
            Err(GeometryError::InvalidShape.into())
        );
    }
    #[test]
    fn pawn_captures_diagonally_only() {
        let board = "8/8/8/3p4/4P3/8/8/8";
        assert_eq!(check(board, "exd5", Color::White, coord!("e4")), Ok(()));
        assert_eq!(
            check(board, "d5", Color::White, coord!("e4")),
            Err(GeometryError::InvalidShape.into())
        );
        assert_eq!(
            check("8/8/8/4p3/4P3/8/8/8", "xe5", Color::White, coord!("e4")),
            Err(GeometryError::InvalidShape.into())
        );
        assert_eq!(
            check("8/8/8/4p3/4P3/8/8/8", "e5", Color::White, coord!("e4")),
            Err(StateError::UndeclaredCapture.into())
        );
    }
    #[test]
    fn promotion_rules() {
        let board = "8/4P3/8/8/8/8/8/8";
        assert_eq!(
            check(board, "e8", Color::White, coord!("e7")),
            Err(GeometryError::MissingPromotion.into())
        );
        assert_eq!(check(board, "e8=Q", Color::White, coord!("e7")), Ok(()));
        assert_eq!(
            check("8/8/8/8/8/8/4P3/8", "e3=Q", Color::White, coord!("e2")),
            Err(GeometryError::UnexpectedPromotion.into())
        );
        assert_eq!(
            check("8/8/8/8/8/8/8/6N1", "Nf3=Q", Color::White, coord!("g1")),
            Err(GeometryError::UnexpectedPromotion.into())
        );
        assert_eq!(
            check("8/8/8/8/8/8/3p4/8", "d1=N", Color::Black, coord!("d2")),
            Ok(())
        );
    }
    #[test]
    fn destination_occupancy() {
        assert_eq!(
            check("8/8/8/8/8/8/8/3R4", "Rxd5", Color::White, coord!("d1")),
            Err(StateError::CaptureOnEmptySquare.into())
        );
        assert_eq!(
            check("8/8/8/3N4/8/8/8/3R4", "Rxd5", Color::White, coord!("d1")),
            Err(StateError::OwnPieceOnDestination.into())
        );
        assert_eq!(
            check("8/8/8/3N4/8/8/8/3R4", "Rd5", Color::White, coord!("d1")),
            Err(StateError::OwnPieceOnDestination.into())
        );
        assert_eq!(
            check("8/8/8/3n4/8/8/8/3R4", "Rd5", Color::White, coord!("d1")),
            Err(StateError::UndeclaredCapture.into())
        );
        assert_eq!(
            check("8/8/8/3n4/8/8/8/3R4", "Rxd5", Color::White, coord!("d1")),
            Ok(())
        );
    }
    #[test]
    fn board_is_only_read() {
        let Placement(board) = "8/8/8/8/8/8/8/3R4".parse().unwrap();
        let copy: Board = board;
        let descriptor = MoveDescriptor::new(&board, "Rd5".parse().unwrap(), Color::White);
        validate(&board, &descriptor, coord!("d1")).unwrap();
        assert_eq!(board, copy);
    }
}
