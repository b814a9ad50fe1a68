use log::warn;

use crate::{board::Board, coord::Coord, descriptor::MoveDescriptor, executor::place};

/// Position after the move, computed on a copy.
///
/// An unresolved descriptor yields an unchanged copy.
pub fn simulate(board: &Board, descriptor: &MoveDescriptor) -> Board {
    match descriptor.source() {
        Some(source) => simulate_from(board, descriptor, source),
        None => {
            warn!("simulating {descriptor} without a source");
            *board
        }
    }
}
/// Position after the move as if it started from `source`.
pub fn simulate_from(board: &Board, descriptor: &MoveDescriptor, source: Coord) -> Board {
    let mut copy = *board;
    place(&mut copy, descriptor, source);
    copy
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        coord,
        descriptor::MoveDescriptor,
        fen::Placement,
        piece::{Piece, PieceKind},
        resolver::resolve,
        simulator::{simulate, simulate_from},
    };

    #[test]
    fn input_board_is_untouched() {
        let board = Board::starting_position();
        let descriptor = resolve(
            &board,
            MoveDescriptor::new(&board, "e4".parse().unwrap(), Color::White),
        );
        let after = simulate(&board, &descriptor);
        assert_eq!(board, Board::starting_position());
        assert!(after.is_empty(coord!("e2")));
        assert!(after.holds(coord!("e4"), Piece::new(Color::White, PieceKind::Pawn)));
    }
    #[test]
    fn promotion_is_simulated() {
        let Placement(board) = "8/P7/8/8/8/8/8/8".parse().unwrap();
        let descriptor = MoveDescriptor::new(&board, "a8=R".parse().unwrap(), Color::White);
        let after = simulate_from(&board, &descriptor, coord!("a7"));
        assert!(after.holds(coord!("a8"), Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(after.piece_count(), 1);
    }
    #[test]
    fn unresolved_move_changes_nothing() {
        let board = Board::starting_position();
        let descriptor = resolve(
            &board,
            MoveDescriptor::new(&board, "e5".parse().unwrap(), Color::White),
        );
        assert_eq!(descriptor.source(), None);
        assert_eq!(simulate(&board, &descriptor), board);
    }
}
