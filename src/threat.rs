use log::trace;

use crate::{
    board::Board, color::Color, coord::Coord, descriptor::MoveDescriptor, piece::PieceKind,
    resolver::first_candidate,
};

/// Finds a piece of `attacker` that could capture on `target`.
pub fn attacker_of(board: &Board, attacker: Color, target: Coord) -> Option<(PieceKind, Coord)> {
    PieceKind::ATTACKERS.into_iter().find_map(|kind| {
        let probe = MoveDescriptor::attack_probe(board, attacker, kind, target);
        first_candidate(board, &probe).map(|source| (kind, source))
    })
}
/// Whether the king of `color` is attacked. A board without that king is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king(color) else {
        return false;
    };
    match attacker_of(board, !color, king) {
        Some((kind, source)) => {
            trace!("{color} king on {king} attacked by {kind} on {source}");
            true
        }
        None => false,
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        coord,
        fen::Placement,
        piece::PieceKind,
        threat::{attacker_of, is_king_in_check},
    };

    fn in_check(placement: &str, color: Color) -> bool {
        let Placement(board) = placement.parse().unwrap();
        is_king_in_check(&board, color)
    }

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::starting_position();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }
    #[test]
    fn sliding_attacks() {
        assert!(in_check("4r3/8/8/8/8/8/8/4K3", Color::White));
        assert!(!in_check("4r3/8/8/8/4P3/8/8/4K3", Color::White));
        assert!(in_check("k7/8/8/8/8/8/8/7B", Color::Black));
        assert!(in_check("8/8/8/8/8/8/8/q3K3", Color::White));
        assert!(!in_check("8/8/8/8/8/8/8/Q3K3", Color::White));
    }
    #[test]
    fn stepping_attacks() {
        assert!(in_check("8/8/8/8/8/5n2/8/4K3", Color::White));
        assert!(in_check("8/8/8/8/8/8/3k4/4K3", Color::White));
        assert!(!in_check("8/8/8/8/8/4n3/8/4K3", Color::White));
    }
    #[test]
    fn pawn_attacks_forward_only() {
        assert!(in_check("8/8/8/8/8/8/3p4/4K3", Color::White));
        assert!(!in_check("8/8/8/8/8/8/4p3/4K3", Color::White));
        assert!(!in_check("8/8/8/8/8/8/8/3pK3", Color::White));
        assert!(in_check("4k3/3P4/8/8/8/8/8/8", Color::Black));
    }
    #[test]
    fn missing_king_is_not_in_check() {
        assert!(!in_check("r7/8/8/8/8/8/8/8", Color::White));
    }
    #[test]
    fn reports_first_attacker_kind() {
        let Placement(board) = "4k3/8/8/8/8/8/3q4/r3K3".parse().unwrap();
        assert_eq!(
            attacker_of(&board, Color::Black, coord!("e1")),
            Some((PieceKind::Rook, coord!("a1")))
        );
    }
}
