use log::debug;

use crate::{
    board::Board,
    descriptor::MoveDescriptor,
    error::{CheckError, ResolutionError},
    resolver::settle,
    simulator::{simulate, simulate_from},
    threat::is_king_in_check,
};

/// Cross-checks the declared `+` and `#` and the safety of the mover's king against the
/// position after the move.
///
/// When several pieces could make the move, only those leaving their own king safe are
/// considered, and exactly one must remain.
pub fn validate_check_consistency(board: &Board, mut descriptor: MoveDescriptor) -> MoveDescriptor {
    if !descriptor.is_legal() {
        return descriptor;
    }
    let Some(source) = descriptor.source() else {
        descriptor.reject(ResolutionError::NoCandidate);
        return descriptor;
    };
    if !descriptor.alternatives().is_empty() {
        let survivors: Vec<_> = [source]
            .into_iter()
            .chain(descriptor.alternatives().iter().copied())
            .filter(|candidate| {
                let after = simulate_from(board, &descriptor, *candidate);
                !is_king_in_check(&after, descriptor.mover)
            })
            .collect();
        match survivors[..] {
            [survivor] => settle(&mut descriptor, survivor),
            // nobody is safe, the self-check rule reports the first one
            [] => settle(&mut descriptor, source),
            _ => {
                debug!("{descriptor} is ambiguous between {survivors:?}");
                descriptor.reject(ResolutionError::Ambiguous);
                return descriptor;
            }
        }
    }
    if let Some(violation) = check_violations(board, &descriptor).into_iter().next() {
        debug!("{descriptor} rejected: {violation}");
        descriptor.reject(violation);
    }
    descriptor
}
/// Every check rule the resolved move breaks, in the order they are enforced.
pub fn check_violations(board: &Board, descriptor: &MoveDescriptor) -> Vec<CheckError> {
    let after = simulate(board, descriptor);
    let mover = descriptor.mover;
    let gives_check = is_king_in_check(&after, !mover);
    let exposed = is_king_in_check(&after, mover);
    let mut violations = Vec::new();
    if gives_check && !descriptor.declares_check() {
        violations.push(CheckError::UndeclaredCheck);
    }
    if !gives_check && descriptor.declares_check() {
        violations.push(CheckError::DeclaredCheckWithoutCheck);
    }
    if exposed {
        violations.push(CheckError::SelfCheck);
        if is_king_in_check(board, mover) {
            violations.push(CheckError::UnescapedCheck);
        }
    }
    violations
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        consistency::{check_violations, validate_check_consistency},
        coord,
        descriptor::MoveDescriptor,
        error::{CheckError, Rejection, ResolutionError},
        fen::Placement,
        resolver::resolve,
    };

    fn validated(placement: &str, text: &str, mover: Color) -> MoveDescriptor {
        let Placement(board) = placement.parse().unwrap();
        let descriptor = resolve(&board, MoveDescriptor::new(&board, text.parse().unwrap(), mover));
        validate_check_consistency(&board, descriptor)
    }

    #[test]
    fn ignoring_check_is_self_check() {
        let placement = "4r2k/8/8/8/8/8/P7/4K3";
        let descriptor = validated(placement, "a3", Color::White);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Check(CheckError::SelfCheck))
        );
        let Placement(board) = placement.parse().unwrap();
        let resolved = resolve(
            &board,
            MoveDescriptor::new(&board, "a3".parse().unwrap(), Color::White),
        );
        assert_eq!(
            check_violations(&board, &resolved),
            [CheckError::SelfCheck, CheckError::UnescapedCheck]
        );
    }
    #[test]
    fn escaping_check() {
        let placement = "4r2k/8/8/8/8/8/3B4/4K3";
        assert!(validated(placement, "Be3", Color::White).is_legal());
        assert!(validated(placement, "Kd1", Color::White).is_legal());
        assert_eq!(
            validated(placement, "Ke2", Color::White).rejection(),
            Some(Rejection::Check(CheckError::SelfCheck))
        );
    }
    #[test]
    fn pinned_piece_cannot_move() {
        let descriptor = validated("4r2k/8/8/8/8/8/4N3/4K3", "Nf4", Color::White);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Check(CheckError::SelfCheck))
        );
    }
    #[test]
    fn declared_mate_without_check() {
        let descriptor = validated("k7/8/8/8/8/8/8/4K2Q", "Qh7#", Color::White);
        assert_eq!(descriptor.source(), Some(coord!("h1")));
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Check(CheckError::DeclaredCheckWithoutCheck))
        );
    }
    #[test]
    fn check_must_be_declared() {
        let placement = "7k/8/8/8/8/8/8/Q3K3";
        assert_eq!(
            validated(placement, "Qa8", Color::White).rejection(),
            Some(Rejection::Check(CheckError::UndeclaredCheck))
        );
        assert!(validated(placement, "Qa8+", Color::White).is_legal());
        // mate is only verified as check
        assert!(validated(placement, "Qa8#", Color::White).is_legal());
    }
    #[test]
    fn king_safety_settles_ambiguity() {
        // the knight on e2 is pinned to its king
        let descriptor = validated("4r2k/8/8/7N/8/8/4N3/4K3", "Nf4", Color::White);
        assert!(descriptor.is_legal());
        assert_eq!(descriptor.source(), Some(coord!("h5")));
        assert!(descriptor.alternatives().is_empty());
    }
    #[test]
    fn genuine_ambiguity_is_rejected() {
        let descriptor = validated("1k6/8/8/8/8/R6R/8/4K3", "Rd3", Color::White);
        assert_eq!(
            descriptor.rejection(),
            Some(Rejection::Resolution(ResolutionError::Ambiguous))
        );
        assert!(validated("1k6/8/8/8/8/R6R/8/4K3", "Rad3", Color::White).is_legal());
    }
    #[test]
    fn board_is_not_modified() {
        let board = Board::starting_position();
        let descriptor = resolve(
            &board,
            MoveDescriptor::new(&board, "e4".parse().unwrap(), Color::White),
        );
        let descriptor = validate_check_consistency(&board, descriptor);
        assert!(descriptor.is_legal());
        assert_eq!(board, Board::starting_position());
    }
}
