use log::{debug, info};

use crate::{
    board::Board,
    color::Color,
    consistency::validate_check_consistency,
    descriptor::MoveDescriptor,
    error::Rejection,
    executor::apply_move,
    notation::{Notation, ParseNotationError},
    resolver::resolve,
};

/// Parses `text` and finds which piece of `mover` makes the move, without looking at checks.
///
/// Only malformed text is an error here, any other refusal is carried in the legality of the
/// returned descriptor.
pub fn resolve_move(
    board: &Board,
    text: &str,
    mover: Color,
) -> Result<MoveDescriptor, ParseNotationError> {
    Ok(resolve_notation(board, text.parse()?, mover))
}
pub fn resolve_notation(board: &Board, notation: Notation, mover: Color) -> MoveDescriptor {
    debug!("{mover} plays {notation}");
    resolve(board, MoveDescriptor::new(board, notation, mover))
}
/// Validates and plays `text` for `mover`. On error the board is left as it was.
pub fn make_move(board: &mut Board, text: &str, mover: Color) -> Result<MoveDescriptor, Rejection> {
    play(board, text.parse()?, mover)
}
/// Same as [`make_move`] for an already parsed move.
pub fn play(board: &mut Board, notation: Notation, mover: Color) -> Result<MoveDescriptor, Rejection> {
    let descriptor = resolve_notation(board, notation, mover);
    let descriptor = validate_check_consistency(board, descriptor).into_result()?;
    apply_move(board, &descriptor);
    info!("{descriptor}");
    Ok(descriptor)
}
