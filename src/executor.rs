use log::{debug, warn};

use crate::{board::Board, coord::Coord, descriptor::MoveDescriptor};

/// Moves the piece of a legal move: the destination gets the moved or promoted piece and the
/// source is emptied.
///
/// Anything but a legal, resolved descriptor is a caller error and leaves the board as is.
pub fn apply_move(board: &mut Board, descriptor: &MoveDescriptor) {
    debug_assert!(descriptor.is_legal(), "applying {descriptor:?}");
    match descriptor.source() {
        Some(source) if descriptor.is_legal() => {
            place(board, descriptor, source);
            debug!("applied {descriptor}");
        }
        _ => warn!(
            "refusing to apply {descriptor} with legality {:?}",
            descriptor.legality()
        ),
    }
}
pub(crate) fn place(board: &mut Board, descriptor: &MoveDescriptor, source: Coord) {
    board[source] = None;
    board[descriptor.destination] = Some(descriptor.placed());
}
