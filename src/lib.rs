#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    reason = "internal crate consumed by its own binary"
)]

pub mod board;
pub mod board_display;
pub mod color;
pub mod consistency;
pub mod coord;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod executor;
pub mod fen;
pub mod fuzz;
pub mod movement;
pub mod notation;
pub mod piece;
pub mod repl;
pub mod resolver;
pub mod simulator;
pub mod threat;

pub use crate::{
    board::Board,
    color::Color,
    consistency::validate_check_consistency,
    descriptor::{Legality, MoveDescriptor},
    engine::{make_move, play, resolve_move},
    error::Rejection,
    executor::apply_move,
    threat::is_king_in_check,
};
