#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::{io, process::ExitCode};

use chess_arbiter::{
    Color,
    fen::Placement,
    fuzz::fuzz,
    repl::{Session, repl},
};
use clap::{Parser, Subcommand};
use log::error;

#[derive(Parser, Debug)]
#[command(about = "Checks chess moves written in algebraic notation", author, version)]
struct Args {
    /// Initial piece placement, rows from rank 8 to rank 1 separated by `/`
    #[arg(long, value_name = "PLACEMENT")]
    position: Option<Placement>,
    /// Black moves first
    #[arg(long)]
    black_first: bool,
    /// Draw the board without colors
    #[arg(long)]
    plain: bool,
    /// View the board from black's side
    #[arg(long)]
    flip: bool,
    #[command(subcommand)]
    command: Option<Command>,
}
#[derive(Subcommand, Debug)]
enum Command {
    /// Compare the arbiter against the `chess` crate on random games
    Fuzz {
        #[arg(long, default_value_t = 100_000)]
        iterations: u64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> io::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match args.command {
        Some(Command::Fuzz { iterations, seed }) => match fuzz(iterations, seed) {
            Ok(report) => {
                println!("{report}");
                Ok(ExitCode::SUCCESS)
            }
            Err(discrepancy) => {
                error!("fuzzing found a discrepancy");
                eprintln!("{discrepancy}");
                Ok(ExitCode::FAILURE)
            }
        },
        None => {
            let mut session = Session {
                plain: args.plain,
                ..Session::default()
            };
            if let Some(Placement(board)) = args.position {
                session.board = board;
            }
            if args.black_first {
                session.first = Color::Black;
            }
            if args.flip {
                session.view = Color::Black;
            }
            repl(session)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
