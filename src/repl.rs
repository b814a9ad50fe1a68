use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write, stderr, stdin, stdout},
    str::FromStr,
};

use log::debug;

use crate::{
    board::Board,
    board_display::{BoardDisplay, PlainBoardDisplay},
    color::Color,
    engine::play,
    fen::{ParsePlacementError, Placement},
    notation::{Notation, ParseNotationError},
    threat::is_king_in_check,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    Flip,
    Restart,
    Quit,
    Turn,
    Check,
    Import(Placement),
    ExportPlacement,
    Move(Notation),
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Input::Help => write!(f, "help")?,
            Input::Flip => write!(f, "flip")?,
            Input::Restart => write!(f, "restart")?,
            Input::Quit => write!(f, "quit")?,
            Input::Turn => write!(f, "turn")?,
            Input::Check => write!(f, "check")?,
            Input::Import(placement) => write!(f, "import {placement}")?,
            Input::ExportPlacement => write!(f, "placement")?,
            Input::Move(notation) => write!(f, "{notation}")?,
        }
        Ok(())
    }
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "flip" => Ok(Input::Flip),
            "restart" => Ok(Input::Restart),
            "quit" => Ok(Input::Quit),
            "turn" => Ok(Input::Turn),
            "check" => Ok(Input::Check),
            "placement" => Ok(Input::ExportPlacement),
            s => {
                if let Some(s) = argument_of(s, "import") {
                    Ok(Input::Import(s.parse()?))
                } else {
                    Ok(Input::Move(s.parse()?))
                }
            }
        }
    }
}
/// Text following the `command` word, if `src` starts with it.
fn argument_of<'a>(src: &'a str, command: &str) -> Option<&'a str> {
    src.strip_prefix(command)
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseInputError {
    Placement(ParsePlacementError),
    Move(ParseNotationError),
}
impl From<ParsePlacementError> for ParseInputError {
    fn from(value: ParsePlacementError) -> Self {
        ParseInputError::Placement(value)
    }
}
impl From<ParseNotationError> for ParseInputError {
    fn from(value: ParseNotationError) -> Self {
        ParseInputError::Move(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::Placement(err) => write!(f, "{err}")?,
            ParseInputError::Move(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseInputError::Placement(err) => Some(err),
            ParseInputError::Move(err) => Some(err),
        }
    }
}

/// Settings of an interactive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub board: Board,
    pub first: Color,
    pub view: Color,
    pub plain: bool,
}
impl Default for Session {
    fn default() -> Self {
        Session {
            board: Board::starting_position(),
            first: Color::White,
            view: Color::White,
            plain: false,
        }
    }
}

#[allow(
    clippy::too_many_lines,
    reason = "further decomposition could potentially hurt readability"
)]
pub fn repl(session: Session) -> io::Result<()> {
    let input = stdin().lock();
    let mut output = stdout().lock();
    let mut error = stderr().lock();

    let mut lines = input.lines();

    let mut board = session.board;
    let mut mover = session.first;
    let mut view = session.view;
    let mut info = String::new();
    let mut highlighted = Vec::new();
    let mut update = true;
    let mut first_time = true;
    loop {
        if update {
            info.clear();
            info.push_str(&format!("{mover} plays\n"));
            if is_king_in_check(&board, mover) {
                info.push_str(&format!("{mover} is in check\n"));
            }
        }
        if first_time {
            info.push_str("type `help` for instructions\n");
            first_time = false;
        }
        update = false;
        if session.plain {
            write!(output, "{}", PlainBoardDisplay(&board))?;
            write!(output, "{info}")?;
        } else {
            write!(
                output,
                "{}",
                BoardDisplay {
                    board: &board,
                    view,
                    highlighted: &highlighted,
                    info: &info,
                },
            )?;
        }
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(text) = lines.next() else {
                return Ok(());
            };
            let text = text?;
            let input = match text.trim().parse() {
                Ok(input) => input,
                Err(ParseInputError::Move(err)) => {
                    writeln!(error, "Illegal move: {err}")?;
                    writeln!(error, "for available command, enter `help`")?;
                    continue;
                }
                Err(err) => {
                    writeln!(error, "Error: {err}")?;
                    continue;
                }
            };
            debug!("read `{input}`");
            match input {
                Input::Help => {
                    writeln!(output, "flip               - flip the board")?;
                    writeln!(output, "restart            - reset to the initial position")?;
                    writeln!(output, "quit               - quit the game")?;
                    writeln!(output, "turn               - show who moves")?;
                    writeln!(output, "check              - tell whether the mover is in check")?;
                    writeln!(output, "import <placement> - import a position")?;
                    writeln!(output, "placement          - export the position")?;
                    writeln!(output, "e4, Nf3, exd5      - play a move")?;
                    writeln!(output, "Nbd7, R1e2, Qh4e1  - name the moving piece's file or rank")?;
                    writeln!(output, "e8=Q, Qxf7#        - promote, declare check or mate")?;
                    continue;
                }
                Input::Flip => {
                    view = !view;
                }
                Input::Restart => {
                    board = session.board;
                    mover = session.first;
                    update = true;
                    highlighted.clear();
                }
                Input::Quit => return Ok(()),
                Input::Turn => {
                    writeln!(output, "{mover} plays")?;
                    continue;
                }
                Input::Check => {
                    let state = if is_king_in_check(&board, mover) {
                        "in check"
                    } else {
                        "not in check"
                    };
                    writeln!(output, "{mover} is {state}")?;
                    continue;
                }
                Input::Import(Placement(imported)) => {
                    board = imported;
                    update = true;
                    highlighted.clear();
                }
                Input::ExportPlacement => {
                    writeln!(output, "{}", Placement(board))?;
                    continue;
                }
                Input::Move(notation) => match play(&mut board, notation, mover) {
                    Ok(descriptor) => {
                        highlighted.clear();
                        highlighted.extend(descriptor.source());
                        highlighted.push(descriptor.destination);
                        mover = !mover;
                        update = true;
                    }
                    Err(rejection) => {
                        writeln!(error, "Illegal move: {rejection}")?;
                        continue;
                    }
                },
            }
            break;
        }
    }
}
