//! Parsing of typed and scripted commands.
//!
//! One command per line:
//!
//! ```text
//! fire 3 4          shoot at row 3, column 4
//! move down 2       shift the boat two cells down
//! p2 fire 0 0       act as a specific player (scripts only)
//! view | board | history | quit
//! ```

use broadside::{Direction, ParseError, Player, Position};
use std::str::FromStr;
use thiserror::Error;

/// A parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Command {
    /// Fire at a cell.
    Fire(Position),
    /// Move the boat.
    Move {
        /// Direction to move in.
        direction: Direction,
        /// Cells to move.
        spaces: u8,
    },
    /// Print the acting player's view.
    View,
    /// Print both boats.
    Board,
    /// Print the action history.
    History,
    /// Stop.
    Quit,
}

/// A command with an optional explicit actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct CommandLine {
    /// Player named at the start of the line, if any.
    pub(super) actor: Option<Player>,
    /// The command itself.
    pub(super) command: Command,
}

/// Unparseable command text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(super) enum CommandError {
    /// Nothing to parse.
    #[error("empty command")]
    Empty,

    /// First word is not a command.
    #[error("unknown command '{0}' (expected fire, move, view, board, history or quit)")]
    Unknown(String),

    /// Wrong number of arguments.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// Argument is not a number.
    #[error("'{0}' is not a number")]
    Number(String),

    /// Bad direction.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

const FIRE_USAGE: &str = "fire <row> <col>";
const MOVE_USAGE: &str = "move <up|down|left|right> <spaces>";

impl FromStr for CommandLine {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words: Vec<&str> = s.split_whitespace().collect();
        let Some(&first) = words.first() else {
            return Err(CommandError::Empty);
        };

        let actor = first
            .trim_end_matches(':')
            .parse::<Player>()
            .ok()
            .filter(|_| words.len() > 1);
        if actor.is_some() {
            words.remove(0);
        }

        let command = parse_command(&words)?;
        Ok(Self { actor, command })
    }
}

fn parse_command(words: &[&str]) -> Result<Command, CommandError> {
    let Some((&name, args)) = words.split_first() else {
        return Err(CommandError::Empty);
    };

    match name.to_ascii_lowercase().as_str() {
        "fire" | "f" => match args {
            [row, col] => Ok(Command::Fire(Position::new(number(row)?, number(col)?))),
            _ => Err(CommandError::Usage(FIRE_USAGE)),
        },
        "move" | "m" => match args {
            [direction, spaces] => Ok(Command::Move {
                direction: direction.parse()?,
                spaces: number(spaces)?,
            }),
            _ => Err(CommandError::Usage(MOVE_USAGE)),
        },
        "view" => Ok(Command::View),
        "board" => Ok(Command::Board),
        "history" => Ok(Command::History),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse().map_err(|_| CommandError::Number(word.to_string()))
}
