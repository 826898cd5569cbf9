//! Parsing of interactive commands.
//!
//! One command per input line, arguments separated by whitespace.
//! Face numbers and board coordinates are 1-based, as shown on screen.

use std::error::Error;
use std::fmt;

use cubix_core::Mark;

/// A parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Make face `n` (1-based) the centre of the net.
    Centre(u8),
    /// Place a mark at 1-based `(x, y)` on the centre face.
    Place {
        /// Mark to place.
        mark: Mark,
        /// 1-based column.
        x: u32,
        /// 1-based row, counted upwards.
        y: u32,
    },
    /// Start a new game.
    New {
        /// Face edge length.
        size: u32,
        /// Win length; `None` keeps the current one.
        win_length: Option<u32>,
    },
    /// Print the command summary.
    Help,
    /// Leave the program.
    Exit,
}

/// Why an input line is not a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    Unknown {
        /// The unrecognised word.
        word: String,
    },
    /// A command had missing, extra or non-numeric arguments.
    InvalidArguments,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { word } => {
                write!(f, "unknown command '{word}', input 'h' for help")
            }
            Self::InvalidArguments => write!(f, "invalid arguments"),
        }
    }
}

impl Error for CommandError {}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match head {
        "1" | "2" | "3" | "4" | "5" | "6" => {
            no_args(&args)?;
            let n = head.parse().map_err(|_| CommandError::InvalidArguments)?;
            Command::Centre(n)
        }
        "h" => {
            no_args(&args)?;
            Command::Help
        }
        "e" => {
            no_args(&args)?;
            Command::Exit
        }
        "n" => match args.as_slice() {
            [size] => Command::New {
                size: number(size)?,
                win_length: None,
            },
            [size, win] => Command::New {
                size: number(size)?,
                win_length: Some(number(win)?),
            },
            _ => return Err(CommandError::InvalidArguments),
        },
        word => {
            let Ok(mark) = word.parse::<Mark>() else {
                return Err(CommandError::Unknown {
                    word: word.to_string(),
                });
            };
            match args.as_slice() {
                [x, y] => Command::Place {
                    mark,
                    x: number(x)?,
                    y: number(y)?,
                },
                _ => return Err(CommandError::InvalidArguments),
            }
        }
    };
    Ok(Some(command))
}

fn no_args(args: &[&str]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments)
    }
}

fn number(word: &str) -> Result<u32, CommandError> {
    word.parse().map_err(|_| CommandError::InvalidArguments)
}
