//! Line-based command input.
//!
//! The host reads one line at a time and turns it into a [`Command`]:
//!
//! | Line            | Command                         |
//! |-----------------|---------------------------------|
//! | `y <text>`      | set the year filter to `<text>` |
//! | `y`             | clear the year filter           |
//! | `r <5\|10\|20>` | change the page size            |
//! | `n` / `p`       | next / previous page            |
//! | `g <page>`      | go to a page                    |
//! | `<k>`, `o <k>`  | open card `k` of this page      |
//! | `c`             | close the detail overlay        |
//! | `b` / `f`       | history back / forward          |
//! | `q`             | quit                            |

use super::Event;
use crate::catalog::ResultsPerPage;
use std::fmt;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FilterYear(String),
    ResultsPerPage(ResultsPerPage),
    NextPage,
    PreviousPage,
    GoToPage(u32),
    Open(usize),
    Close,
    Back,
    Forward,
    Quit,
}

impl Command {
    /// Converts the command into an application event.
    ///
    /// History movement belongs to the host and has no event; it returns
    /// `None`.
    #[must_use]
    pub fn into_event(self) -> Option<Event> {
        Some(match self {
            Self::FilterYear(text) => Event::FilterYearChanged(text),
            Self::ResultsPerPage(size) => Event::ResultsPerPageChanged(size),
            Self::NextPage => Event::NextPage,
            Self::PreviousPage => Event::PreviousPage,
            Self::GoToPage(page) => Event::GoToPage(page),
            Self::Open(position) => Event::SelectEntry(position),
            Self::Close => Event::CloseDetail,
            Self::Quit => Event::Quit,
            Self::Back | Self::Forward => return None,
        })
    }
}

/// Why a line was not understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidArgument { command: &'static str, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command '{word}'"),
            Self::MissingArgument(command) => write!(f, "'{command}' needs an argument"),
            Self::InvalidArgument { command, value } => {
                write!(f, "'{value}' is not valid for '{command}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Parses one input line.
///
/// Blank lines are `Ok(None)`. The year filter text is taken verbatim after
/// the first space so that it reaches the filter exactly as typed.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown commands and bad arguments.
///
/// # Examples
///
/// ```
/// use cartelera::app::input::{parse_command, Command};
///
/// assert_eq!(parse_command("y 2010"), Ok(Some(Command::FilterYear("2010".into()))));
/// assert_eq!(parse_command("3"), Ok(Some(Command::Open(3))));
/// assert_eq!(parse_command(""), Ok(None));
/// assert!(parse_command("r 7").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let start = line.trim_start();
    let (word, rest) = match start.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (start, None),
    };
    let argument = rest.map(str::trim).filter(|arg| !arg.is_empty());

    let command = match word {
        "y" => Command::FilterYear(rest.unwrap_or_default().to_string()),
        "r" => {
            let value = argument.ok_or(CommandError::MissingArgument("r"))?;
            let size = value
                .parse::<u32>()
                .ok()
                .and_then(|count| ResultsPerPage::try_from(count).ok())
                .ok_or_else(|| CommandError::InvalidArgument {
                    command: "r",
                    value: value.to_string(),
                })?;
            Command::ResultsPerPage(size)
        }
        "n" => Command::NextPage,
        "p" => Command::PreviousPage,
        "g" => Command::GoToPage(parse_number("g", argument)?),
        "o" => Command::Open(parse_number("o", argument)?),
        "c" => Command::Close,
        "b" => Command::Back,
        "f" => Command::Forward,
        "q" => Command::Quit,
        _ if word.bytes().all(|b| b.is_ascii_digit()) => Command::Open(parse_number("o", Some(word))?),
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn parse_number<T: std::str::FromStr>(
    command: &'static str,
    argument: Option<&str>,
) -> Result<T, CommandError> {
    let value = argument.ok_or(CommandError::MissingArgument(command))?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}
