//! Command parsing for the line-oriented protocol

use thiserror::Error;

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert {
        name: String,
        date: String,
        time: String,
        seats: u32,
    },
    Search {
        id: u64,
    },
    Modify {
        id: u64,
        name: String,
        date: String,
        time: String,
        seats: u32,
    },
    Delete {
        id: u64,
    },
    Generate {
        count: usize,
    },
    DisplayForward,
    DisplayReverse,
    Count,
}

/// Why a command failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} takes {expected} argument(s), got {got}")]
    WrongArgCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {field}: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    #[error("event name must not be empty")]
    EmptyName,

    #[error("empty command")]
    Empty,
}

impl Command {
    /// Parse a command from its argument list (command word first).
    ///
    /// Numeric fields and the non-empty name are validated here so
    /// malformed input never reaches the store.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let (command, rest) = args.split_first().ok_or(CommandError::Empty)?;

        match command.as_str() {
            "insert" => {
                expect_args("insert", rest, 4)?;
                Ok(Command::Insert {
                    name: non_empty_name(&rest[0])?,
                    date: rest[1].clone(),
                    time: rest[2].clone(),
                    seats: parse_number("seats", &rest[3])?,
                })
            }
            "search" => {
                expect_args("search", rest, 1)?;
                Ok(Command::Search {
                    id: parse_number("id", &rest[0])?,
                })
            }
            "modify" => {
                expect_args("modify", rest, 5)?;
                Ok(Command::Modify {
                    id: parse_number("id", &rest[0])?,
                    name: non_empty_name(&rest[1])?,
                    date: rest[2].clone(),
                    time: rest[3].clone(),
                    seats: parse_number("seats", &rest[4])?,
                })
            }
            "delete" => {
                expect_args("delete", rest, 1)?;
                Ok(Command::Delete {
                    id: parse_number("id", &rest[0])?,
                })
            }
            "generate" => {
                expect_args("generate", rest, 1)?;
                Ok(Command::Generate {
                    count: parse_number("count", &rest[0])?,
                })
            }
            "display_forward" => {
                expect_args("display_forward", rest, 0)?;
                Ok(Command::DisplayForward)
            }
            "display_reverse" => {
                expect_args("display_reverse", rest, 0)?;
                Ok(Command::DisplayReverse)
            }
            "count" => {
                expect_args("count", rest, 0)?;
                Ok(Command::Count)
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn expect_args(
    command: &'static str,
    rest: &[String],
    expected: usize,
) -> Result<(), CommandError> {
    if rest.len() == expected {
        Ok(())
    } else {
        Err(CommandError::WrongArgCount {
            command,
            expected,
            got: rest.len(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, CommandError> {
    value.trim().parse().map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn non_empty_name(value: &str) -> Result<String, CommandError> {
    if value.trim().is_empty() {
        Err(CommandError::EmptyName)
    } else {
        Ok(value.to_string())
    }
}
