//! Line-oriented command front end for [`RankTreeSet`].
//!
//! The tree engine never sees text: this module owns the translation in both
//! directions. A command is one line, tokenized on whitespace, with integer
//! arguments. [`Command::parse`] rejects malformed lines with a [`ParseError`];
//! [`execute`] applies a parsed command to a set and renders the reply line.
//!
//! # Examples
//!
//! ```
//! use rank_tree::RankTreeSet;
//! use rank_tree::command::{execute, Command, Reply};
//!
//! let mut set = RankTreeSet::new();
//!
//! let command = Command::parse("INSERT 5").unwrap();
//! assert_eq!(execute(&mut set, &command), Reply::Message("Added: 5".into()));
//!
//! let command = Command::parse("FIND_KTH 1").unwrap();
//! assert_eq!(execute(&mut set, &command), Reply::Message("5".into()));
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use thiserror::Error;

use crate::RankTreeSet;

/// A parsed command, one per input line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// `INSERT x`
    Insert(i64),
    /// `DELETE x`
    Delete(i64),
    /// `SEARCH x`
    Search(i64),
    /// `COUNT_RANGE x y`, inclusive on both ends.
    CountRange(i64, i64),
    /// `COUNT_LESS x`
    CountLess(i64),
    /// `COUNT_GREATER x`
    CountGreater(i64),
    /// `FIND_KTH k`. `k` stays signed here so a non-positive index reaches
    /// the engine's invalid-selection path instead of failing to parse.
    FindKth(i64),
    /// `INORDER`
    Inorder,
    /// `EXIT`
    Exit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// The line contained no tokens.
    #[error("empty command")]
    Empty,
    /// The first token is not a recognized command word.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// A recognized command with the wrong number of arguments.
    #[error("`{command}` expects {expected} argument(s), got {got}")]
    WrongArgumentCount {
        /// The command word as it appeared on the line.
        command: String,
        /// How many arguments the command takes.
        expected: usize,
        /// How many were supplied.
        got: usize,
    },
    /// An argument that should be an integer is not one.
    #[error("invalid integer `{0}`")]
    InvalidInteger(String),
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for an empty line, an unknown command word,
    /// a wrong argument count, or a non-numeric argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::command::Command;
    ///
    /// assert_eq!(Command::parse("COUNT_RANGE 2 6"), Ok(Command::CountRange(2, 6)));
    /// assert!(Command::parse("INSERT five").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (&keyword, arguments) = tokens.split_first().ok_or(ParseError::Empty)?;
        let command = match keyword {
            "INSERT" => Self::Insert(one_integer(keyword, arguments)?),
            "DELETE" => Self::Delete(one_integer(keyword, arguments)?),
            "SEARCH" => Self::Search(one_integer(keyword, arguments)?),
            "COUNT_RANGE" => {
                let (low, high) = two_integers(keyword, arguments)?;
                Self::CountRange(low, high)
            }
            "COUNT_LESS" => Self::CountLess(one_integer(keyword, arguments)?),
            "COUNT_GREATER" => Self::CountGreater(one_integer(keyword, arguments)?),
            "FIND_KTH" => Self::FindKth(one_integer(keyword, arguments)?),
            "INORDER" => {
                no_arguments(keyword, arguments)?;
                Self::Inorder
            }
            "EXIT" => {
                no_arguments(keyword, arguments)?;
                Self::Exit
            }
            unknown => return Err(ParseError::UnknownCommand(unknown.to_string())),
        };
        Ok(command)
    }
}

fn parse_integer(token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger(token.to_string()))
}

fn one_integer(command: &str, arguments: &[&str]) -> Result<i64, ParseError> {
    match arguments {
        [token] => parse_integer(token),
        _ => Err(ParseError::WrongArgumentCount {
            command: command.to_string(),
            expected: 1,
            got: arguments.len(),
        }),
    }
}

fn two_integers(command: &str, arguments: &[&str]) -> Result<(i64, i64), ParseError> {
    match arguments {
        [first, second] => Ok((parse_integer(first)?, parse_integer(second)?)),
        _ => Err(ParseError::WrongArgumentCount {
            command: command.to_string(),
            expected: 2,
            got: arguments.len(),
        }),
    }
}

fn no_arguments(command: &str, arguments: &[&str]) -> Result<(), ParseError> {
    if arguments.is_empty() {
        Ok(())
    } else {
        Err(ParseError::WrongArgumentCount {
            command: command.to_string(),
            expected: 0,
            got: arguments.len(),
        })
    }
}

/// Outcome of executing one command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    /// A line to print.
    Message(String),
    /// `EXIT` was issued; the session is over.
    Exit,
}

/// Applies a parsed command to the set and renders the reply line.
///
/// Engine outcomes map onto fixed strings: a rejected insert reports
/// `Element already exists`, a removal of an absent key `Element does not
/// exist`, and an out-of-range selection `Invalid index`. `INORDER` renders
/// the ascending enumeration as `[ k1, k2, ..., kn ]` (an empty set gives
/// `[  ]`).
#[must_use]
pub fn execute(set: &mut RankTreeSet<i64>, command: &Command) -> Reply {
    let message = match *command {
        Command::Insert(key) => {
            if set.insert(key) {
                format!("Added: {key}")
            } else {
                String::from("Element already exists")
            }
        }
        Command::Delete(key) => {
            if set.remove(&key) {
                format!("Deleted: {key}")
            } else {
                String::from("Element does not exist")
            }
        }
        Command::Search(key) => String::from(if set.contains(&key) { "YES" } else { "NO" }),
        Command::CountRange(low, high) => {
            format!("Elements in range [{low}, {high}]: {}", set.count_in_range(&low, &high))
        }
        Command::CountLess(key) => {
            format!("Elements less than {key}: {}", set.count_less_than(&key))
        }
        Command::CountGreater(key) => {
            format!("Elements greater than {key}: {}", set.count_greater_than(&key))
        }
        Command::FindKth(k) => match usize::try_from(k).ok().and_then(|k| set.kth_smallest(k)) {
            Some(key) => key.to_string(),
            None => String::from("Invalid index"),
        },
        Command::Inorder => {
            let keys: Vec<String> = set.iter().map(ToString::to_string).collect();
            format!("[ {} ]", keys.join(", "))
        }
        Command::Exit => return Reply::Exit,
    };
    Reply::Message(message)
}
