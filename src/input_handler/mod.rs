//! Move input parsing.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COLUMN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)$").expect("COLUMN_RE regex should be valid"));
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// A column number typed by the player. Range and fullness are checked by
    /// the engine, not here.
    Column(usize),
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if QUIT_RE.is_match(trimmed) {
            return Err(InputError::UserExit);
        }

        COLUMN_RE
            .captures(trimmed)
            .and_then(|caps| caps[1].parse().ok())
            .map(MoveInput::Column)
            .ok_or_else(|| InputError::InvalidInput {
                input: trimmed.to_string(),
            })
    }
}

/// Prompts for and reads one line from stdin. End of input counts as the user
/// leaving the game.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let stdin = io::stdin();
    read_move_input(&mut stdin.lock(), &mut io::stdout())
}

fn read_move_input<R: BufRead, W: Write>(
    reader: &mut R,
    prompt: &mut W,
) -> Result<MoveInput, InputError> {
    let io_error = |e: io::Error| InputError::IOError {
        error: e.to_string(),
    };

    write!(prompt, "Choose a column (0-6): ").map_err(io_error)?;
    prompt.flush().map_err(io_error)?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(io_error)?;
    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_column() {
        assert_eq!("3".parse::<MoveInput>(), Ok(MoveInput::Column(3)));
        assert_eq!(" 6 \n".parse::<MoveInput>(), Ok(MoveInput::Column(6)));
    }

    #[test]
    fn test_out_of_range_column_still_parses() {
        assert_eq!("9".parse::<MoveInput>(), Ok(MoveInput::Column(9)));
    }

    #[test]
    fn test_non_numeric_input_is_invalid() {
        for input in &["", "three", "-1", "3.5", "3 4"] {
            assert!(
                matches!(
                    input.parse::<MoveInput>(),
                    Err(InputError::InvalidInput { .. })
                ),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_quit_commands() {
        for input in &["q", "quit", "EXIT"] {
            assert_eq!(input.parse::<MoveInput>(), Err(InputError::UserExit));
        }
    }

    #[test]
    fn test_read_move_input_prompts_and_parses() {
        let mut reader = Cursor::new("4\n");
        let mut prompt = Vec::new();

        let input = read_move_input(&mut reader, &mut prompt).unwrap();

        assert_eq!(input, MoveInput::Column(4));
        assert_eq!(String::from_utf8(prompt).unwrap(), "Choose a column (0-6): ");
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut reader = Cursor::new("");
        let mut prompt = Vec::new();
        assert_eq!(
            read_move_input(&mut reader, &mut prompt),
            Err(InputError::UserExit)
        );
    }
}
