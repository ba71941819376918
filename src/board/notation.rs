//! Compact text form of a position: six `/`-separated rows, top row first, each
//! row seven characters of `.` (empty), `X` (human) or `O` (computer).
//!
//! ```text
//! ......./......./......./......./...O.../..XXO..
//! ```

use std::str::FromStr;

use thiserror::Error;

use super::{Board, Side, COLS, ROWS};

pub const EMPTY_POSITION: &str = "......./......./......./......./......./.......";

const EMPTY_CHAR: char = '.';
const ROW_SEPARATOR: char = '/';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("Wrong number of rows: {expected} expected, {row_count} given")]
    InvalidRowCount { expected: usize, row_count: usize },
    #[error("Row {row} has {length} cells, {expected} expected")]
    InvalidRowLength {
        row: usize,
        length: usize,
        expected: usize,
    },
    #[error("Wrong number of cells: {expected} expected, {cell_count} given")]
    InvalidCellCount { expected: usize, cell_count: usize },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCellCharacter { invalid_character: char },
    #[error("Column {column} has a floating piece; pieces must rest on the bottom or another piece")]
    FloatingPiece { column: usize },
}

type ParseResult<T> = Result<T, PositionParseError>;

fn parse_cell(c: char) -> ParseResult<Option<Side>> {
    if c == EMPTY_CHAR {
        return Ok(None);
    }
    Side::from_char(c)
        .map(Some)
        .ok_or(PositionParseError::InvalidCellCharacter {
            invalid_character: c,
        })
}

fn check_gravity(board: &Board) -> ParseResult<()> {
    match board.floating_column() {
        Some(column) => Err(PositionParseError::FloatingPiece { column }),
        None => Ok(()),
    }
}

impl Board {
    /// Builds a board from `ROWS * COLS` cell characters listed top row first.
    /// Used by the `connect_four_position!` macro.
    pub fn from_cell_chars(chars: &[char]) -> ParseResult<Board> {
        if chars.len() != ROWS * COLS {
            return Err(PositionParseError::InvalidCellCount {
                expected: ROWS * COLS,
                cell_count: chars.len(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            board.put(i / COLS, i % COLS, parse_cell(c)?);
        }
        check_gravity(&board)?;
        Ok(board)
    }

    pub fn to_notation(&self) -> String {
        self.cells()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(EMPTY_CHAR, |side| side.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(&ROW_SEPARATOR.to_string())
    }
}

impl FromStr for Board {
    type Err = PositionParseError;

    fn from_str(notation: &str) -> ParseResult<Self> {
        let rows: Vec<&str> = notation.trim().split(ROW_SEPARATOR).collect();
        if rows.len() != ROWS {
            return Err(PositionParseError::InvalidRowCount {
                expected: ROWS,
                row_count: rows.len(),
            });
        }

        let mut chars = Vec::with_capacity(ROWS * COLS);
        for (row, cells) in rows.iter().enumerate() {
            let length = cells.chars().count();
            if length != COLS {
                return Err(PositionParseError::InvalidRowLength {
                    row,
                    length,
                    expected: COLS,
                });
            }
            chars.extend(cells.chars());
        }

        Board::from_cell_chars(&chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_position() {
        let board: Board = EMPTY_POSITION.parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_places_pieces_top_row_first() {
        let board: Board = "......./......./......./......./...O.../..XXO.."
            .parse()
            .unwrap();
        assert_eq!(board.get(5, 2), Some(Side::Human));
        assert_eq!(board.get(5, 3), Some(Side::Human));
        assert_eq!(board.get(5, 4), Some(Side::Computer));
        assert_eq!(board.get(4, 3), Some(Side::Computer));
        assert_eq!(board.piece_count(), 4);
    }

    #[test]
    fn test_to_notation_matches_input() {
        let notation = "......./......./......./......./...O.../..XXO..";
        let board: Board = notation.parse().unwrap();
        assert_eq!(board.to_notation(), notation);
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let err = "......./.......".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            PositionParseError::InvalidRowCount {
                expected: 6,
                row_count: 2
            }
        );
    }

    #[test]
    fn test_rejects_short_row() {
        let err = "......./......./......./......./....../......."
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(
            err,
            PositionParseError::InvalidRowLength {
                row: 4,
                length: 6,
                expected: 7
            }
        );
    }

    #[test]
    fn test_rejects_unknown_character() {
        let err = "......./......./......./......./......./...R..."
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(
            err,
            PositionParseError::InvalidCellCharacter {
                invalid_character: 'R'
            }
        );
    }

    #[test]
    fn test_rejects_floating_piece() {
        let err = "......./......./......./......./.X...../......."
            .parse::<Board>()
            .unwrap_err();
        assert_eq!(err, PositionParseError::FloatingPiece { column: 1 });
    }
}
