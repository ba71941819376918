pub mod error;
pub mod notation;
pub mod side;
pub mod window;

mod display;

#[cfg(test)]
mod tests;

use error::BoardError;
use smallvec::SmallVec;

pub use side::Side;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column indices in ascending order. Never holds more than `COLS` entries.
pub type MoveList = SmallVec<[usize; COLS]>;

/// The 6x7 grid. Row 0 is the top row and row `ROWS - 1` the bottom, so pieces
/// settle at high row indices first. Every column is kept contiguous from the
/// bottom up; no occupied cell ever sits above an empty one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Side>; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Side> {
        self.cells[row][col]
    }

    pub fn cells(&self) -> &[[Option<Side>; COLS]; ROWS] {
        &self.cells
    }

    pub fn is_legal(&self, column: usize) -> bool {
        column < COLS && self.cells[0][column].is_none()
    }

    pub fn legal_moves(&self) -> MoveList {
        (0..COLS).filter(|&column| self.is_legal(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| !self.is_legal(column))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Drops a piece for `side` into `column`. Returns the `(row, column)` the
    /// piece landed on.
    pub fn apply_move(&mut self, column: usize, side: Side) -> Result<(usize, usize), BoardError> {
        if column >= COLS {
            return Err(BoardError::ColumnOutOfRange { column });
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column].is_none())
            .ok_or(BoardError::ColumnFull { column })?;

        self.cells[row][column] = Some(side);
        Ok((row, column))
    }

    /// Removes the topmost piece of `column`, which under gravity is always the
    /// most recent one dropped there. Returns the row that was cleared.
    pub fn undo_move(&mut self, column: usize) -> Result<usize, BoardError> {
        if column >= COLS {
            return Err(BoardError::ColumnOutOfRange { column });
        }

        let row = (0..ROWS)
            .find(|&row| self.cells[row][column].is_some())
            .ok_or(BoardError::ColumnEmpty { column })?;

        self.cells[row][column] = None;
        Ok(row)
    }

    /// Places a piece directly, bypassing gravity. Only the notation parser
    /// and the position macro use this, and both validate the result.
    pub(crate) fn put(&mut self, row: usize, col: usize, side: Option<Side>) {
        self.cells[row][col] = side;
    }

    /// Finds the first column holding a piece above an empty cell, if any.
    pub fn floating_column(&self) -> Option<usize> {
        (0..COLS).find(|&col| {
            (1..ROWS).any(|row| self.cells[row - 1][col].is_some() && self.cells[row][col].is_none())
        })
    }
}
