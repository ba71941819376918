//! Every four-cell line segment on the grid.
//!
//! Win detection and the positional evaluator both walk the same set of
//! windows, so the coordinates are computed once and shared.

use once_cell::sync::Lazy;

use super::{Board, Side, COLS, ROWS};

pub const WINDOW_LENGTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right within a row.
    Horizontal,
    /// Top to bottom within a column.
    Vertical,
    /// Row and column both increase.
    DiagonalDownRight,
    /// Row decreases while column increases, i.e. the `/` diagonal.
    DiagonalUpRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalUpRight,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub direction: Direction,
    pub cells: [(usize, usize); WINDOW_LENGTH],
}

impl Window {
    fn new(direction: Direction, row: usize, col: usize) -> Self {
        let mut cells = [(0, 0); WINDOW_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = match direction {
                Direction::Horizontal => (row, col + i),
                Direction::Vertical => (row + i, col),
                Direction::DiagonalDownRight => (row + i, col + i),
                Direction::DiagonalUpRight => (row - i, col + i),
            };
        }
        Self { direction, cells }
    }

    pub fn pieces(&self, board: &Board) -> [Option<Side>; WINDOW_LENGTH] {
        let mut pieces = [None; WINDOW_LENGTH];
        for (piece, &(row, col)) in pieces.iter_mut().zip(self.cells.iter()) {
            *piece = board.get(row, col);
        }
        pieces
    }

    /// Counts the cells held by `side`, by its opponent, and left empty.
    pub fn tally(&self, board: &Board, side: Side) -> WindowTally {
        let mut tally = WindowTally::default();
        for piece in self.pieces(board).iter() {
            match piece {
                Some(s) if *s == side => tally.own += 1,
                Some(_) => tally.opponent += 1,
                None => tally.empty += 1,
            }
        }
        tally
    }

    pub fn is_filled_by(&self, board: &Board, side: Side) -> bool {
        self.cells
            .iter()
            .all(|&(row, col)| board.get(row, col) == Some(side))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowTally {
    pub own: u8,
    pub opponent: u8,
    pub empty: u8,
}

fn generate_windows() -> Vec<Window> {
    let reach = WINDOW_LENGTH - 1;
    let mut windows = Vec::new();

    for row in 0..ROWS {
        for col in 0..COLS - reach {
            windows.push(Window::new(Direction::Horizontal, row, col));
        }
    }
    for col in 0..COLS {
        for row in 0..ROWS - reach {
            windows.push(Window::new(Direction::Vertical, row, col));
        }
    }
    for row in 0..ROWS - reach {
        for col in 0..COLS - reach {
            windows.push(Window::new(Direction::DiagonalDownRight, row, col));
        }
    }
    for row in reach..ROWS {
        for col in 0..COLS - reach {
            windows.push(Window::new(Direction::DiagonalUpRight, row, col));
        }
    }

    windows
}

pub static WINDOWS: Lazy<Vec<Window>> = Lazy::new(generate_windows);

#[cfg(test)]
mod tests {
    use super::*;

    fn count(direction: Direction) -> usize {
        WINDOWS.iter().filter(|w| w.direction == direction).count()
    }

    #[test]
    fn test_window_counts() {
        assert_eq!(count(Direction::Horizontal), 24);
        assert_eq!(count(Direction::Vertical), 21);
        assert_eq!(count(Direction::DiagonalDownRight), 12);
        assert_eq!(count(Direction::DiagonalUpRight), 12);
        assert_eq!(WINDOWS.len(), 69);
        assert_eq!(Direction::ALL.iter().map(|&d| count(d)).sum::<usize>(), 69);
    }

    #[test]
    fn test_windows_stay_on_the_grid() {
        for window in WINDOWS.iter() {
            for &(row, col) in window.cells.iter() {
                assert!(row < ROWS && col < COLS, "{:?} leaves the grid", window);
            }
        }
    }

    #[test]
    fn test_up_right_diagonal_starts_at_bottom() {
        let window = Window::new(Direction::DiagonalUpRight, 5, 0);
        assert_eq!(window.cells, [(5, 0), (4, 1), (3, 2), (2, 3)]);
    }
}
