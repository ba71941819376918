use super::{Board, COLS};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells().iter() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', |side| side.to_char()).to_string())
                .collect();
            writeln!(f, " {} ", cells.join(" | "))?;
        }
        writeln!(f, "{}", "-".repeat(COLS * 4 - 1))?;
        let labels: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, " {} ", labels.join("   "))
    }
}

#[macro_export]
macro_rules! connect_four_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // The macro input is laid out as it is displayed, top row first, which
        // is also the order the grid stores its rows in.
        $crate::board::Board::from_cell_chars(&cells).unwrap()
    }};
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Side};

    #[test]
    fn test_macro_matches_notation() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            ...O...
            ..XXO..
        };
        let parsed: Board = "......./......./......./......./...O.../..XXO.."
            .parse()
            .unwrap();
        assert_eq!(board, parsed);
        assert_eq!(board.get(4, 3), Some(Side::Computer));
    }

    #[test]
    fn test_display_lists_columns() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            X.....O
        };
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[5], " X | . | . | . | . | . | O ");
        assert_eq!(lines[7], " 0   1   2   3   4   5   6 ");
    }
}
