use crate::board::window::WINDOWS;
use crate::board::{Board, Side, COLS, ROWS};

use self::window_values::{window_value, CENTER_PIECE_BONUS};

pub mod window_values;

// These scores are far larger than anything the window heuristic can reach, so
// the search always prefers (or avoids) a decided game over a positional edge.
pub const COMPUTER_WINS: i32 = 1_000_000;
pub const HUMAN_WINS: i32 = -1_000_000;
pub const DRAW: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Win(Side),
    Draw,
}

/// True when any four-cell window, in any direction, is held entirely by `side`.
pub fn has_won(board: &Board, side: Side) -> bool {
    WINDOWS.iter().any(|window| window.is_filled_by(board, side))
}

pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Side::Human) || has_won(board, Side::Computer) || board.is_full()
}

/// Returns how the game ended, or `None` if it is still in progress.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    if has_won(board, Side::Computer) {
        return Some(GameEnding::Win(Side::Computer));
    }
    if has_won(board, Side::Human) {
        return Some(GameEnding::Win(Side::Human));
    }
    if board.legal_moves().is_empty() {
        return Some(GameEnding::Draw);
    }
    None
}

/// Score of a finished game from the computer's (maximizing) perspective.
pub fn terminal_score(board: &Board) -> Option<i32> {
    game_ending(board).map(|ending| match ending {
        GameEnding::Win(Side::Computer) => COMPUTER_WINS,
        GameEnding::Win(Side::Human) => HUMAN_WINS,
        GameEnding::Draw => DRAW,
    })
}

/// Heuristic value of the position for `side`. Rewards pieces in the center
/// column and partially filled windows, and penalizes open opponent threes.
/// Not terminal aware; the search only calls it on undecided leaves.
pub fn score(board: &Board, side: Side) -> i32 {
    center_score(board, side)
        + WINDOWS
            .iter()
            .map(|window| window_value(window.tally(board, side)))
            .sum::<i32>()
}

fn center_score(board: &Board, side: Side) -> i32 {
    let center = COLS / 2;
    let count = (0..ROWS)
        .filter(|&row| board.get(row, center) == Some(side))
        .count() as i32;
    count * CENTER_PIECE_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect_four_position;

    #[test]
    fn test_horizontal_win() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            ..XXXX.
        };
        assert!(has_won(&board, Side::Human));
        assert!(!has_won(&board, Side::Computer));
    }

    #[test]
    fn test_vertical_win() {
        let board = connect_four_position! {
            .......
            .......
            ......O
            ......O
            ......O
            X.X...O
        };
        assert!(has_won(&board, Side::Computer));
        assert!(!has_won(&board, Side::Human));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = connect_four_position! {
            .......
            .......
            O......
            XO.....
            XXO....
            XXXO...
        };
        assert!(has_won(&board, Side::Computer));
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let board = connect_four_position! {
            .......
            .......
            ......X
            .....XO
            ....XOO
            ...XOOO
        };
        assert!(has_won(&board, Side::Human));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let horizontal = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            XXX.XXX
        };
        let vertical = connect_four_position! {
            .......
            .......
            .......
            O......
            O......
            O......
        };
        let down_right = connect_four_position! {
            .......
            .......
            .......
            XO.....
            XXO....
            XXXO...
        };
        let up_right = connect_four_position! {
            .......
            .......
            .......
            .....XO
            ....XOO
            ...XOOO
        };
        assert!(!has_won(&horizontal, Side::Human));
        assert!(!has_won(&vertical, Side::Computer));
        assert!(!has_won(&down_right, Side::Computer));
        assert!(!has_won(&up_right, Side::Human));
    }

    #[test]
    fn test_win_is_terminal() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            OOOO...
        };
        assert!(is_terminal(&board));
        assert_eq!(game_ending(&board), Some(GameEnding::Win(Side::Computer)));
        assert_eq!(terminal_score(&board), Some(COMPUTER_WINS));
    }

    #[test]
    fn test_full_board_without_a_line_is_a_draw() {
        let board = connect_four_position! {
            XXOOXXO
            OOXXOOX
            XXOOXXO
            OOXXOOX
            XXOOXXO
            OOXXOOX
        };
        assert!(!has_won(&board, Side::Human));
        assert!(!has_won(&board, Side::Computer));
        assert!(is_terminal(&board));
        assert_eq!(game_ending(&board), Some(GameEnding::Draw));
        assert_eq!(terminal_score(&board), Some(DRAW));
    }

    #[test]
    fn test_game_in_progress_is_not_terminal() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            ...O...
            ..XXO..
        };
        assert!(!is_terminal(&board));
        assert_eq!(game_ending(&board), None);
        assert_eq!(terminal_score(&board), None);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(score(&board, Side::Computer), 0);
        assert_eq!(score(&board, Side::Human), 0);
    }

    #[test]
    fn test_center_piece_bonus() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            ...O...
        };
        assert_eq!(score(&board, Side::Computer), 6);
        assert_eq!(score(&board, Side::Human), 0);
    }

    #[test]
    fn test_open_two_scores_each_window() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            ..OO...
        };
        // Center bonus plus three horizontal windows holding both pieces.
        assert_eq!(score(&board, Side::Computer), 6 + 3 * 5);
    }

    #[test]
    fn test_opponent_open_three_is_penalized() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            XXX....
        };
        assert_eq!(score(&board, Side::Computer), -80);
        assert_eq!(score(&board, Side::Human), 10 + 5);
    }
}
