use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::{Board, Side};
use crate::game::engine::PlayedMove;

pub struct GameDisplay {
    buffer: String,
    /// Shown under every frame until cleared, so it survives the screen clear
    /// that starts the next frame.
    notice: Option<String>,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
            notice: None,
        }
    }

    pub fn set_notice(&mut self, notice: &str) {
        self.notice = Some(notice.to_string());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        // Writing to a String cannot fail.
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Builds one frame (board, turn, last move, optional search stats and any
    /// pending notice) and prints it in a single write.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Side,
        last_move: Option<PlayedMove>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.write_frame(board, current_turn, last_move, stats);
        print!("{}", self.buffer);
    }

    fn write_frame(
        &mut self,
        board: &Board,
        current_turn: Side,
        last_move: Option<PlayedMove>,
        stats: Option<&str>,
    ) {
        let _ = writeln!(self.buffer, "{}", board);
        let _ = writeln!(self.buffer, "Turn: {} ({})", current_turn, current_turn.to_char());

        if let Some(played) = last_move {
            let _ = writeln!(
                self.buffer,
                "Last move: {} dropped in column {}",
                played.side, played.column
            );
        }

        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }

        if let Some(notice) = &self.notice {
            let _ = writeln!(self.buffer, "\n{}", notice);
        }
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
