use std::time::Duration;

use crate::board::Side;
use crate::evaluate::GameEnding;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, SearchStats};

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine);
    fn frame_delay(&self) -> Option<Duration>;

    fn announce(&self, ending: GameEnding) -> String {
        match ending {
            GameEnding::Win(Side::Human) => "Human wins!".to_string(),
            GameEnding::Win(Side::Computer) => "Computer wins!".to_string(),
            GameEnding::Draw => "It's a draw!".to_string(),
        }
    }
}

fn format_stats(stats: &SearchStats) -> String {
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats.cutoffs,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

/// Shows search stats under every frame. Used when the computer plays both
/// sides.
pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine) {
        let stats_display = format_stats(&engine.get_search_stats());
        ui.render_game_state(
            engine.board(),
            engine.turn(),
            engine.last_move(),
            Some(&stats_display),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Human against computer. Announces the result from the human's point of
/// view.
pub struct ConditionalStatsRenderer {
    pub human_side: Side,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine) {
        let stats_display = format_stats(&engine.get_search_stats());
        ui.render_game_state(
            engine.board(),
            engine.turn(),
            engine.last_move(),
            Some(&stats_display),
        );
        if engine.turn() == self.human_side && engine.check_game_over().is_none() {
            println!("Enter a column, or q to quit.");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }

    fn announce(&self, ending: GameEnding) -> String {
        match ending {
            GameEnding::Win(side) if side == self.human_side => "You win!".to_string(),
            GameEnding::Win(_) => "Computer wins!".to_string(),
            GameEnding::Draw => "It's a draw!".to_string(),
        }
    }
}
