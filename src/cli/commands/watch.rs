//! Watch command - watch the computer play against itself.

use std::time::Duration;

use connect4::board::notation::EMPTY_POSITION;
use connect4::board::{Board, Side};
use connect4::game::input_source::EngineInput;
use connect4::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(
        short = "f",
        long = "first",
        default_value = "computer",
        help = "Which side moves first: human, computer or random"
    )]
    pub first: Side,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.starting_position, self.first, self.seed);
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
