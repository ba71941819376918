//! Play command - play a game against the computer.

use connect4::board::notation::EMPTY_POSITION;
use connect4::board::{Board, Side};
use connect4::game::input_source::ConditionalInput;
use connect4::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(
        short = "f",
        long = "first",
        default_value = "human",
        help = "Who moves first: human, computer or random"
    )]
    pub first: Side,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.starting_position, self.first, self.seed);
        run_game_loop(
            ConditionalInput {
                human_side: Side::Human,
            },
            ConditionalStatsRenderer {
                human_side: Side::Human,
            },
            config,
        );
    }
}
