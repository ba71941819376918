//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "connect4",
    about = "A connect four engine using minimax search with alpha-beta pruning"
)]
pub enum Connect4 {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for its column using alpha-beta pruning at the given `--depth` (default: 4). You move first unless you choose otherwise with `--first`. The initial position can be given with `--position` (default: empty board)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4). The human side searches as the minimizing player."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Print the best column and its score for the side to move in the position given with `--position` (required). The search depth can be set with `--depth` (default: 4)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions visited from the empty board for each depth up to `--depth` (default: 4), and report the time it took. By default every position is searched. The routine can be run with alpha-beta pruning by selecting `--strategy alpha-beta`."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Connect4 {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
