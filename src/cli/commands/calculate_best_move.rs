//! Calculate best move command - determine the best column for a position.

use connect4::board::{Board, Side};
use connect4::game::engine::{Engine, EngineConfig};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "position")]
    pub starting_position: Board,
    #[structopt(
        short,
        long,
        default_value = "computer",
        help = "The side to move: human or computer"
    )]
    pub side: Side,
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            starting_position: self.starting_position,
            first_turn: self.side,
            seed: self.seed,
        };
        let mut engine = Engine::with_config(config);

        if engine.valid_moves().is_empty() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.get_best_move() {
            Ok(best_move) => println!("column: {}, score: {}", best_move.column, best_move.score),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
