use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::alpha_beta_searcher::{
    alpha_beta, minimax, SearchContext, SearchError, INFINITY, NEG_INFINITY,
};
use crate::board::{Board, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

/// Number of positions visited by a search of `depth` plies from `board`, with
/// the computer to move.
pub fn count_positions(
    board: &mut Board,
    depth: u8,
    strategy: CountPositionsStrategy,
) -> Result<usize, SearchError> {
    let maximizing = Side::Computer.maximize_score();
    match strategy {
        CountPositionsStrategy::All => {
            let mut positions = 0;
            minimax(board, depth, maximizing, &mut positions)?;
            Ok(positions)
        }
        CountPositionsStrategy::AlphaBeta => {
            let mut context = SearchContext::with_seed(depth, 0);
            alpha_beta(&mut context, board, depth, NEG_INFINITY, INFINITY, maximizing)?;
            Ok(context.searched_position_count())
        }
    }
}

pub fn run_count_positions(depth: u8, strategy: CountPositionsStrategy) {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let mut board = Board::default();

        let starting_time = Instant::now();
        let count = match count_positions(&mut board, depth, strategy) {
            Ok(count) => count,
            Err(error) => {
                eprintln!("depth {}: {}", depth, error);
                return;
            }
        };
        let duration = starting_time.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}
