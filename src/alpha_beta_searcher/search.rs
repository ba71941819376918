//! Depth-limited minimax with alpha-beta pruning.
//!
//! The computer is always the maximizing side and the human the minimizing
//! side, so every score is read from the computer's point of view. Alpha is
//! the best score the maximizer can already guarantee on the current path and
//! beta the best the minimizer can guarantee. Once `alpha >= beta` the
//! remaining siblings cannot change the parent's choice and are skipped.
//!
//! The board is searched in place. Each speculative move is applied, searched
//! and undone before the next sibling is tried, so every frame sees exactly the
//! moves on its path from the root and the caller gets its board back intact.

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::error::BoardError;
use crate::board::{Board, Side};
use crate::evaluate;

pub const NEG_INFINITY: i32 = i32::MIN;
pub const INFINITY: i32 = i32::MAX;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("the game is already over")]
    GameOver,
    #[error("board error during search: {0}")]
    Board(#[from] BoardError),
}

/// Column chosen by a root search and the score it was chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub score: i32,
}

/// Statistics collected during search.
#[derive(Debug, Default)]
struct SearchStats {
    position_count: usize,
    cutoff_count: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        self.position_count = 0;
        self.cutoff_count = 0;
        self.last_score = None;
        self.last_duration = None;
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

/// Holds the search depth, the random source used for the fallback column, and
/// the statistics of the most recent search.
pub struct SearchContext {
    depth: u8,
    rng: StdRng,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            rng: StdRng::from_entropy(),
            stats: SearchStats::default(),
        }
    }

    /// A context whose fallback choices are reproducible.
    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self {
            depth,
            rng: StdRng::seed_from_u64(seed),
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    fn random_fallback(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Applies a move, executes a closure with the new board, then undoes the move.
fn with_move_applied<F, R>(
    board: &mut Board,
    column: usize,
    side: Side,
    f: F,
) -> Result<R, SearchError>
where
    F: FnOnce(&mut Board) -> Result<R, SearchError>,
{
    board.apply_move(column, side)?;
    let result = f(board);
    board.undo_move(column)?;
    result
}

/// Leaf value: the decided result if the game is over, otherwise the heuristic
/// from the computer's perspective.
fn leaf_score(board: &Board) -> i32 {
    evaluate::terminal_score(board).unwrap_or_else(|| evaluate::score(board, Side::Computer))
}

/// Recursive alpha-beta search. Returns the best column for the side to move
/// (`None` at leaves) and its score.
///
/// Ties keep the first column found in ascending order. Before any child is
/// searched the best column is seeded with a random legal column, so a column
/// is still returned if no child ever beats the initial bound.
pub fn alpha_beta(
    context: &mut SearchContext,
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> Result<(Option<usize>, i32), SearchError> {
    context.stats.position_count += 1;

    if depth == 0 || evaluate::is_terminal(board) {
        return Ok((None, leaf_score(board)));
    }

    let candidates = board.legal_moves();
    let mut best_column = context.random_fallback(&candidates);

    if maximizing {
        let mut best_score = NEG_INFINITY;
        for &column in candidates.iter() {
            let (_, score) = with_move_applied(board, column, Side::Computer, |board| {
                alpha_beta(context, board, depth - 1, alpha, beta, false)
            })?;

            if score > best_score {
                best_score = score;
                best_column = Some(column);
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                context.stats.cutoff_count += 1;
                break;
            }
        }
        Ok((best_column, best_score))
    } else {
        let mut best_score = INFINITY;
        for &column in candidates.iter() {
            let (_, score) = with_move_applied(board, column, Side::Human, |board| {
                alpha_beta(context, board, depth - 1, alpha, beta, true)
            })?;

            if score < best_score {
                best_score = score;
                best_column = Some(column);
            }
            beta = beta.min(best_score);
            if alpha >= beta {
                context.stats.cutoff_count += 1;
                break;
            }
        }
        Ok((best_column, best_score))
    }
}

/// Plain minimax over the same tree without any pruning. Counts every visited
/// position into `positions`.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    positions: &mut usize,
) -> Result<i32, SearchError> {
    *positions += 1;

    if depth == 0 || evaluate::is_terminal(board) {
        return Ok(leaf_score(board));
    }

    let side = if maximizing { Side::Computer } else { Side::Human };
    let mut best_score = if maximizing { NEG_INFINITY } else { INFINITY };

    for column in board.legal_moves() {
        let score = with_move_applied(board, column, side, |board| {
            minimax(board, depth - 1, !maximizing, positions)
        })?;
        best_score = if maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    Ok(best_score)
}

/// Searches for the best column for `side` at the context's depth, using the
/// full (-inf, +inf) window. The human side searches as the minimizer.
#[must_use = "search returns the best column found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &mut Board,
    side: Side,
) -> Result<SearchResult, SearchError> {
    let depth = context.search_depth();
    debug!("alpha-beta search depth: {} for {}", depth, side);

    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }
    if board.legal_moves().is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    if evaluate::is_terminal(board) {
        return Err(SearchError::GameOver);
    }

    context.reset_stats();
    let start = Instant::now();

    let (column, score) = alpha_beta(
        context,
        board,
        depth,
        NEG_INFINITY,
        INFINITY,
        side.maximize_score(),
    )?;
    let column = column.ok_or(SearchError::NoAvailableMoves)?;

    context.stats.record_result(score, start.elapsed());
    debug!(
        "best column: {}, score: {}, positions searched: {}, cutoffs: {}",
        column,
        score,
        context.searched_position_count(),
        context.cutoff_count()
    );

    Ok(SearchResult { column, score })
}
