use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::alpha_beta_searcher::{search_best_move, SearchContext, SearchError, SearchResult};
use crate::board::error::BoardError;
use crate::board::{Board, MoveList, Side};
use crate::evaluate::{self, GameEnding};
use crate::input_handler::MoveInput;

pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

/// How a game is set up: search depth, starting grid, who moves first and the
/// seed for the search's random fallback.
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Board,
    pub first_turn: Side,
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            starting_position: Board::default(),
            first_turn: Side::Human,
            seed: None,
        }
    }
}

/// A move that has been played: who dropped the piece and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub side: Side,
    pub row: usize,
    pub column: usize,
}

/// The live grid, whose turn it is, and every move played so far.
#[derive(Clone)]
struct GameState {
    board: Board,
    turn: Side,
    move_history: Vec<PlayedMove>,
}

impl GameState {
    fn new(starting_position: Board, first_turn: Side) -> Self {
        Self {
            board: starting_position,
            turn: first_turn,
            move_history: Vec::new(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid move: column {column}")]
    InvalidMove { column: usize },
    #[error("The game is already over")]
    GameOver,
    #[error("Board error: {error:?}")]
    BoardError { error: BoardError },
    #[error("Search error: {error:?}")]
    SearchError { error: SearchError },
}

/// Owns the board and the search context and keeps track of whose turn it is.
pub struct Engine {
    state: GameState,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let search_context = match config.seed {
            Some(seed) => SearchContext::with_seed(config.search_depth, seed),
            None => SearchContext::new(config.search_depth),
        };

        info!(
            "new game: depth {}, {} moves first",
            config.search_depth, config.first_turn
        );

        Self {
            state: GameState::new(config.starting_position, config.first_turn),
            search_context,
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> Side {
        self.state.turn
    }

    pub fn valid_moves(&self) -> MoveList {
        self.state.board.legal_moves()
    }

    pub fn move_history(&self) -> &[PlayedMove] {
        &self.state.move_history
    }

    pub fn last_move(&self) -> Option<PlayedMove> {
        self.state.move_history.last().copied()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.state.board)
    }

    /// Drops a piece for the side to move. Out of range and full columns are
    /// rejected without touching the board or the turn.
    pub fn make_move(&mut self, column: usize) -> Result<PlayedMove, EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }
        if !self.state.board.is_legal(column) {
            return Err(EngineError::InvalidMove { column });
        }

        let side = self.state.turn;
        let (row, column) = self
            .state
            .board
            .apply_move(column, side)
            .map_err(|error| EngineError::BoardError { error })?;

        let played = PlayedMove { side, row, column };
        debug!("{} played column {} (row {})", side, column, row);
        self.state.move_history.push(played);
        self.state.turn = side.opposite();

        if let Some(ending) = self.check_game_over() {
            info!("game over after {} moves: {:?}", self.state.move_history.len(), ending);
        }

        Ok(played)
    }

    /// Searches for the best column for the side to move without playing it.
    pub fn get_best_move(&mut self) -> Result<SearchResult, EngineError> {
        let turn = self.state.turn;
        search_best_move(&mut self.search_context, &mut self.state.board, turn).map_err(
            |error| match error {
                SearchError::GameOver => EngineError::GameOver,
                error => EngineError::SearchError { error },
            },
        )
    }

    pub fn make_best_move(&mut self) -> Result<PlayedMove, EngineError> {
        let best_move = self.get_best_move()?;
        self.make_move(best_move.column)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<PlayedMove, EngineError> {
        match input {
            MoveInput::Column(column) => self.make_move(column),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Snapshot of the most recent search, for display under the board.
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}
