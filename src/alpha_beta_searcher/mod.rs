//! Adversarial search for the computer's column.

mod search;


pub use search::{
    alpha_beta, minimax, search_best_move, SearchContext, SearchError, SearchResult, INFINITY,
    NEG_INFINITY,
};
