//! Shared utilities for CLI commands.

use connect4::board::{Board, Side};
use connect4::game::engine::EngineConfig;
use connect4::game::input_source::InputSource;
use connect4::game::r#loop::GameLoop;
use connect4::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(
    depth: u8,
    starting_position: Board,
    first_turn: Side,
    seed: Option<u64>,
) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        starting_position,
        first_turn,
        seed,
    }
}
