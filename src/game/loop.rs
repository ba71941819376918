use log::warn;

use crate::evaluate::GameEnding;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

// Drawn into the next frame, since rendering clears the screen.
const INVALID_MOVE: &str = "Invalid move. Try again.";
const INVALID_NUMBER: &str = "Please enter a valid number.";

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
        }
    }

    /// Plays until the game ends or the player quits. Returns how the game
    /// ended, or `None` if it was abandoned.
    pub fn run(&mut self) -> Option<GameEnding> {
        loop {
            self.renderer.render(&mut self.ui, &self.engine);

            if let Some(ending) = self.engine.check_game_over() {
                println!("{}", self.renderer.announce(ending));
                return Some(ending);
            }

            let current_turn = self.engine.turn();
            match self.input_source.get_move(current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(_) => {
                        self.ui.clear_notice();
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(EngineError::InvalidMove { .. }) => self.ui.set_notice(INVALID_MOVE),
                    Err(error) => {
                        warn!("stopping game: {}", error);
                        println!("error: {}", error);
                        return None;
                    }
                },
                Ok(None) => self.ui.set_notice(INVALID_NUMBER),
                Err(InputError::UserExit) => {
                    println!("Goodbye!");
                    return None;
                }
                Err(error) => {
                    println!("error: {}", error);
                    return None;
                }
            }
        }
    }
}
