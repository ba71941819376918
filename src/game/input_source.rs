use crate::board::Side;
use crate::input_handler::{InputError, MoveInput};

pub trait InputSource {
    /// `Ok(None)` means the input could not be understood and the player
    /// should be asked again.
    fn get_move(&self, current_turn: Side) -> Result<Option<MoveInput>, InputError>;
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Side) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

/// Reads columns from stdin for `human_side` and lets the engine move for the
/// other side.
pub struct ConditionalInput {
    pub human_side: Side,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Side) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_side {
            match crate::input_handler::parse_move_input() {
                Ok(move_input) => Ok(Some(move_input)),
                Err(InputError::InvalidInput { .. }) => Ok(None),
                Err(error) => Err(error),
            }
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}
