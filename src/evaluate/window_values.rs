use crate::board::window::WindowTally;

/// Score for each of the evaluating side's pieces in the center column.
pub const CENTER_PIECE_BONUS: i32 = 6;

pub const FOUR_IN_WINDOW: i32 = 100;
pub const THREE_WITH_ONE_EMPTY: i32 = 10;
pub const TWO_WITH_TWO_EMPTY: i32 = 5;
/// Opponent three with the fourth cell still open.
pub const OPPONENT_THREE_WITH_ONE_EMPTY: i32 = -80;

/// Scores one window from the evaluating side's point of view. The opponent
/// penalty is independent of the side's own alignment bonuses.
pub fn window_value(tally: WindowTally) -> i32 {
    let own = match (tally.own, tally.empty) {
        (4, _) => FOUR_IN_WINDOW,
        (3, 1) => THREE_WITH_ONE_EMPTY,
        (2, 2) => TWO_WITH_TWO_EMPTY,
        _ => 0,
    };

    let opponent = match (tally.opponent, tally.empty) {
        (3, 1) => OPPONENT_THREE_WITH_ONE_EMPTY,
        _ => 0,
    };

    own + opponent
}
