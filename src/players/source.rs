use crate::error::PlayError;
use crate::game::Board;

/// Anything that can choose a column for one side of a game.
///
/// Implementations are expected to return a column for which
/// [`Board::is_column_valid`] holds, re-asking their own input as needed.
/// The game loop still checks the placement and asks again if it is refused.
pub trait MoveSource {
    /// Produce the next column (0-based) for the given board.
    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError>;
}
