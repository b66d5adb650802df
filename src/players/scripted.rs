use std::collections::VecDeque;

use crate::error::PlayError;
use crate::game::{Board, Player};

use super::source::MoveSource;

/// A move source that replays a fixed list of columns, in order.
///
/// Columns are handed out verbatim, without checking them against the
/// board, so a script can also exercise the game loop's rejection path.
pub struct ScriptedMoves {
    player: Player,
    moves: VecDeque<usize>,
}

impl ScriptedMoves {
    pub fn new(player: Player, moves: impl IntoIterator<Item = usize>) -> Self {
        ScriptedMoves {
            player,
            moves: moves.into_iter().collect(),
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn get_move(&mut self, _board: &Board) -> Result<usize, PlayError> {
        self.moves
            .pop_front()
            .ok_or(PlayError::ScriptExhausted(self.player))
    }
}
