use super::board::{Board, DropError};
use super::player::Player;
use super::win::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

impl From<DropError> for MoveError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::ColumnFull => MoveError::ColumnFull,
            // A player's disc is never empty, so this only guards the mapping.
            DropError::InvalidColumn | DropError::EmptyDisc => {
                MoveError::InvalidColumn
            }
        }
    }
}

/// Where a disc landed and what it did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub row: usize,
    pub column: usize,
    pub outcome: Option<GameOutcome>,
}

/// Turn-by-turn Connect Four state machine.
///
/// No outcome means the game is in progress. Once an outcome is set the
/// board is frozen and `current_player` stays on whoever made the last move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with a chosen first player
    pub fn starting_with(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's disc in `column` and advance the game.
    ///
    /// The win check runs before the full-board check, so a final disc that
    /// both fills the grid and completes four in a row is a win.
    pub fn play(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;

        if check_win(&self.board, player.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            player,
            row,
            column,
            outcome: self.outcome,
        })
    }
}
