//! Core Connect Four game logic: board representation, win detection,
//! player identities, and the turn-by-turn state machine.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, DropError, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, Placement};
pub use win::check_win;
