//! Playing games: the per-game loop over two move sources, and the
//! session driver that replays games and keeps the tally.

mod driver;
mod game_loop;
mod summary;

pub use driver::Session;
pub use game_loop::{GameLoop, Participant};
pub use summary::SessionSummary;
