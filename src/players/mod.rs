//! Move sources: the `MoveSource` trait plus console and scripted players.

mod console;
mod scripted;
mod source;

pub use console::ConsolePrompt;
pub use scripted::ScriptedMoves;
pub use source::MoveSource;
