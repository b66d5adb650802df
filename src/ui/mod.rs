//! Text console I/O: a line-based console over any reader/writer pair and
//! the render sink that game loops draw into.

mod console;
mod sink;

pub use console::{Console, SharedConsole};
pub use sink::{RecordingSink, RenderSink};
