use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Destination for board snapshots and game messages.
pub trait RenderSink {
    /// Display the output of [`Board::render`](crate::game::Board::render).
    fn show_board(&mut self, rendered: &str) -> io::Result<()>;

    /// Display a single line of game text.
    fn show_message(&mut self, message: &str) -> io::Result<()>;
}

impl<T: RenderSink> RenderSink for Rc<RefCell<T>> {
    fn show_board(&mut self, rendered: &str) -> io::Result<()> {
        self.borrow_mut().show_board(rendered)
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.borrow_mut().show_message(message)
    }
}

/// Sink that keeps everything in memory, one entry per call.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub boards: Vec<String>,
    pub messages: Vec<String>,
}

impl RenderSink for RecordingSink {
    fn show_board(&mut self, rendered: &str) -> io::Result<()> {
        self.boards.push(rendered.to_string());
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
