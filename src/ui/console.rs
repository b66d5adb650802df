use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crossterm::style::{style, Color, Stylize};

use super::sink::RenderSink;

/// Console handle shared by both prompting players, the render sink and the
/// replay prompt. Borrows are never held across calls into other components.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

/// Line-oriented text console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            color: false,
        }
    }

    /// Enable ANSI colouring of disc glyphs.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Read one line with surrounding whitespace removed. `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD, leaving rejection to the caller.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Write a line of text and flush so the player sees it before we block on input.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Write a rendered board, colouring `R` and `Y` when enabled.
    pub fn write_board(&mut self, rendered: &str) -> io::Result<()> {
        if !self.color {
            write!(self.output, "{rendered}")?;
            return self.output.flush();
        }

        for ch in rendered.chars() {
            match ch {
                'R' => write!(self.output, "{}", style(ch).with(Color::Red).bold())?,
                'Y' => write!(self.output, "{}", style(ch).with(Color::Yellow).bold())?,
                '.' => write!(self.output, "{}", style(ch).with(Color::DarkGrey))?,
                _ => write!(self.output, "{ch}")?,
            }
        }
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> RenderSink for Console<R, W> {
    fn show_board(&mut self, rendered: &str) -> io::Result<()> {
        self.write_board(rendered)
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.say(message)
    }
}
