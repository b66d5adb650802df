use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::PlayError;
use crate::game::{Board, COLS};
use crate::ui::SharedConsole;

use super::source::MoveSource;

/// What a player typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Column(usize),
    Quit,
}

/// Parse a 1-based column number (or a quit command) into a 0-based entry.
fn parse_entry(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Entry::Quit);
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=COLS).contains(&n) => Some(Entry::Column(n - 1)),
        _ => None,
    }
}

/// A human player typing column numbers at the console.
pub struct ConsolePrompt<R, W> {
    name: String,
    console: SharedConsole<R, W>,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(name: impl Into<String>, console: SharedConsole<R, W>) -> Self {
        ConsolePrompt {
            name: name.into(),
            console,
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePrompt<R, W> {
    fn get_move(&mut self, board: &Board) -> Result<usize, PlayError> {
        let mut console = self.console.borrow_mut();
        console.say(&format!("{}, enter your move (1-{COLS}): ", self.name))?;

        loop {
            let line = console.read_line()?.ok_or(PlayError::EndOfInput)?;
            match parse_entry(&line) {
                Some(Entry::Quit) => return Err(PlayError::Quit(self.name.clone())),
                Some(Entry::Column(col)) if board.is_column_valid(col) => return Ok(col),
                Some(Entry::Column(col)) => {
                    debug!(player = %self.name, column = col, "column is full");
                    console.say("No Room! Try a different column.")?;
                    console.say(&format!("{}, enter your move (1-{COLS}): ", self.name))?;
                }
                None => {
                    debug!(player = %self.name, input = %line, "unparseable move");
                    console.say(&format!(
                        "No Available Move. Enter a number between 1 and {COLS}: "
                    ))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};
    use crate::ui::Console;
    use std::io::Cursor;

    type TestConsole = SharedConsole<Cursor<Vec<u8>>, Vec<u8>>;

    fn shared(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).into_shared()
    }

    fn transcript(console: &TestConsole) -> String {
        String::from_utf8(console.borrow().output().clone()).unwrap()
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("1"), Some(Entry::Column(0)));
        assert_eq!(parse_entry(" 7 "), Some(Entry::Column(6)));
        assert_eq!(parse_entry("Q"), Some(Entry::Quit));
        assert_eq!(parse_entry("quit"), Some(Entry::Quit));
        assert_eq!(parse_entry("0"), None);
        assert_eq!(parse_entry("8"), None);
        assert_eq!(parse_entry("-1"), None);
        assert_eq!(parse_entry("three"), None);
        assert_eq!(parse_entry(""), None);
    }

    #[test]
    fn test_prompt_converts_to_zero_based() {
        let console = shared("4\n");
        let mut prompt = ConsolePrompt::new("Player 1", console.clone());
        assert_eq!(prompt.get_move(&Board::new()).unwrap(), 3);
        assert_eq!(transcript(&console), "Player 1, enter your move (1-7): \n");
    }

    #[test]
    fn test_prompt_retries_bad_text() {
        let console = shared("abc\n9\n\n2\n");
        let mut prompt = ConsolePrompt::new("Player 2", console.clone());
        assert_eq!(prompt.get_move(&Board::new()).unwrap(), 1);
        let out = transcript(&console);
        assert_eq!(out.matches("No Available Move").count(), 3);
    }

    #[test]
    fn test_prompt_retries_invalid_utf8() {
        let bytes = vec![0xff, 0xfe, b'\n', b'4', b'\n'];
        let console = Console::new(Cursor::new(bytes), Vec::new()).into_shared();
        let mut prompt = ConsolePrompt::new("Player 1", console.clone());
        assert_eq!(prompt.get_move(&Board::new()).unwrap(), 3);
        assert_eq!(transcript(&console).matches("No Available Move").count(), 1);
    }

    #[test]
    fn test_prompt_retries_full_column() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }
        let console = shared("1\n5\n");
        let mut prompt = ConsolePrompt::new("Player 1", console.clone());
        assert_eq!(prompt.get_move(&board).unwrap(), 4);
        let out = transcript(&console);
        assert!(out.contains("No Room! Try a different column."));
        assert_eq!(out.matches("enter your move").count(), 2);
    }

    #[test]
    fn test_prompt_quit() {
        let console = shared("q\n");
        let mut prompt = ConsolePrompt::new("Player 1", console);
        let err = prompt.get_move(&Board::new()).unwrap_err();
        assert!(matches!(err, PlayError::Quit(name) if name == "Player 1"));
    }

    #[test]
    fn test_prompt_end_of_input() {
        let console = shared("x\n");
        let mut prompt = ConsolePrompt::new("Player 1", console);
        let err = prompt.get_move(&Board::new()).unwrap_err();
        assert!(matches!(err, PlayError::EndOfInput));
    }
}
