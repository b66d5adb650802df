use std::io::{BufRead, Write};

use tracing::info;

use crate::config::AppConfig;
use crate::error::PlayError;
use crate::game::{GameOutcome, Player};
use crate::players::ConsolePrompt;
use crate::ui::SharedConsole;

use super::game_loop::{GameLoop, Participant};
use super::summary::SessionSummary;

/// Runs console games back to back until the players stop.
///
/// Every game gets a fresh [`GameLoop`], board and pair of participants;
/// only the tally survives between games.
pub struct Session<R, W> {
    console: SharedConsole<R, W>,
    config: AppConfig,
    summary: SessionSummary,
}

impl<R, W> Session<R, W>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    pub fn new(console: SharedConsole<R, W>, config: AppConfig) -> Self {
        Session {
            console,
            config,
            summary: SessionSummary::default(),
        }
    }

    fn new_game(&self) -> GameLoop {
        let players = &self.config.players;
        let seat = |player: Player| {
            let name = players.name(player).to_string();
            let source = ConsolePrompt::new(name.clone(), self.console.clone());
            Participant::new(name, Box::new(source))
        };
        GameLoop::new(seat(Player::Red), seat(Player::Yellow), players.first)
    }

    /// Play a single game to the end and announce the result.
    pub fn play_one(&mut self) -> Result<GameOutcome, PlayError> {
        let mut game = self.new_game();
        let mut sink = self.console.clone();
        let outcome = game.run(&mut sink)?;

        let message = match outcome {
            GameOutcome::Winner(player) => {
                format!("{} is WINNER!", self.config.players.name(player))
            }
            GameOutcome::Draw => "It's a draw!".to_string(),
        };
        self.console.borrow_mut().say(&message)?;
        self.summary.record(outcome);
        Ok(outcome)
    }

    /// Ask whether to play again. End of input counts as "no".
    fn ask_replay(&mut self) -> Result<bool, PlayError> {
        let mut console = self.console.borrow_mut();
        console.say("Play again? (y/n): ")?;
        loop {
            let Some(answer) = console.read_line()? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => console.say("Please answer y or n: ")?,
            }
        }
    }

    /// Keep playing until a player declines a rematch, quits, or input ends.
    /// An unfinished game is not counted in the summary.
    pub fn run(&mut self) -> Result<SessionSummary, PlayError> {
        loop {
            match self.play_one() {
                Ok(_) => {}
                Err(PlayError::Quit(name)) => {
                    info!(player = %name, "player quit");
                    self.console.borrow_mut().say(&format!("{name} left the game."))?;
                    break;
                }
                Err(PlayError::EndOfInput) => {
                    info!("input closed mid-game");
                    break;
                }
                Err(err) => return Err(err),
            }

            if !self.config.display.replay_prompt || !self.ask_replay()? {
                break;
            }
        }

        let summary = self.summary;
        let players = &self.config.players;
        info!(
            games = summary.games_played,
            red_wins = summary.red_wins,
            yellow_wins = summary.yellow_wins,
            draws = summary.draws,
            "session finished"
        );
        if summary.games_played > 1 {
            let scores: Vec<String> = [Player::Red, Player::Yellow]
                .into_iter()
                .map(|player| format!("{} {}", players.name(player), summary.wins(player)))
                .collect();
            self.console.borrow_mut().say(&format!(
                "Final score after {} games: {}, draws {}",
                summary.games_played,
                scores.join(", "),
                summary.draws
            ))?;
        }
        Ok(summary)
    }
}
