use tracing::{debug, info, warn};

use crate::error::PlayError;
use crate::game::{GameOutcome, GameState, Player};
use crate::players::MoveSource;
use crate::ui::RenderSink;

/// One side of a game: a display name and whoever picks its moves.
/// The disc colour comes from the seat the participant is given.
pub struct Participant {
    name: String,
    source: Box<dyn MoveSource>,
}

impl Participant {
    pub fn new(name: impl Into<String>, source: Box<dyn MoveSource>) -> Self {
        Participant {
            name: name.into(),
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Drives a single game from an empty board to a win or draw.
pub struct GameLoop {
    state: GameState,
    red: Participant,
    yellow: Participant,
}

impl GameLoop {
    pub fn new(red: Participant, yellow: Participant, first: Player) -> Self {
        GameLoop {
            state: GameState::starting_with(first),
            red,
            yellow,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn participant(&self, player: Player) -> &Participant {
        match player {
            Player::Red => &self.red,
            Player::Yellow => &self.yellow,
        }
    }

    /// Play one turn for the current player.
    ///
    /// A column the board refuses is reported to the sink and the same
    /// player is asked again. Returns the outcome once the game is over.
    pub fn step(&mut self, sink: &mut dyn RenderSink) -> Result<Option<GameOutcome>, PlayError> {
        if let Some(outcome) = self.state.outcome() {
            return Ok(Some(outcome));
        }

        let player = self.state.current_player();
        let seat = match player {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        };

        loop {
            let column = seat.source.get_move(self.state.board())?;
            match self.state.play(column) {
                Ok(placement) => {
                    debug!(
                        player = player.name(),
                        column = placement.column,
                        row = placement.row,
                        "disc placed"
                    );
                    sink.show_board(&self.state.board().render())?;
                    return Ok(placement.outcome);
                }
                Err(err) => {
                    warn!(
                        player = player.name(),
                        column,
                        ?err,
                        valid = ?self.state.board().valid_columns(),
                        "placement refused, asking again"
                    );
                    sink.show_message("No Room! Try a different column.")?;
                }
            }
        }
    }

    /// Show the empty board, then play turns until the game ends.
    pub fn run(&mut self, sink: &mut dyn RenderSink) -> Result<GameOutcome, PlayError> {
        sink.show_board(&self.state.board().render())?;

        loop {
            if let Some(outcome) = self.step(sink)? {
                match outcome {
                    GameOutcome::Winner(player) => info!(
                        winner = self.participant(player).name(),
                        colour = player.name(),
                        moves = self.state.board().disc_count(),
                        "game won"
                    ),
                    GameOutcome::Draw => info!("game drawn"),
                }
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{check_win, Cell, COLS, ROWS};
    use crate::players::ScriptedMoves;
    use crate::ui::RecordingSink;

    fn scripted_game(red: &[usize], yellow: &[usize]) -> GameLoop {
        GameLoop::new(
            Participant::new("Ann", Box::new(ScriptedMoves::new(Player::Red, red.to_vec()))),
            Participant::new("Bo", Box::new(ScriptedMoves::new(Player::Yellow, yellow.to_vec()))),
            Player::Red,
        )
    }

    #[test]
    fn test_vertical_win_in_column_three() {
        let mut game = scripted_game(&[3, 3, 3, 3], &[0, 1, 0]);
        let mut sink = RecordingSink::default();

        let outcome = game.run(&mut sink).unwrap();
        assert_eq!(outcome, GameOutcome::Winner(Player::Red));
        assert!(check_win(game.state().board(), Cell::Red));

        // Initial empty board plus one snapshot per placement
        assert_eq!(sink.boards.len(), 8);
        let last = sink.boards.last().unwrap();
        let rows: Vec<&str> = last.lines().collect();
        assert_eq!(rows[0], ". . . . . . .");
        assert_eq!(rows[1], ". . . . . . .");
        assert_eq!(rows[2], ". . . R . . .");
        assert_eq!(rows[3], ". . . R . . .");
        assert_eq!(rows[4], "Y . . R . . .");
        assert_eq!(rows[5], "Y Y . R . . .");
    }

    #[test]
    fn test_refused_column_is_requested_again() {
        // Red offers an out-of-range column first, then a legal one.
        let mut game = scripted_game(&[COLS, 2, 2, 2, 2], &[5, 5, 5]);
        let mut sink = RecordingSink::default();

        let outcome = game.run(&mut sink).unwrap();
        assert_eq!(outcome, GameOutcome::Winner(Player::Red));
        assert_eq!(sink.messages, vec!["No Room! Try a different column.".to_string()]);
        // The refused request did not hand the turn to Yellow
        assert_eq!(game.state().board().column_height(5), 3);
    }

    #[test]
    fn test_full_column_from_script_is_refused() {
        let mut red = vec![0, 0, 0];
        red.extend([0, 6, 6, 6, 6]);
        let mut game = scripted_game(&red, &[0, 0, 0, 1, 1, 1]);
        let mut sink = RecordingSink::default();

        let outcome = game.run(&mut sink).unwrap();
        assert_eq!(outcome, GameOutcome::Winner(Player::Red));
        assert_eq!(game.state().board().column_height(0), ROWS);
        assert_eq!(sink.messages.len(), 1);
    }

    #[test]
    fn test_exhausted_script_stops_the_game() {
        let mut game = scripted_game(&[0, 1], &[6]);
        let mut sink = RecordingSink::default();

        let err = game.run(&mut sink).unwrap_err();
        assert!(matches!(err, PlayError::ScriptExhausted(Player::Yellow)));
        assert!(!game.state().is_terminal());
        assert_eq!(game.state().board().disc_count(), 3);
    }

    #[test]
    fn test_step_after_game_over_is_stable() {
        let mut game = scripted_game(&[3, 3, 3, 3], &[0, 1, 0]);
        let mut sink = RecordingSink::default();
        let outcome = game.run(&mut sink).unwrap();

        let boards_before = sink.boards.len();
        assert_eq!(game.step(&mut sink).unwrap(), Some(outcome));
        assert_eq!(sink.boards.len(), boards_before);
    }

    #[test]
    fn test_yellow_can_start() {
        let mut game = GameLoop::new(
            Participant::new("Ann", Box::new(ScriptedMoves::new(Player::Red, vec![6, 6, 6]))),
            Participant::new("Bo", Box::new(ScriptedMoves::new(Player::Yellow, vec![1, 1, 1, 1]))),
            Player::Yellow,
        );
        let mut sink = RecordingSink::default();

        let outcome = game.run(&mut sink).unwrap();
        assert_eq!(outcome, GameOutcome::Winner(Player::Yellow));
        assert_eq!(game.participant(Player::Yellow).name(), "Bo");
    }
}
