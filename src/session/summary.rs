use crate::game::{GameOutcome, Player};

/// Running tally of finished games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: usize,
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
}

impl SessionSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;
        match outcome {
            GameOutcome::Winner(Player::Red) => self.red_wins += 1,
            GameOutcome::Winner(Player::Yellow) => self.yellow_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }
}
