use serde::{Deserialize, Serialize};

use crate::round::Outcome;

/// Cumulative session statistics. Updated exactly once per resolved
/// round; persisted and reloaded by the caller's store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub games_pushed: u32,
    pub total_winnings: u64,
    pub biggest_win: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl SessionStats {
    /// Fold one resolved round into the counters. Wins extend the streak,
    /// losses reset it, pushes leave it untouched.
    pub fn record(&mut self, outcome: Outcome, wager: u32) {
        self.games_played += 1;

        if outcome.is_win() {
            self.games_won += 1;
            self.total_winnings += u64::from(wager);
            self.biggest_win = self.biggest_win.max(wager);
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else if outcome.is_loss() {
            self.games_lost += 1;
            self.current_streak = 0;
        } else {
            self.games_pushed += 1;
        }
    }

    /// Share of played games won, as a percentage for display.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) * 100.0 / f64::from(self.games_played)
    }
}
