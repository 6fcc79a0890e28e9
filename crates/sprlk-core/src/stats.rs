//! Cumulative session statistics.

use serde::{Deserialize, Serialize};

use crate::outcome::Verdict;

/// Counters for one session. They only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds played.
    pub rounds: u32,
    /// Rounds that ended in a tie.
    pub ties: u32,
    /// Rounds the human won.
    pub player_wins: u32,
    /// Rounds the opponent won.
    pub opponent_wins: u32,
}

impl SessionStats {
    /// Count one finished round.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::PlayerWin => self.player_wins += 1,
            Verdict::OpponentWin => self.opponent_wins += 1,
            Verdict::Tie => self.ties += 1,
        }
        self.rounds += 1;
    }

    /// Rounds that were not ties.
    pub fn decisive(&self) -> u32 {
        self.player_wins + self.opponent_wins
    }

    /// Share of decisive rounds the human won, in percent.
    ///
    /// `None` until a decisive round has been played.
    pub fn player_win_percentage(&self) -> Option<f64> {
        percent(self.player_wins, self.decisive())
    }

    /// Share of all rounds that were ties, in percent.
    ///
    /// `None` until a round has been played.
    pub fn tie_percentage(&self) -> Option<f64> {
        percent(self.ties, self.rounds)
    }

    /// Multi-line human readable summary. Percentages that are not available
    /// yet render as `n/a`.
    pub fn summary(&self) -> String {
        format!(
            "Game Statistics:\n\n\
             Games Played: {}\n\
             Games Computer Won: {}\n\
             Games Player Won: {}\n\
             Games Tied: {}\n\
             Percentage of Player Wins (Out of Total Wins): {}\n\
             Percentage of Ties: {}",
            self.rounds,
            self.opponent_wins,
            self.player_wins,
            self.ties,
            format_percent(self.player_win_percentage()),
            format_percent(self.tie_percentage()),
        )
    }
}

fn percent(part: u32, whole: u32) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(100.0 * f64::from(part) / f64::from(whole))
}

/// Render a percentage with two decimals, or `n/a`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "n/a".to_string(),
    }
}
