//! Round outcomes and the outcome matrix.

use serde::{Deserialize, Serialize};

use crate::gesture::MoveKind;

/// Who won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The human's gesture beat the opponent's.
    PlayerWin,
    /// The opponent's gesture beat the human's.
    OpponentWin,
    /// Both threw the same gesture.
    Tie,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerWin => write!(f, "Player Won"),
            Self::OpponentWin => write!(f, "Computer Won"),
            Self::Tie => write!(f, "Tie Round"),
        }
    }
}

/// Apply the outcome matrix to a pair of gestures.
pub fn judge(human: MoveKind, opponent: MoveKind) -> Verdict {
    if human == opponent {
        Verdict::Tie
    } else if human.beats(opponent) {
        Verdict::PlayerWin
    } else {
        Verdict::OpponentWin
    }
}

/// The result of a single resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Who won.
    pub verdict: Verdict,
    /// The human's gesture.
    pub human: MoveKind,
    /// The opponent's gesture.
    pub opponent: MoveKind,
    /// 1-based number of this round within the session.
    pub round: u32,
}

impl RoundOutcome {
    /// Status line for the round: "Player Won", "Computer Won" or "Tie Round".
    pub fn status(&self) -> String {
        self.verdict.to_string()
    }

    /// One-line description of what happened, e.g. "Rock crushes Scissors".
    pub fn describe(&self) -> String {
        let (winner, loser) = match self.verdict {
            Verdict::Tie => return format!("Both threw {}", self.human),
            Verdict::PlayerWin => (self.human, self.opponent),
            Verdict::OpponentWin => (self.opponent, self.human),
        };
        match winner.verb_against(loser) {
            Some(verb) => format!("{winner} {verb} {loser}"),
            None => format!("{winner} beats {loser}"),
        }
    }
}
