//! The gestures a player can throw and the relation between them.
//!
//! Each playable gesture beats exactly two others and loses to exactly two
//! others. Around the canonical cycle Scissors, Paper, Rock, Lizard, Spock
//! every gesture beats its successor, and across the secondary cycle it beats
//! the gesture two steps ahead.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SprlkError;

/// A gesture thrown in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveKind {
    /// Scissors.
    Scissors,
    /// Paper.
    Paper,
    /// Rock.
    Rock,
    /// Lizard.
    Lizard,
    /// Spock.
    Spock,
    /// No gesture yet. Never a playable choice.
    #[default]
    None,
}

impl MoveKind {
    /// The playable gestures in priority order.
    ///
    /// The order doubles as the tie-break when two gestures share the highest
    /// tally.
    pub const PLAYABLE: [MoveKind; 5] = [
        Self::Scissors,
        Self::Paper,
        Self::Rock,
        Self::Lizard,
        Self::Spock,
    ];

    /// Returns true for the five real gestures.
    pub fn is_playable(self) -> bool {
        self != Self::None
    }

    /// Position within [`MoveKind::PLAYABLE`], or `None` for the sentinel.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Scissors => Some(0),
            Self::Paper => Some(1),
            Self::Rock => Some(2),
            Self::Lizard => Some(3),
            Self::Spock => Some(4),
            Self::None => None,
        }
    }

    /// The two gestures that beat this one.
    ///
    /// The first entry is the one drawn next to this gesture in the usual
    /// SPRLK diagram. Empty for [`MoveKind::None`].
    pub fn beaten_by(self) -> &'static [MoveKind] {
        match self {
            Self::Scissors => &[Self::Spock, Self::Rock],
            Self::Paper => &[Self::Scissors, Self::Lizard],
            Self::Rock => &[Self::Paper, Self::Spock],
            Self::Lizard => &[Self::Rock, Self::Scissors],
            Self::Spock => &[Self::Lizard, Self::Paper],
            Self::None => &[],
        }
    }

    /// The two gestures this one beats. Empty for [`MoveKind::None`].
    pub fn defeats(self) -> &'static [MoveKind] {
        match self {
            Self::Scissors => &[Self::Paper, Self::Lizard],
            Self::Paper => &[Self::Rock, Self::Spock],
            Self::Rock => &[Self::Lizard, Self::Scissors],
            Self::Lizard => &[Self::Spock, Self::Paper],
            Self::Spock => &[Self::Scissors, Self::Rock],
            Self::None => &[],
        }
    }

    /// Returns true if this gesture beats `other`.
    pub fn beats(self, other: MoveKind) -> bool {
        self.defeats().contains(&other)
    }

    /// The first playable gesture that beats every gesture in `others`.
    ///
    /// Against the two gestures that beat a common target there is always
    /// exactly one such gesture.
    pub fn beating_all(others: &[MoveKind]) -> Option<MoveKind> {
        Self::PLAYABLE
            .into_iter()
            .find(|m| others.iter().all(|&o| m.beats(o)))
    }

    /// The verb used when this gesture beats `other`, e.g. "cuts" for
    /// Scissors against Paper.
    pub fn verb_against(self, other: MoveKind) -> Option<&'static str> {
        match (self, other) {
            (Self::Scissors, Self::Paper) => Some("cuts"),
            (Self::Scissors, Self::Lizard) => Some("decapitates"),
            (Self::Paper, Self::Rock) => Some("covers"),
            (Self::Paper, Self::Spock) => Some("disproves"),
            (Self::Rock, Self::Lizard) | (Self::Rock, Self::Scissors) => Some("crushes"),
            (Self::Lizard, Self::Spock) => Some("poisons"),
            (Self::Lizard, Self::Paper) => Some("eats"),
            (Self::Spock, Self::Scissors) => Some("smashes"),
            (Self::Spock, Self::Rock) => Some("vaporizes"),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scissors => write!(f, "Scissors"),
            Self::Paper => write!(f, "Paper"),
            Self::Rock => write!(f, "Rock"),
            Self::Lizard => write!(f, "Lizard"),
            Self::Spock => write!(f, "Spock"),
            Self::None => write!(f, "None"),
        }
    }
}

impl FromStr for MoveKind {
    type Err = SprlkError;

    /// Parse a gesture name or its one-letter shortcut (`k` for Spock).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scissors" | "scissor" | "s" => Ok(Self::Scissors),
            "paper" | "p" => Ok(Self::Paper),
            "rock" | "r" => Ok(Self::Rock),
            "lizard" | "l" => Ok(Self::Lizard),
            "spock" | "k" => Ok(Self::Spock),
            "none" => Ok(Self::None),
            _ => Err(SprlkError::UnknownMove(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gesture_beats_two_and_loses_to_two() {
        for m in MoveKind::PLAYABLE {
            assert_eq!(m.defeats().len(), 2);
            assert_eq!(m.beaten_by().len(), 2);
            for &loser in m.defeats() {
                assert!(loser.beaten_by().contains(&m), "{m} vs {loser}");
            }
        }
    }

    #[test]
    fn exactly_one_relation_per_pair() {
        for a in MoveKind::PLAYABLE {
            for b in MoveKind::PLAYABLE {
                let relations = [a.beats(b), b.beats(a), a == b]
                    .iter()
                    .filter(|&&r| r)
                    .count();
                assert_eq!(relations, 1, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn canonical_cycle() {
        assert!(MoveKind::Scissors.beats(MoveKind::Paper));
        assert!(MoveKind::Paper.beats(MoveKind::Rock));
        assert!(MoveKind::Rock.beats(MoveKind::Lizard));
        assert!(MoveKind::Lizard.beats(MoveKind::Spock));
        assert!(MoveKind::Spock.beats(MoveKind::Scissors));
    }

    #[test]
    fn none_relates_to_nothing() {
        assert!(!MoveKind::None.is_playable());
        assert!(MoveKind::None.defeats().is_empty());
        assert!(MoveKind::None.beaten_by().is_empty());
        for m in MoveKind::PLAYABLE {
            assert!(!m.beats(MoveKind::None));
            assert!(!MoveKind::None.beats(m));
        }
    }

    #[test]
    fn one_gesture_beats_both_counters() {
        for target in MoveKind::PLAYABLE {
            let answer = MoveKind::beating_all(target.beaten_by());
            assert!(answer.is_some(), "{target}");
        }
        assert_eq!(
            MoveKind::beating_all(MoveKind::Scissors.beaten_by()),
            Some(MoveKind::Paper)
        );
        assert_eq!(
            MoveKind::beating_all(&[MoveKind::Rock, MoveKind::Paper]),
            None
        );
    }

    #[test]
    fn verbs_cover_every_win() {
        for a in MoveKind::PLAYABLE {
            for b in MoveKind::PLAYABLE {
                assert_eq!(a.verb_against(b).is_some(), a.beats(b), "{a} vs {b}");
            }
        }
        assert_eq!(MoveKind::Lizard.verb_against(MoveKind::Paper), Some("eats"));
    }

    #[test]
    fn parse_names_and_shortcuts() {
        assert_eq!("Rock".parse::<MoveKind>(), Ok(MoveKind::Rock));
        assert_eq!(" SPOCK ".parse::<MoveKind>(), Ok(MoveKind::Spock));
        assert_eq!("k".parse::<MoveKind>(), Ok(MoveKind::Spock));
        assert_eq!("scissor".parse::<MoveKind>(), Ok(MoveKind::Scissors));
        assert_eq!("none".parse::<MoveKind>(), Ok(MoveKind::None));
        assert_eq!(
            "dynamite".parse::<MoveKind>(),
            Err(SprlkError::UnknownMove("dynamite".to_string()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(MoveKind::Lizard.to_string(), "Lizard");
        assert_eq!(MoveKind::None.to_string(), "None");
    }

    #[test]
    fn index_follows_priority_order() {
        for (i, m) in MoveKind::PLAYABLE.iter().enumerate() {
            assert_eq!(m.index(), Some(i));
        }
        assert_eq!(MoveKind::None.index(), None);
    }

    #[test]
    fn round_trip_serde() {
        let json = serde_json::to_string(&MoveKind::Spock).unwrap();
        let back: MoveKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MoveKind::Spock);
    }
}
