//! Scripted players for simulated sessions.

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sprlk_core::{MoveKind, MoveTally};

/// How a scripted player picks its gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Always the same gesture.
    Constant,
    /// Scissors, Paper, Rock, Lizard, Spock, then around again.
    Cycle,
    /// Uniformly random gestures.
    Random,
    /// Track its own tally the way the opponent does and throw the one
    /// gesture that beats both of the opponent's candidates.
    Counter,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant => write!(f, "constant"),
            Self::Cycle => write!(f, "cycle"),
            Self::Random => write!(f, "random"),
            Self::Counter => write!(f, "counter"),
        }
    }
}

/// A player that follows a [`Strategy`].
pub struct ScriptedPlayer {
    strategy: Strategy,
    opening: MoveKind,
    thrown: MoveTally,
    rng: StdRng,
}

impl ScriptedPlayer {
    /// Create a player. `opening` is the constant gesture, and the first
    /// gesture of the cycle and counter strategies.
    pub fn new(strategy: Strategy, opening: MoveKind, seed: u64) -> Self {
        Self {
            strategy,
            opening,
            thrown: MoveTally::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The next gesture to throw.
    pub fn next_move(&mut self) -> MoveKind {
        let gesture = match self.strategy {
            Strategy::Constant => self.opening,
            Strategy::Cycle => {
                let start = self.opening.index().unwrap_or(0);
                let offset = self.thrown.total() as usize;
                MoveKind::PLAYABLE[(start + offset) % MoveKind::PLAYABLE.len()]
            }
            Strategy::Random => {
                MoveKind::PLAYABLE[self.rng.random_range(0..MoveKind::PLAYABLE.len())]
            }
            Strategy::Counter => match self.thrown.preferred() {
                MoveKind::None => self.opening,
                preferred => MoveKind::beating_all(preferred.beaten_by()).unwrap_or(self.opening),
            },
        };
        self.thrown.record(gesture);
        gesture
    }
}
