//! Round resolution and session bookkeeping.
//!
//! `RoundResolver` is the only entry point a frontend needs. Each call to
//! [`RoundResolver::play_round`] is a complete transaction: the opponent
//! picks its gesture from the history of earlier rounds, the outcome matrix
//! decides the round, the statistics are updated and the human's gesture is
//! handed back to the opponent for the rounds that follow.

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::error::{SprlkError, SprlkResult};
use crate::gesture::MoveKind;
use crate::outcome::{RoundOutcome, judge};
use crate::predictor::Predictor;
use crate::stats::SessionStats;

/// Plays rounds against a [`Predictor`] and keeps the score.
#[derive(Debug, Clone)]
pub struct RoundResolver<R = StdRng> {
    predictor: Predictor<R>,
    stats: SessionStats,
    last: Option<RoundOutcome>,
}

impl RoundResolver<StdRng> {
    /// Start a session from configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        let predictor = match config.seed {
            Some(seed) => Predictor::seeded(seed),
            None => Predictor::from_os_rng(),
        };
        Self::new(predictor)
    }
}

impl<R: Rng> RoundResolver<R> {
    /// Start a session against the given opponent.
    pub fn new(predictor: Predictor<R>) -> Self {
        Self {
            predictor,
            stats: SessionStats::default(),
            last: None,
        }
    }

    /// Play one round with the human's gesture.
    ///
    /// Fails with [`SprlkError::InvalidMove`] for [`MoveKind::None`], in which
    /// case nothing changes.
    pub fn play_round(&mut self, human: MoveKind) -> SprlkResult<RoundOutcome> {
        if !human.is_playable() {
            log::warn!("rejected round with gesture {human}");
            return Err(SprlkError::InvalidMove(human));
        }

        let opponent = self.predictor.next_move(self.stats.rounds);
        let verdict = judge(human, opponent);
        self.stats.record(verdict);
        self.predictor.record_human_move(human);

        let outcome = RoundOutcome {
            verdict,
            human,
            opponent,
            round: self.stats.rounds,
        };
        log::info!(
            "round {}: {human} vs {opponent}, {verdict}",
            outcome.round
        );
        self.last = Some(outcome.clone());
        Ok(outcome)
    }

    /// Snapshot of the session statistics.
    pub fn current_stats(&self) -> SessionStats {
        self.stats
    }

    /// Human readable statistics, see [`SessionStats::summary`].
    pub fn formatted_summary(&self) -> String {
        self.stats.summary()
    }

    /// The most recently resolved round.
    pub fn last_round(&self) -> Option<&RoundOutcome> {
        self.last.as_ref()
    }

    /// The opponent, for inspecting its tally.
    pub fn predictor(&self) -> &Predictor<R> {
        &self.predictor
    }
}
